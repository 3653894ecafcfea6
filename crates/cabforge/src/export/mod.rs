//! Scene exporters.

mod glb;

pub use glb::{to_glb_bytes, write_glb};
