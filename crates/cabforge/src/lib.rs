#![warn(missing_docs)]

//! cabforge: procedural arcade cabinet templates
//!
//! Builds upright, cocktail, driving and light-gun cabinets from declarative
//! part tables and exports them as binary glTF. Every part lands in a named
//! node under `cabinet-root`; the names in [`catalog`] are the contract with
//! downstream tools.
//!
//! # Example
//!
//! ```rust,no_run
//! use cabforge::{build, write_glb, BuildOptions, Variant};
//!
//! let scene = build(Variant::Driving, &BuildOptions::default()).unwrap();
//! assert!(scene.find("steering-wheel").is_some());
//! write_glb(&scene, Variant::Driving.default_output()).unwrap();
//! ```

mod assemble;
pub mod catalog;
mod config;
mod error;
#[cfg(feature = "gltf")]
pub mod export;
pub mod part;
pub mod scene;
mod summary;
pub mod variants;

pub use assemble::assemble;
pub use catalog::Category;
pub use config::BuildOptions;
pub use error::CabinetError;
#[cfg(feature = "gltf")]
pub use export::{to_glb_bytes, write_glb};
pub use part::{PartShape, PartSpec, TrimSection};
pub use scene::{NodeId, Scene, SceneError, SceneNode};
pub use summary::{summarize, NodeSummary};
pub use variants::{Fitting, ParseVariantError, Variant};

/// Build a variant's full scene.
///
/// Each call starts from an empty scene, so repeated builds with the same
/// options produce identical geometry.
pub fn build(variant: Variant, options: &BuildOptions) -> Result<Scene, CabinetError> {
    assemble(variant, &variant.parts(), options)
}
