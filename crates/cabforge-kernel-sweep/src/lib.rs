#![warn(missing_docs)]

//! Path sweeps: lay a constant cross-section along polyline waypoints.
//!
//! Each pair of consecutive waypoints becomes an independent closed segment
//! (a box or a capped tube) oriented by its [`SegmentFrame`]. Segments are
//! not mitred or joined; they are concatenated into one mesh.
//!
//! # Example
//!
//! ```
//! use cabforge_kernel_sweep::{sweep, SweepPath, SweepSection};
//!
//! let path = SweepPath::from_tuples(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (1.0, 1.0, 0.0)]);
//! let section = SweepSection::Box { width: 0.012, depth: 0.008 };
//! let swept = sweep(&[path], &section).unwrap().unwrap();
//! assert_eq!(swept.segments, 2);
//! assert_eq!(swept.mesh.num_faces(), 12);
//! ```

mod frame;
mod sweep;

pub use frame::SegmentFrame;
pub use sweep::{sweep, SweepPath, SweepSection, Swept};

use cabforge_kernel_mesh::MeshError;
use thiserror::Error;

/// Errors from sweep operations.
///
/// Degenerate segments and sweeps that produce nothing are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// The cross-section has a non-positive dimension or too few sides.
    #[error("invalid sweep section: {0}")]
    InvalidSection(String),

    /// A generated face was rejected by the mesh builder.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
