#![warn(missing_docs)]

//! 2D sketch profiles and the panel shapes built from them.
//!
//! A [`Profile`] is a closed polyline in a [`SketchPlane`]'s `(u, v)`
//! coordinates. [`extrude`] turns it into a slab of constant thickness
//! along the plane's depth axis; [`cutout_panel`] builds a rectangular
//! frame with a rectangular hole.
//!
//! # Example
//!
//! ```
//! use cabforge_kernel_sketch::{extrude, PanelSide, Profile, SketchPlane};
//!
//! let profile = Profile::from_tuples(&[(0.0, 0.0), (0.4, 0.0), (0.4, 1.0), (0.0, 1.0)]).unwrap();
//! let slab = extrude(&profile, &SketchPlane::xz(), 0.02, PanelSide::Right).unwrap();
//! assert_eq!(slab.num_vertices(), 8);
//! assert_eq!(slab.num_faces(), 6);
//! ```

mod cutout;
mod extrude;
mod profile;

pub use cutout::{cutout_panel, CutoutSpec};
pub use extrude::extrude;
pub use profile::{PanelSide, Profile, SketchPlane};

use cabforge_kernel_mesh::MeshError;
use thiserror::Error;

/// Errors from sketch construction and panel operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// Too few points, coincident consecutive points, or a bad thickness.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The cutout is not strictly inside the outer rectangle, or a dimension is not positive.
    #[error(
        "degenerate cutout: outer {outer_width}x{outer_height}, inner {inner_width}x{inner_height}, thickness {thickness}"
    )]
    DegenerateCutout {
        /// Outer width.
        outer_width: f64,
        /// Outer height.
        outer_height: f64,
        /// Cutout width.
        inner_width: f64,
        /// Cutout height.
        inner_height: f64,
        /// Panel thickness.
        thickness: f64,
    },

    /// A generated face was rejected by the mesh builder.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
