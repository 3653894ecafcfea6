//! Error type shared by the cabinet builders and exporters.

use cabforge_kernel_mesh::MeshError;
use cabforge_kernel_sketch::SketchError;
use cabforge_kernel_sweep::SweepError;
use thiserror::Error;

use crate::scene::SceneError;

/// Errors returned while building or exporting a cabinet.
#[derive(Error, Debug)]
pub enum CabinetError {
    /// A profile or cutout could not be built.
    #[error(transparent)]
    Sketch(#[from] SketchError),
    /// A trim sweep could not be built.
    #[error(transparent)]
    Sweep(#[from] SweepError),
    /// A mesh builder rejected a face.
    #[error(transparent)]
    Mesh(#[from] MeshError),
    /// The scene graph is inconsistent.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// An I/O error occurred during export or config loading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The exporter could not encode the scene.
    #[error("export failed: {0}")]
    Export(String),
    /// Build options are malformed or out of range.
    #[error("invalid build options: {0}")]
    Config(String),
    /// A named part failed to build.
    #[error("part `{part}`: {source}")]
    Part {
        /// Catalog name of the part.
        part: String,
        /// What went wrong.
        #[source]
        source: Box<CabinetError>,
    },
}

impl CabinetError {
    /// Attach the name of the part being built.
    pub fn in_part(self, part: &str) -> Self {
        CabinetError::Part {
            part: part.to_string(),
            source: Box::new(self),
        }
    }
}
