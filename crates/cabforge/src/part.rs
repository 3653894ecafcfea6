//! Declarative part descriptions and the shape builders behind them.

use cabforge_kernel_math::{Placement, Vec3};
use cabforge_kernel_mesh::{cuboid, plane, Mesh};
use cabforge_kernel_sketch::{cutout_panel, extrude, CutoutSpec, PanelSide, Profile, SketchPlane};
use cabforge_kernel_sweep::{sweep, SweepPath, SweepSection};

use crate::catalog::Category;
use crate::variants::Fitting;
use crate::{BuildOptions, CabinetError};

/// Cross-section of a trim strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrimSection {
    /// Flat strip `width × depth`.
    Box {
        /// Extent along the segment normal.
        width: f64,
        /// Extent along the segment lateral axis.
        depth: f64,
    },
    /// Round bead; its side count comes from [`BuildOptions::round_segments`].
    Round {
        /// Bead radius.
        radius: f64,
    },
}

impl TrimSection {
    fn to_sweep(self, options: &BuildOptions) -> SweepSection {
        match self {
            TrimSection::Box { width, depth } => SweepSection::Box { width, depth },
            TrimSection::Round { radius } => SweepSection::Round {
                radius,
                segments: options.round_segments,
            },
        }
    }
}

/// How a part's mesh is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PartShape {
    /// Side-panel slab: a profile in the XZ plane extruded along Y.
    Slab {
        /// Silhouette as `(x, z)` points.
        profile: &'static [(f64, f64)],
        /// Panel thickness.
        thickness: f64,
        /// Which way the front ring is offset.
        side: PanelSide,
    },
    /// Picture-frame panel.
    Cutout {
        /// Outer and opening dimensions.
        spec: CutoutSpec,
        /// Plane the frame lies in.
        plane: SketchPlane,
    },
    /// Axis-aligned box, full extents.
    Cuboid {
        /// `(x, y, z)` extents.
        size: [f64; 3],
    },
    /// Single quad in the XY plane facing +Z.
    Plane {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
    },
    /// Edge trim swept along waypoint paths.
    Trim {
        /// Waypoints of each strip.
        paths: Vec<&'static [(f64, f64, f64)]>,
        /// Cross-section of the strip.
        section: TrimSection,
    },
    /// Multi-primitive fitting.
    Fitting(Fitting),
}

impl PartShape {
    /// Build the mesh in part-local space.
    ///
    /// Returns `Ok(None)` only for trim whose every segment was degenerate.
    pub fn build(&self, options: &BuildOptions) -> Result<Option<Mesh>, CabinetError> {
        let mesh = match self {
            PartShape::Slab {
                profile,
                thickness,
                side,
            } => {
                let profile = Profile::from_tuples(profile)?;
                extrude(&profile, &SketchPlane::xz(), *thickness, *side)?
            }
            PartShape::Cutout { spec, plane } => cutout_panel(spec, plane)?,
            PartShape::Cuboid { size } => cuboid(size[0], size[1], size[2])?,
            PartShape::Plane { width, height } => plane(*width, *height)?,
            PartShape::Trim { paths, section } => {
                let paths: Vec<SweepPath> =
                    paths.iter().map(|p| SweepPath::from_tuples(p)).collect();
                return Ok(sweep(&paths, &section.to_sweep(options))?.map(|s| s.mesh));
            }
            PartShape::Fitting(fitting) => fitting.build(options)?,
        };
        Ok(Some(mesh))
    }
}

/// One named entry of a variant's part table.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSpec {
    /// Catalog name of the node.
    pub name: &'static str,
    /// Progress group.
    pub category: Category,
    /// Geometry recipe.
    pub shape: PartShape,
    /// Transform relative to `cabinet-root`.
    pub placement: Placement,
}

impl PartSpec {
    /// A part placed at the origin.
    pub fn new(name: &'static str, category: Category, shape: PartShape) -> Self {
        Self {
            name,
            category,
            shape,
            placement: Placement::identity(),
        }
    }

    /// Translate to `(x, y, z)`, keeping rotation and scale.
    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.placement.translation = Vec3::new(x, y, z);
        self
    }

    /// Set the Euler rotation, keeping translation and scale.
    pub fn rotated(self, rx: f64, ry: f64, rz: f64) -> Self {
        let placement = self.placement.rotated(rx, ry, rz);
        Self { placement, ..self }
    }

    /// Set the scale, keeping translation and rotation.
    pub fn scaled(self, sx: f64, sy: f64, sz: f64) -> Self {
        let placement = self.placement.scaled(sx, sy, sz);
        Self { placement, ..self }
    }
}

/// A box part.
pub fn cuboid_part(name: &'static str, category: Category, sx: f64, sy: f64, sz: f64) -> PartSpec {
    PartSpec::new(name, category, PartShape::Cuboid { size: [sx, sy, sz] })
}

/// A flat single-quad part.
pub fn plane_part(name: &'static str, category: Category, width: f64, height: f64) -> PartSpec {
    PartSpec::new(name, category, PartShape::Plane { width, height })
}

/// A vertical panel `thickness` deep (X), `width` wide (Y) and `height` tall (Z).
pub fn flat_panel(
    name: &'static str,
    category: Category,
    width: f64,
    height: f64,
    thickness: f64,
) -> PartSpec {
    cuboid_part(name, category, thickness, width, height)
}
