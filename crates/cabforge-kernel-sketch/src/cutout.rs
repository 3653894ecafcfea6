//! Rectangular frame panels with a rectangular opening (monitor bezels).

use cabforge_kernel_math::Point2;
use cabforge_kernel_mesh::{Mesh, MeshBuilder};

use crate::{SketchError, SketchPlane};

/// Dimensions of a cutout panel, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutSpec {
    /// Outer extent along the plane's u axis.
    pub outer_width: f64,
    /// Outer extent along the plane's v axis.
    pub outer_height: f64,
    /// Opening extent along u.
    pub inner_width: f64,
    /// Opening extent along v.
    pub inner_height: f64,
    /// Extent along the depth axis.
    pub thickness: f64,
}

impl CutoutSpec {
    fn validate(&self) -> Result<(), SketchError> {
        let positive = [
            self.outer_width,
            self.outer_height,
            self.inner_width,
            self.inner_height,
            self.thickness,
        ]
        .iter()
        .all(|d| d.is_finite() && *d > 0.0);
        if positive && self.inner_width < self.outer_width && self.inner_height < self.outer_height {
            Ok(())
        } else {
            Err(SketchError::DegenerateCutout {
                outer_width: self.outer_width,
                outer_height: self.outer_height,
                inner_width: self.inner_width,
                inner_height: self.inner_height,
                thickness: self.thickness,
            })
        }
    }
}

fn corners(width: f64, height: f64) -> [Point2; 4] {
    let (hw, hh) = (width * 0.5, height * 0.5);
    [
        Point2::new(-hw, -hh),
        Point2::new(hw, -hh),
        Point2::new(hw, hh),
        Point2::new(-hw, hh),
    ]
}

/// Build a picture-frame panel centred on the plane origin.
///
/// Vertex layout: outer front 0..4, inner front 4..8, outer back 8..12,
/// inner back 12..16. Faces: four front ring quads, four back ring quads,
/// four outer walls, four inner walls. The front plane is the side
/// `x_dir × y_dir` points to, so every quad faces out of the material.
///
/// # Errors
///
/// Returns [`SketchError::DegenerateCutout`] unless all dimensions are
/// positive and the opening is strictly smaller on both axes.
pub fn cutout_panel(spec: &CutoutSpec, plane: &SketchPlane) -> Result<Mesh, SketchError> {
    spec.validate()?;

    let front_offset = plane.handedness() * spec.thickness * 0.5;
    let outer = corners(spec.outer_width, spec.outer_height);
    let inner = corners(spec.inner_width, spec.inner_height);

    let mut b = MeshBuilder::with_capacity(16, 16);
    let of = b.add_vertices(outer.iter().map(|p| plane.to_3d(p, front_offset)));
    let inf = b.add_vertices(inner.iter().map(|p| plane.to_3d(p, front_offset)));
    let ob = b.add_vertices(outer.iter().map(|p| plane.to_3d(p, -front_offset)));
    let ib = b.add_vertices(inner.iter().map(|p| plane.to_3d(p, -front_offset)));

    for i in 0..4 {
        let j = (i + 1) % 4;
        b.add_face(&[of[i], of[j], inf[j], inf[i]])?;
    }
    for i in 0..4 {
        let j = (i + 1) % 4;
        b.add_face(&[ib[i], ib[j], ob[j], ob[i]])?;
    }
    for i in 0..4 {
        let j = (i + 1) % 4;
        b.add_face(&[of[i], ob[i], ob[j], of[j]])?;
    }
    for i in 0..4 {
        let j = (i + 1) % 4;
        b.add_face(&[inf[i], inf[j], ib[j], ib[i]])?;
    }
    Ok(b.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cabforge_kernel_math::Vec3;

    const BEZEL: CutoutSpec = CutoutSpec {
        outer_width: 0.45,
        outer_height: 0.40,
        inner_width: 0.35,
        inner_height: 0.28,
        thickness: 0.01,
    };

    #[test]
    fn test_counts() {
        let m = cutout_panel(&BEZEL, &SketchPlane::xz()).unwrap();
        assert_eq!(m.num_vertices(), 16);
        assert_eq!(m.num_faces(), 16);
        assert!(m.faces().iter().all(|f| f.len() == 4));
    }

    #[test]
    fn test_front_ring_area_is_frame_area() {
        let m = cutout_panel(&BEZEL, &SketchPlane::xz()).unwrap();
        let front: Vec3 = (0..4).map(|f| m.face_vector_area(f)).sum();
        let expected = 0.45 * 0.40 - 0.35 * 0.28;
        assert_relative_eq!(front.norm(), expected, epsilon = 1e-12);
        let back: Vec3 = (4..8).map(|f| m.face_vector_area(f)).sum();
        assert_relative_eq!((front + back).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_front_plane_side() {
        // bezel in XZ faces -Y, table-top glass in XY faces +Z
        let upright = cutout_panel(&BEZEL, &SketchPlane::xz()).unwrap();
        assert!(upright.vertices()[..8].iter().all(|p| p.y < 0.0));
        assert!(upright.face_normal(0).unwrap().y < -0.999);

        let table = cutout_panel(&BEZEL, &SketchPlane::xy()).unwrap();
        assert!(table.vertices()[..8].iter().all(|p| p.z > 0.0));
        assert!(table.face_normal(0).unwrap().z > 0.999);
    }

    #[test]
    fn test_walls_face_out_of_material() {
        let m = cutout_panel(&BEZEL, &SketchPlane::xz()).unwrap();
        // outer walls point away from the centre
        for f in 8..12 {
            let c = m.face_centroid(f);
            assert!(m.face_vector_area(f).dot(&c.coords) > 0.0);
        }
        // inner walls point into the opening
        for f in 12..16 {
            let c = m.face_centroid(f);
            assert!(m.face_vector_area(f).dot(&c.coords) < 0.0);
        }
    }

    #[test]
    fn test_degenerate_cutouts_rejected() {
        let too_wide = CutoutSpec {
            inner_width: 0.45,
            ..BEZEL
        };
        let too_tall = CutoutSpec {
            inner_height: 0.50,
            ..BEZEL
        };
        let flat = CutoutSpec {
            thickness: 0.0,
            ..BEZEL
        };
        for spec in [too_wide, too_tall, flat] {
            let err = cutout_panel(&spec, &SketchPlane::xz()).unwrap_err();
            assert!(matches!(err, SketchError::DegenerateCutout { .. }));
        }
    }
}
