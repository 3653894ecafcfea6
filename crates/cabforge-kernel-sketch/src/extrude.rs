//! Extrude operation: thicken a profile into a slab along the plane's depth axis.

use cabforge_kernel_math::Point2;
use cabforge_kernel_mesh::{Mesh, MeshBuilder};

use crate::{PanelSide, Profile, SketchError, SketchPlane};

/// Extrude a closed profile into a slab `thickness` deep.
///
/// The front ring is offset `side.sign() · thickness / 2` along
/// `plane.depth`, the back ring by the opposite amount.
///
/// # Returns
///
/// A mesh with `2n` vertices (front ring first, then back ring) and `n + 2`
/// faces:
/// - the front ring as one n-gon,
/// - the back ring as one reversed n-gon,
/// - one quad `front[i], front[i+1], back[i+1], back[i]` per profile edge.
///
/// The ring runs in whichever direction makes every side quad face away
/// from the profile interior, so left and right panels of the same profile
/// are both wound outward on their edges.
///
/// # Errors
///
/// Returns [`SketchError::InvalidProfile`] if `thickness` is not a positive
/// finite number.
pub fn extrude(
    profile: &Profile,
    plane: &SketchPlane,
    thickness: f64,
    side: PanelSide,
) -> Result<Mesh, SketchError> {
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(SketchError::InvalidProfile(format!(
            "thickness must be positive, got {thickness}"
        )));
    }

    let wants_ccw = side.sign() * plane.handedness() < 0.0;
    let mut ring: Vec<Point2> = profile.points().to_vec();
    if profile.is_ccw() != wants_ccw {
        ring.reverse();
    }

    let n = ring.len();
    let half = side.sign() * thickness * 0.5;
    let mut b = MeshBuilder::with_capacity(2 * n, n + 2);
    let front = b.add_vertices(ring.iter().map(|p| plane.to_3d(p, half)));
    let back = b.add_vertices(ring.iter().map(|p| plane.to_3d(p, -half)));

    b.add_face(&front)?;
    let back_cap: Vec<_> = back.iter().rev().copied().collect();
    b.add_face(&back_cap)?;
    for i in 0..n {
        let j = (i + 1) % n;
        b.add_face(&[front[i], front[j], back[j], back[i]])?;
    }
    Ok(b.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabforge_kernel_math::{Point3, Vec3};

    // Cabinet side silhouette: concave, listed counter-clockwise in (x, z).
    const UPRIGHT: &[(f64, f64)] = &[
        (0.0, 0.0),
        (0.0, 0.15),
        (-0.05, 0.20),
        (-0.05, 0.70),
        (-0.15, 0.85),
        (-0.15, 1.10),
        (-0.10, 1.20),
        (-0.05, 1.50),
        (-0.08, 1.65),
        (-0.10, 1.75),
        (-0.10, 1.90),
        (-0.05, 1.95),
        (-0.35, 1.95),
        (-0.40, 1.85),
        (-0.40, 0.0),
    ];

    fn contains(poly: &[Point2], p: Point2) -> bool {
        let n = poly.len();
        let mut inside = false;
        for i in 0..n {
            let a = poly[i];
            let b = poly[(i + 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Each side quad's normal, nudged from its centre, leaves the profile.
    fn assert_sides_outward(mesh: &Mesh, profile: &Profile, plane: &SketchPlane) {
        let to_uv = |p: Point3| {
            let d = p - plane.origin;
            Point2::new(d.dot(plane.x_dir.as_ref()), d.dot(plane.y_dir.as_ref()))
        };
        for f in 2..mesh.num_faces() {
            let c = mesh.face_centroid(f);
            let n = mesh.face_normal(f).unwrap().into_inner();
            let out = to_uv(c + n * 1e-4);
            let back_in = to_uv(c - n * 1e-4);
            assert!(!contains(profile.points(), out), "side {f} faces inward");
            assert!(contains(profile.points(), back_in), "side {f} faces inward");
        }
    }

    #[test]
    fn test_counts() {
        let profile = Profile::from_tuples(UPRIGHT).unwrap();
        let m = extrude(&profile, &SketchPlane::xz(), 0.02, PanelSide::Right).unwrap();
        assert_eq!(m.num_vertices(), 30);
        assert_eq!(m.num_faces(), 17);
        assert_eq!(m.faces()[0].len(), 15);
        assert_eq!(m.faces()[1].len(), 15);
        assert!(m.faces()[2..].iter().all(|f| f.len() == 4));
    }

    #[test]
    fn test_rings_sit_at_half_thickness() {
        let profile = Profile::rectangle(0.4, 1.0).unwrap();
        let right = extrude(&profile, &SketchPlane::xz(), 0.02, PanelSide::Right).unwrap();
        assert!(right.vertices()[..4].iter().all(|p| (p.y - 0.01).abs() < 1e-12));
        assert!(right.vertices()[4..].iter().all(|p| (p.y + 0.01).abs() < 1e-12));

        let left = extrude(&profile, &SketchPlane::xz(), 0.02, PanelSide::Left).unwrap();
        assert!(left.vertices()[..4].iter().all(|p| (p.y + 0.01).abs() < 1e-12));
    }

    #[test]
    fn test_convex_sides_point_away_from_centroid() {
        let hexagon: Vec<(f64, f64)> = (0..6)
            .map(|k| {
                let a = std::f64::consts::TAU * k as f64 / 6.0;
                (a.cos(), a.sin())
            })
            .collect();
        for pts in [hexagon.clone(), hexagon.iter().rev().copied().collect()] {
            let profile = Profile::from_tuples(&pts).unwrap();
            let c2 = profile.centroid();
            for side in [PanelSide::Left, PanelSide::Right] {
                let plane = SketchPlane::xz();
                let m = extrude(&profile, &plane, 0.1, side).unwrap();
                let centre = plane.to_3d(&c2, 0.0);
                for f in 2..m.num_faces() {
                    let outward = m.face_centroid(f) - centre;
                    assert!(m.face_vector_area(f).dot(&outward) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_concave_sides_outward_both_panels_both_planes() {
        let profile = Profile::from_tuples(UPRIGHT).unwrap();
        for plane in [SketchPlane::xz(), SketchPlane::xy()] {
            for side in [PanelSide::Left, PanelSide::Right] {
                let m = extrude(&profile, &plane, 0.02, side).unwrap();
                assert_sides_outward(&m, &profile, &plane);
            }
        }
    }

    #[test]
    fn test_caps_are_opposite() {
        let profile = Profile::rectangle(1.0, 1.0).unwrap();
        let m = extrude(&profile, &SketchPlane::xy(), 0.5, PanelSide::Right).unwrap();
        let front = m.face_normal(0).unwrap().into_inner();
        let back = m.face_normal(1).unwrap().into_inner();
        assert!((front + back).norm() < 1e-12);
        assert!(front.dot(&Vec3::z()).abs() > 0.999);
    }

    #[test]
    fn test_non_positive_thickness_rejected() {
        let profile = Profile::rectangle(1.0, 1.0).unwrap();
        for t in [0.0, -0.02, f64::NAN] {
            let err = extrude(&profile, &SketchPlane::xz(), t, PanelSide::Left).unwrap_err();
            assert!(matches!(err, SketchError::InvalidProfile(_)));
        }
    }
}
