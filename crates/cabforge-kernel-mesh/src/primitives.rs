//! Closed primitive solids centred on the origin, all faces wound outward.
//!
//! Segment counts below three are raised to three. Every builder returns
//! the [`MeshError`] of the first face its [`MeshBuilder`] rejects.

use std::f64::consts::{PI, TAU};

use cabforge_kernel_math::Point3;

use crate::{Mesh, MeshBuilder, MeshError, VertexIndex};

/// An axis-aligned box with full extents `sx × sy × sz`.
///
/// 8 vertices, 6 quads.
pub fn cuboid(sx: f64, sy: f64, sz: f64) -> Result<Mesh, MeshError> {
    let (hx, hy, hz) = (sx * 0.5, sy * 0.5, sz * 0.5);
    let mut b = MeshBuilder::with_capacity(8, 6);
    let v = b.add_vertices([
        Point3::new(-hx, -hy, -hz),
        Point3::new(hx, -hy, -hz),
        Point3::new(hx, hy, -hz),
        Point3::new(-hx, hy, -hz),
        Point3::new(-hx, -hy, hz),
        Point3::new(hx, -hy, hz),
        Point3::new(hx, hy, hz),
        Point3::new(-hx, hy, hz),
    ]);
    let faces: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // -Z
        [4, 5, 6, 7], // +Z
        [0, 1, 5, 4], // -Y
        [2, 3, 7, 6], // +Y
        [3, 0, 4, 7], // -X
        [1, 2, 6, 5], // +X
    ];
    add_faces(&mut b, &v, &faces)?;
    Ok(b.finish())
}

/// A single quad of `width × height` in the XY plane, facing +Z.
pub fn plane(width: f64, height: f64) -> Result<Mesh, MeshError> {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let mut b = MeshBuilder::with_capacity(4, 1);
    let v = b.add_vertices([
        Point3::new(-hw, -hh, 0.0),
        Point3::new(hw, -hh, 0.0),
        Point3::new(hw, hh, 0.0),
        Point3::new(-hw, hh, 0.0),
    ]);
    add_faces(&mut b, &v, &[[0, 1, 2, 3]])?;
    Ok(b.finish())
}

/// A capped cylinder along Z, `depth` long, centred on the origin.
///
/// `segments` vertices per ring, n-gon caps: `2·segments` vertices and
/// `segments + 2` faces.
pub fn cylinder(radius: f64, depth: f64, segments: usize) -> Result<Mesh, MeshError> {
    let segments = segments.max(3);
    let hz = depth * 0.5;
    let mut b = MeshBuilder::with_capacity(2 * segments, segments + 2);
    let ring = |z: f64| {
        (0..segments).map(move |k| {
            let a = TAU * k as f64 / segments as f64;
            Point3::new(radius * a.cos(), radius * a.sin(), z)
        })
    };
    let bottom = b.add_vertices(ring(-hz));
    let top = b.add_vertices(ring(hz));

    let mut cap: Vec<VertexIndex> = bottom.clone();
    cap.reverse();
    b.add_face(&cap)?;
    b.add_face(&top)?;
    for k in 0..segments {
        let k1 = (k + 1) % segments;
        b.add_face(&[bottom[k], bottom[k1], top[k1], top[k]])?;
    }
    Ok(b.finish())
}

/// A UV sphere with `segments` meridians and `rings` latitude bands.
///
/// Poles are single vertices closed by triangle fans:
/// `segments·(rings − 1) + 2` vertices, `segments·rings` faces.
pub fn uv_sphere(radius: f64, segments: usize, rings: usize) -> Result<Mesh, MeshError> {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut b = MeshBuilder::with_capacity(segments * (rings - 1) + 2, segments * rings);

    let north = b.add_vertex(Point3::new(0.0, 0.0, radius));
    let bands: Vec<Vec<VertexIndex>> = (1..rings)
        .map(|i| {
            let phi = PI * i as f64 / rings as f64;
            let (s, c) = phi.sin_cos();
            b.add_vertices((0..segments).map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                Point3::new(radius * s * theta.cos(), radius * s * theta.sin(), radius * c)
            }))
        })
        .collect();
    let south = b.add_vertex(Point3::new(0.0, 0.0, -radius));

    for j in 0..segments {
        let j1 = (j + 1) % segments;
        b.add_face(&[north, bands[0][j], bands[0][j1]])?;
    }
    for pair in bands.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..segments {
            let j1 = (j + 1) % segments;
            b.add_face(&[upper[j], lower[j], lower[j1], upper[j1]])?;
        }
    }
    let last = &bands[bands.len() - 1];
    for j in 0..segments {
        let j1 = (j + 1) % segments;
        b.add_face(&[last[j], south, last[j1]])?;
    }
    Ok(b.finish())
}

/// A ring torus around Z: `major_segments × minor_segments` vertices and quads.
pub fn torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: usize,
    minor_segments: usize,
) -> Result<Mesh, MeshError> {
    let ms = major_segments.max(3);
    let ns = minor_segments.max(3);
    let mut b = MeshBuilder::with_capacity(ms * ns, ms * ns);

    let mut grid = Vec::with_capacity(ms);
    for i in 0..ms {
        let theta = TAU * i as f64 / ms as f64;
        let (st, ct) = theta.sin_cos();
        grid.push(b.add_vertices((0..ns).map(|j| {
            let phi = TAU * j as f64 / ns as f64;
            let (sp, cp) = phi.sin_cos();
            let r = major_radius + minor_radius * cp;
            Point3::new(r * ct, r * st, minor_radius * sp)
        })));
    }
    for i in 0..ms {
        let i1 = (i + 1) % ms;
        for j in 0..ns {
            let j1 = (j + 1) % ns;
            b.add_face(&[grid[i][j], grid[i1][j], grid[i1][j1], grid[i][j1]])?;
        }
    }
    Ok(b.finish())
}

fn add_faces(
    b: &mut MeshBuilder,
    v: &[VertexIndex],
    faces: &[[usize; 4]],
) -> Result<(), MeshError> {
    for f in faces {
        b.add_face(&[v[f[0]], v[f[1]], v[f[2]], v[f[3]]])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabforge_kernel_math::Vec3;

    /// Every face normal points away from the origin.
    fn assert_outward(mesh: &Mesh) {
        for f in 0..mesh.num_faces() {
            let n = mesh.face_vector_area(f);
            let c = mesh.face_centroid(f);
            assert!(
                n.dot(&c.coords) > 0.0,
                "face {f} points inward: n={n:?} c={c:?}"
            );
        }
    }

    #[test]
    fn test_cuboid_counts_and_winding() {
        let m = cuboid(1.0, 2.0, 3.0).unwrap();
        assert_eq!(m.num_vertices(), 8);
        assert_eq!(m.num_faces(), 6);
        assert_outward(&m);
        let (lo, hi) = m.bounds().unwrap();
        assert_eq!(hi - lo, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_plane_faces_up() {
        let m = plane(0.48, 0.10).unwrap();
        assert_eq!(m.num_faces(), 1);
        let n = m.face_normal(0).unwrap();
        assert!((n.z - 1.0).abs() < 1e-12);
        assert!((m.face_vector_area(0).norm() - 0.048).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_counts_and_winding() {
        let m = cylinder(0.04, 0.03, 32).unwrap();
        assert_eq!(m.num_vertices(), 64);
        assert_eq!(m.num_faces(), 34);
        assert_outward(&m);
    }

    #[test]
    fn test_sphere_counts_and_winding() {
        let m = uv_sphere(0.025, 32, 16).unwrap();
        assert_eq!(m.num_vertices(), 32 * 15 + 2);
        assert_eq!(m.num_faces(), 32 * 16);
        assert_outward(&m);
    }

    #[test]
    fn test_torus_counts_and_winding() {
        let m = torus(0.15, 0.015, 48, 12).unwrap();
        assert_eq!(m.num_vertices(), 48 * 12);
        assert_eq!(m.num_faces(), 48 * 12);
        // outward from the tube centre line, not from the origin
        for f in 0..m.num_faces() {
            let c = m.face_centroid(f);
            let radial = Vec3::new(c.x, c.y, 0.0).normalize() * 0.15;
            let from_tube = c.coords - radial;
            assert!(m.face_vector_area(f).dot(&from_tube) > 0.0);
        }
    }

    #[test]
    fn test_degenerate_counts_are_clamped_not_rejected() {
        let m = cylinder(0.01, 0.02, 0).unwrap();
        assert_eq!(m.num_vertices(), 6);
        assert_eq!(m.num_faces(), 5);

        let m = uv_sphere(0.01, 1, 1).unwrap();
        assert_eq!(m.num_vertices(), 3 + 2);
        assert_eq!(m.num_faces(), 3 * 2);
        assert_outward(&m);

        let m = torus(0.1, 0.01, 0, 2).unwrap();
        assert_eq!(m.num_faces(), 9);
    }
}
