//! Polygon-to-triangle conversion for export.

use cabforge_kernel_math::{Point2, Point3, Vec3};

use crate::{newell, Mesh};

/// A triangle soup ready for GPU-style export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Component-wise `(min, max)` of the positions, `None` when empty.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut chunks = self.vertices.chunks_exact(3);
        let first = chunks.next()?;
        let mut lo = [first[0], first[1], first[2]];
        let mut hi = lo;
        for c in chunks {
            for k in 0..3 {
                lo[k] = lo[k].min(c[k]);
                hi[k] = hi[k].max(c[k]);
            }
        }
        Some((lo, hi))
    }
}

impl Mesh {
    /// Split every face into triangles that keep its winding.
    ///
    /// Vertices are shared with the polygon mesh (same indices). Faces are
    /// ear-clipped in their own plane, so concave outlines such as cabinet
    /// side profiles come out without triangles spilling outside the loop.
    pub fn triangulate(&self) -> TriangleMesh {
        let mut out = TriangleMesh {
            vertices: Vec::with_capacity(self.num_vertices() * 3),
            indices: Vec::new(),
        };
        for p in self.vertices() {
            out.vertices.extend([p.x as f32, p.y as f32, p.z as f32]);
        }

        for face in self.faces() {
            let idx = face.indices();
            if idx.len() == 3 {
                out.indices.extend_from_slice(idx);
                continue;
            }
            let pts: Vec<Point3> = idx.iter().map(|&i| self.vertices()[i as usize]).collect();
            let flat = project_to_face_plane(&pts);
            let local: Vec<usize> = (0..idx.len()).collect();
            let mut tris = Vec::with_capacity((idx.len() - 2) * 3);
            ear_clip_triangulate(&flat, &local, &mut tris);
            out.indices.extend(tris.into_iter().map(|k| idx[k]));
        }
        out
    }
}

/// Project a face loop into 2D so that its winding is counter-clockwise.
fn project_to_face_plane(pts: &[Point3]) -> Vec<Point2> {
    let n = newell(pts);
    let n = if n.norm() < 1e-15 { Vec3::z() } else { n.normalize() };
    let seed = if n.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
    let u = seed.cross(&n).normalize();
    let v = n.cross(&u);
    pts.iter()
        .map(|p| Point2::new(p.coords.dot(&u), p.coords.dot(&v)))
        .collect()
}

/// Ear clipping over a counter-clockwise loop, emitting indices into `indices`' domain.
///
/// Only reflex or collinear corners can lie inside a candidate ear, so only
/// those are tested, and a corner touching the ear's boundary blocks it.
fn ear_clip_triangulate(verts_2d: &[Point2], indices: &[usize], out: &mut Vec<usize>) {
    if indices.len() < 3 {
        return;
    }

    let mut remaining: Vec<usize> = indices.to_vec();

    while remaining.len() > 3 {
        let n = remaining.len();
        let corner = |j: usize| {
            (
                verts_2d[remaining[(j + n - 1) % n]],
                verts_2d[remaining[j]],
                verts_2d[remaining[(j + 1) % n]],
            )
        };
        let reflex: Vec<bool> = (0..n)
            .map(|j| {
                let (a, b, c) = corner(j);
                orient_2d(a, b, c) <= 0.0
            })
            .collect();

        let mut found_ear = false;
        for i in 0..n {
            if reflex[i] {
                continue;
            }
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            let (a, b, c) = corner(i);

            let blocked = (0..n)
                .filter(|&j| reflex[j] && j != prev && j != next)
                .map(|j| verts_2d[remaining[j]])
                .filter(|&p| !(same_point(p, a) || same_point(p, b) || same_point(p, c)))
                .any(|p| point_in_triangle_2d(p, a, b, c));

            if !blocked {
                out.extend([remaining[prev], remaining[i], remaining[next]]);
                remaining.remove(i);
                found_ear = true;
                break;
            }
        }

        if !found_ear {
            break;
        }
    }

    // Whatever is left (a triangle, or a degenerate loop) becomes a fan.
    for k in 1..remaining.len() - 1 {
        out.extend([remaining[0], remaining[k], remaining[k + 1]]);
    }
}

const EPS_2D: f64 = 1e-12;

/// Twice the signed area of `abc`; positive when counter-clockwise.
fn orient_2d(a: Point2, b: Point2, c: Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn same_point(p: Point2, q: Point2) -> bool {
    (p - q).norm_squared() < EPS_2D * EPS_2D
}

/// Closed containment in a counter-clockwise triangle: edges and corners count.
fn point_in_triangle_2d(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    orient_2d(a, b, p) >= -EPS_2D
        && orient_2d(b, c, p) >= -EPS_2D
        && orient_2d(c, a, p) >= -EPS_2D
}
