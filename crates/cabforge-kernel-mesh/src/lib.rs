#![warn(missing_docs)]

//! Polygon mesh construction for the cabforge kernel.
//!
//! Every shape builder writes into a [`MeshBuilder`]: vertices are appended
//! and receive consecutive indices, faces are ordered index loops whose
//! winding defines the visible side. [`MeshBuilder::finish`] freezes the
//! result into an immutable [`Mesh`].
//!
//! # Example
//!
//! ```
//! use cabforge_kernel_mesh::MeshBuilder;
//! use cabforge_kernel_math::Point3;
//!
//! let mut b = MeshBuilder::new();
//! let a = b.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! let c = b.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! let d = b.add_vertex(Point3::new(0.0, 1.0, 0.0));
//! b.add_face(&[a, c, d]).unwrap();
//! let mesh = b.finish();
//! assert_eq!(mesh.num_faces(), 1);
//! ```

mod primitives;
mod triangulate;

pub use primitives::{cuboid, cylinder, plane, torus, uv_sphere};
pub use triangulate::TriangleMesh;

use cabforge_kernel_math::{Dir3, Point3, Transform, Vec3};
use thiserror::Error;

/// Index of a vertex within a mesh.
pub type VertexIndex = u32;

/// Index of a face within a mesh.
pub type FaceIndex = usize;

/// Errors from mesh construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A face loop is malformed. Always a bug in the calling builder.
    #[error("invalid face {face}: {reason}")]
    InvalidFace {
        /// Index the face would have received.
        face: FaceIndex,
        /// What is wrong with it.
        reason: String,
    },
}

/// An ordered loop of vertex indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    indices: Vec<VertexIndex>,
}

impl Face {
    /// The vertex indices in winding order.
    pub fn indices(&self) -> &[VertexIndex] {
        &self.indices
    }

    /// Number of corners.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for a face that passed validation.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A finished polygon mesh: vertices in insertion order plus faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// A mesh with no vertices and no faces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Vertex positions in index order.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Faces in insertion order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// True when the mesh has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Positions of a face's corners in winding order.
    pub fn face_points(&self, face: FaceIndex) -> Vec<Point3> {
        self.faces[face]
            .indices
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect()
    }

    /// Area-weighted normal of a face (Newell's method), half its length is the area.
    pub fn face_vector_area(&self, face: FaceIndex) -> Vec3 {
        newell(&self.face_points(face)) * 0.5
    }

    /// Unit normal of a face following the right-hand rule on its winding.
    ///
    /// Returns `None` for a face with zero area.
    pub fn face_normal(&self, face: FaceIndex) -> Option<Dir3> {
        let n = self.face_vector_area(face);
        if n.norm() < 1e-15 {
            None
        } else {
            Some(Dir3::new_normalize(n))
        }
    }

    /// Average of a face's corner positions.
    pub fn face_centroid(&self, face: FaceIndex) -> Point3 {
        let pts = self.face_points(face);
        let sum = pts.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / pts.len() as f64)
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }

    /// Concatenate meshes into one.
    ///
    /// Each part's vertex indices are shifted by the number of vertices that
    /// precede it. Vertices are never welded, so parts that touch stay
    /// topologically separate.
    pub fn merge<'a>(parts: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
        let mut merged = Mesh::empty();
        for part in parts {
            let offset = merged.vertices.len() as VertexIndex;
            merged.vertices.extend_from_slice(&part.vertices);
            merged.faces.extend(part.faces.iter().map(|f| Face {
                indices: f.indices.iter().map(|&i| i + offset).collect(),
            }));
        }
        merged
    }

    /// A copy of this mesh with every vertex mapped through `transform`.
    ///
    /// Mirroring transforms reverse every face so windings keep facing out.
    pub fn transformed(&self, transform: &Transform) -> Mesh {
        let mirrored = transform.determinant() < 0.0;
        Mesh {
            vertices: self
                .vertices
                .iter()
                .map(|p| transform.apply_point(p))
                .collect(),
            faces: self
                .faces
                .iter()
                .map(|f| {
                    let mut indices = f.indices.clone();
                    if mirrored {
                        indices.reverse();
                    }
                    Face { indices }
                })
                .collect(),
        }
    }
}

/// Append-only accumulator for a single [`Mesh`].
///
/// A builder is used for exactly one shape; it never shares vertices with
/// another builder.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    /// Start an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty mesh with room for `vertices` vertices and `faces` faces.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            mesh: Mesh {
                vertices: Vec::with_capacity(vertices),
                faces: Vec::with_capacity(faces),
            },
        }
    }

    /// Append a vertex and return its index (0, 1, 2, ...).
    pub fn add_vertex(&mut self, p: Point3) -> VertexIndex {
        self.mesh.vertices.push(p);
        (self.mesh.vertices.len() - 1) as VertexIndex
    }

    /// Append several vertices and return their indices in order.
    pub fn add_vertices(&mut self, points: impl IntoIterator<Item = Point3>) -> Vec<VertexIndex> {
        points.into_iter().map(|p| self.add_vertex(p)).collect()
    }

    /// Append a face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidFace`] if the loop has fewer than three
    /// corners, references a vertex that does not exist yet, or repeats an
    /// index on two consecutive corners (including last to first).
    pub fn add_face(&mut self, indices: &[VertexIndex]) -> Result<FaceIndex, MeshError> {
        let face = self.mesh.faces.len();
        let invalid = |reason: String| MeshError::InvalidFace { face, reason };

        if indices.len() < 3 {
            return Err(invalid(format!(
                "{} indices, at least 3 required",
                indices.len()
            )));
        }
        let n_verts = self.mesh.vertices.len();
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= n_verts) {
            return Err(invalid(format!(
                "vertex index {bad} out of bounds ({n_verts} vertices)"
            )));
        }
        for (k, &i) in indices.iter().enumerate() {
            let next = indices[(k + 1) % indices.len()];
            if i == next {
                return Err(invalid(format!("zero-length edge at vertex {i}")));
            }
        }

        self.mesh.faces.push(Face {
            indices: indices.to_vec(),
        });
        Ok(face)
    }

    /// Number of vertices added so far.
    pub fn num_vertices(&self) -> usize {
        self.mesh.vertices.len()
    }

    /// Freeze the accumulated vertices and faces.
    pub fn finish(self) -> Mesh {
        self.mesh
    }
}

/// Newell's area vector of a polygon (twice the vector area).
pub(crate) fn newell(points: &[Point3]) -> Vec3 {
    let n = points.len();
    let mut acc = Vec3::zeros();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        acc.x += (a.y - b.y) * (a.z + b.z);
        acc.y += (a.z - b.z) * (a.x + b.x);
        acc.z += (a.x - b.x) * (a.y + b.y);
    }
    acc
}
