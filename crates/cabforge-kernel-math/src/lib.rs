#![warn(missing_docs)]

//! Math types for the cabforge mesh kernel.
//!
//! Thin wrappers around nalgebra providing the handful of types every
//! cabinet builder needs: points, vectors, directions, affine transforms,
//! Euler placements and tolerance constants. All lengths are in metres.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point on a 2D sketch plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Euler rotation `(rx, ry, rz)` in radians, applied X first, then Y, then Z.
    pub fn rotation_xyz(rx: f64, ry: f64, rz: f64) -> Self {
        Self::rotation_z(rz)
            .then(&Self::rotation_y(ry))
            .then(&Self::rotation_x(rx))
    }

    /// Compose: `self * other`, i.e. `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Determinant of the linear part. Negative for mirroring transforms.
    pub fn determinant(&self) -> f64 {
        self.matrix.fixed_view::<3, 3>(0, 0).determinant()
    }
}

/// Decomposed placement of a scene node relative to its parent.
///
/// Rotation is an Euler triple in radians applied X, then Y, then Z; the
/// resulting matrix is `T · Rz · Ry · Rx · S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Translation in metres.
    pub translation: Vec3,
    /// Euler rotation `(x, y, z)` in radians.
    pub rotation: Vec3,
    /// Non-uniform scale factors.
    pub scale: Vec3,
}

impl Placement {
    /// The identity placement.
    pub fn identity() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// A pure translation.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Self::identity()
        }
    }

    /// Replace the Euler rotation.
    pub fn rotated(self, rx: f64, ry: f64, rz: f64) -> Self {
        Self {
            rotation: Vec3::new(rx, ry, rz),
            ..self
        }
    }

    /// Replace the scale.
    pub fn scaled(self, sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            scale: Vec3::new(sx, sy, sz),
            ..self
        }
    }

    /// The 4x4 matrix for this placement.
    pub fn to_transform(&self) -> Transform {
        let t = &self.translation;
        let r = &self.rotation;
        let s = &self.scale;
        Transform::translation(t.x, t.y, t.z)
            .then(&Transform::rotation_xyz(r.x, r.y, r.z))
            .then(&Transform::scale(s.x, s.y, s.z))
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance below which two points coincide, in metres.
    pub linear: f64,
    /// Sweep segments shorter than this are skipped, in metres.
    pub segment: f64,
    /// `|cos|` above which two directions count as parallel.
    pub parallel: f64,
}

impl Tolerance {
    /// Default tolerances: 1e-9 m coincidence, 1 mm segments, 0.999 parallel.
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        segment: 1e-3,
        parallel: 0.999,
    };

    /// Check if two 2D points are coincident within tolerance.
    pub fn points2_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two unit directions are (anti-)parallel.
    pub fn is_parallel(&self, a: &Dir3, b: &Dir3) -> bool {
        a.as_ref().dot(b.as_ref()).abs() > self.parallel
    }
}
