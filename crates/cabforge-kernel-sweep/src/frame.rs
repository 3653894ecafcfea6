//! Orthonormal frames for straight sweep segments.

use cabforge_kernel_math::{Dir3, Point3, Tolerance, Transform, Vec3};

/// A straight segment between two waypoints with its cross-section axes.
///
/// `lateral = normalize(direction × up)` and `normal = lateral × direction`,
/// where `up` is world +Z unless the segment runs (anti-)parallel to it, in
/// which case world +X is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFrame {
    /// Segment start.
    pub start: Point3,
    /// Segment end.
    pub end: Point3,
    /// Unit vector from start to end.
    pub direction: Dir3,
    /// First cross-section axis; box depth lies along it.
    pub lateral: Dir3,
    /// Second cross-section axis; box width lies along it.
    pub normal: Dir3,
    /// Distance from start to end.
    pub length: f64,
}

impl SegmentFrame {
    /// Derive the frame for `start → end`.
    ///
    /// Returns `None` when the segment is shorter than `tol.segment`.
    pub fn new(start: Point3, end: Point3, tol: &Tolerance) -> Option<Self> {
        let delta = end - start;
        let length = delta.norm();
        if length < tol.segment {
            return None;
        }
        let direction = Dir3::new_normalize(delta);
        let up = if tol.is_parallel(&direction, &Vec3::z_axis()) {
            Vec3::x()
        } else {
            Vec3::z()
        };
        let lateral = Dir3::new_normalize(direction.cross(&up));
        let normal = Dir3::new_normalize(lateral.cross(direction.as_ref()));
        Some(Self {
            start,
            end,
            direction,
            lateral,
            normal,
            length,
        })
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3 {
        Point3::from((self.start.coords + self.end.coords) * 0.5)
    }

    /// Rigid transform taking local `(x, y, z)` to `(normal, lateral, direction)`
    /// with the origin at the segment midpoint.
    ///
    /// The basis is right-handed, so outward-wound primitives stay outward.
    pub fn to_transform(&self) -> Transform {
        let m = self.midpoint();
        let mut t = Transform::identity();
        for (col, axis) in [self.normal, self.lateral, self.direction].iter().enumerate() {
            t.matrix[(0, col)] = axis.x;
            t.matrix[(1, col)] = axis.y;
            t.matrix[(2, col)] = axis.z;
        }
        t.matrix[(0, 3)] = m.x;
        t.matrix[(1, 3)] = m.y;
        t.matrix[(2, 3)] = m.z;
        t
    }
}
