//! Closed 2D profiles and the planes they are sketched on.

use cabforge_kernel_math::{Dir3, Point2, Point3, Tolerance, Vec3};

use crate::SketchError;

/// A plane mapping sketch coordinates `(u, v)` into 3D, plus a depth axis.
///
/// The depth axis need not equal `x_dir × y_dir`; the side-panel plane maps
/// `(x, z)` and extrudes along +Y, which is the opposite of `X × Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPlane {
    /// Origin point of the sketch plane in 3D.
    pub origin: Point3,
    /// Unit vector along the local u axis.
    pub x_dir: Dir3,
    /// Unit vector along the local v axis.
    pub y_dir: Dir3,
    /// Unit vector along which thickness is applied.
    pub depth: Dir3,
}

impl SketchPlane {
    /// Create a plane. Directions are normalised.
    pub fn new(origin: Point3, x_dir: Vec3, y_dir: Vec3, depth: Vec3) -> Self {
        Self {
            origin,
            x_dir: Dir3::new_normalize(x_dir),
            y_dir: Dir3::new_normalize(y_dir),
            depth: Dir3::new_normalize(depth),
        }
    }

    /// `(u, v) = (x, z)`, thickness along +Y. Used for side panels and bezels.
    pub fn xz() -> Self {
        Self::new(Point3::origin(), Vec3::x(), Vec3::z(), Vec3::y())
    }

    /// `(u, v) = (x, y)`, thickness along +Z. Used for horizontal panels.
    pub fn xy() -> Self {
        Self::new(Point3::origin(), Vec3::x(), Vec3::y(), Vec3::z())
    }

    /// Map a sketch point to 3D, offset `offset` along the depth axis.
    pub fn to_3d(&self, p: &Point2, offset: f64) -> Point3 {
        self.origin
            + self.x_dir.into_inner() * p.x
            + self.y_dir.into_inner() * p.y
            + self.depth.into_inner() * offset
    }

    /// `+1.0` when `x_dir × y_dir` agrees with the depth axis, `-1.0` otherwise.
    pub fn handedness(&self) -> f64 {
        let n = self.x_dir.cross(self.y_dir.as_ref());
        if n.dot(self.depth.as_ref()) < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Which half-space of the sketch plane a slab's front ring sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    /// Front ring at `-thickness / 2` along the depth axis.
    Left,
    /// Front ring at `+thickness / 2` along the depth axis.
    Right,
}

impl PanelSide {
    /// `-1.0` for [`PanelSide::Left`], `+1.0` for [`PanelSide::Right`].
    pub fn sign(self) -> f64 {
        match self {
            PanelSide::Left => -1.0,
            PanelSide::Right => 1.0,
        }
    }
}

/// A closed polygon of at least three 2D points.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Point2>,
}

impl Profile {
    /// Create a profile, checking size and consecutive-point distinctness.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidProfile`] for fewer than three points or
    /// two consecutive points (including last to first) that coincide.
    pub fn new(points: Vec<Point2>) -> Result<Self, SketchError> {
        if points.len() < 3 {
            return Err(SketchError::InvalidProfile(format!(
                "{} points, at least 3 required",
                points.len()
            )));
        }
        let tol = Tolerance::DEFAULT;
        let n = points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            if tol.points2_equal(&points[i], &points[j]) {
                return Err(SketchError::InvalidProfile(format!(
                    "points {i} and {j} coincide at ({}, {})",
                    points[i].x, points[i].y
                )));
            }
        }
        Ok(Self { points })
    }

    /// Convenience constructor from `(u, v)` pairs.
    pub fn from_tuples(points: &[(f64, f64)]) -> Result<Self, SketchError> {
        Self::new(points.iter().map(|&(u, v)| Point2::new(u, v)).collect())
    }

    /// An axis-aligned rectangle centred on the origin, counter-clockwise.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, SketchError> {
        let (hw, hh) = (width * 0.5, height * 0.5);
        Self::from_tuples(&[(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)])
    }

    /// The points in listed order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a profile has at least three points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>()
            * 0.5
    }

    /// True when the points run counter-clockwise in `(u, v)`.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Vertex average; inside the polygon only for convex profiles.
    pub fn centroid(&self) -> Point2 {
        let sum = self
            .points
            .iter()
            .fold(Point2::origin().coords, |acc, p| acc + p.coords);
        Point2::from(sum / self.points.len() as f64)
    }
}
