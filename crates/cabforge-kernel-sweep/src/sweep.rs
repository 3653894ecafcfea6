//! Sweep operation over one or more waypoint paths.

use cabforge_kernel_math::{Point3, Tolerance};
use cabforge_kernel_mesh::{cuboid, cylinder, Mesh};
use log::debug;

use crate::{SegmentFrame, SweepError};

/// An ordered list of waypoints.
///
/// Consecutive duplicates are allowed; they produce a skipped segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepPath {
    points: Vec<Point3>,
}

impl SweepPath {
    /// Create a path from waypoints.
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Create a path from `(x, y, z)` triples.
    pub fn from_tuples(points: &[(f64, f64, f64)]) -> Self {
        Self::new(
            points
                .iter()
                .map(|&(x, y, z)| Point3::new(x, y, z))
                .collect(),
        )
    }

    /// The waypoints in order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Cross-section laid along each segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepSection {
    /// Rectangular strip: `depth` along the frame's lateral axis, `width` along its normal.
    Box {
        /// Extent along the segment normal.
        width: f64,
        /// Extent along the segment lateral axis.
        depth: f64,
    },
    /// Capped tube with `segments` sides.
    Round {
        /// Tube radius.
        radius: f64,
        /// Number of sides, at least 3.
        segments: usize,
    },
}

impl SweepSection {
    fn validate(&self) -> Result<(), SweepError> {
        let ok = |d: f64| d.is_finite() && d > 0.0;
        match *self {
            SweepSection::Box { width, depth } if !(ok(width) && ok(depth)) => Err(
                SweepError::InvalidSection(format!("box {width}x{depth} must be positive")),
            ),
            SweepSection::Round { radius, .. } if !ok(radius) => Err(SweepError::InvalidSection(
                format!("radius {radius} must be positive"),
            )),
            SweepSection::Round { segments, .. } if segments < 3 => Err(
                SweepError::InvalidSection(format!("{segments} sides, at least 3 required")),
            ),
            _ => Ok(()),
        }
    }

    /// Closed mesh for one segment, in world space.
    fn segment_mesh(&self, frame: &SegmentFrame) -> Result<Mesh, SweepError> {
        let local = match *self {
            SweepSection::Box { width, depth } => cuboid(width, depth, frame.length)?,
            SweepSection::Round { radius, segments } => cylinder(radius, frame.length, segments)?,
        };
        Ok(local.transformed(&frame.to_transform()))
    }
}

/// Result of a sweep that built at least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Swept {
    /// All segment meshes concatenated in path order.
    pub mesh: Mesh,
    /// Number of segments built (skipped segments excluded).
    pub segments: usize,
}

/// Sweep `section` along every path.
///
/// Segments shorter than 1 mm are skipped and logged at debug level.
///
/// # Returns
///
/// `Ok(None)` when no segment was long enough to build.
///
/// # Errors
///
/// Returns [`SweepError::InvalidSection`] for a non-positive section
/// dimension or a round section with fewer than three sides, and
/// [`SweepError::Mesh`] if a segment face is rejected.
pub fn sweep(paths: &[SweepPath], section: &SweepSection) -> Result<Option<Swept>, SweepError> {
    section.validate()?;
    let tol = Tolerance::DEFAULT;

    let mut parts = Vec::new();
    for (p, path) in paths.iter().enumerate() {
        for (s, (start, end)) in path.segments().enumerate() {
            match SegmentFrame::new(start, end, &tol) {
                Some(frame) => parts.push(section.segment_mesh(&frame)?),
                None => debug!("path {p} segment {s}: shorter than {} m, skipped", tol.segment),
            }
        }
    }

    if parts.is_empty() {
        return Ok(None);
    }
    Ok(Some(Swept {
        segments: parts.len(),
        mesh: Mesh::merge(&parts),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabforge_kernel_math::Vec3;

    fn box_section() -> SweepSection {
        SweepSection::Box {
            width: 0.012,
            depth: 0.008,
        }
    }

    fn assert_outward(swept: &Swept, per_segment_faces: usize, frames: &[SegmentFrame]) {
        for (k, frame) in frames.iter().enumerate() {
            let centre = frame.midpoint();
            for f in k * per_segment_faces..(k + 1) * per_segment_faces {
                let out = swept.mesh.face_centroid(f) - centre;
                assert!(swept.mesh.face_vector_area(f).dot(&out) > 0.0);
            }
        }
    }

    #[test]
    fn test_k_waypoints_give_k_minus_one_segments() {
        let path = SweepPath::from_tuples(&[
            (-0.20, -0.50, 0.50),
            (-0.20, -0.50, 1.70),
            (-0.15, -0.50, 1.95),
            (-0.15, 0.50, 1.95),
            (-0.20, 0.50, 1.70),
            (-0.20, 0.50, 0.50),
        ]);
        let swept = sweep(&[path], &box_section()).unwrap().unwrap();
        assert_eq!(swept.segments, 5);
        assert_eq!(swept.mesh.num_vertices(), 40);
        assert_eq!(swept.mesh.num_faces(), 30);
    }

    #[test]
    fn test_duplicate_waypoint_is_skipped() {
        let path = SweepPath::from_tuples(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
        ]);
        let swept = sweep(&[path], &box_section()).unwrap().unwrap();
        assert_eq!(swept.segments, 2);
    }

    #[test]
    fn test_nothing_to_sweep() {
        let single = SweepPath::from_tuples(&[(0.0, 0.0, 0.0)]);
        assert!(sweep(&[single], &box_section()).unwrap().is_none());

        let collapsed = SweepPath::from_tuples(&[(0.0, 0.0, 0.0), (0.0, 0.0005, 0.0)]);
        assert!(sweep(&[collapsed], &box_section()).unwrap().is_none());

        assert!(sweep(&[], &box_section()).unwrap().is_none());
    }

    #[test]
    fn test_multiple_paths_are_merged() {
        let a = SweepPath::from_tuples(&[(0.0, 0.0, 0.0), (0.0, 0.0, 1.0)]);
        let b = SweepPath::from_tuples(&[(1.0, 0.0, 0.0), (1.0, 1.0, 0.0), (0.0, 1.0, 0.0)]);
        let section = SweepSection::Round {
            radius: 0.008,
            segments: 16,
        };
        let swept = sweep(&[a, b], &section).unwrap().unwrap();
        assert_eq!(swept.segments, 3);
        assert_eq!(swept.mesh.num_vertices(), 3 * 32);
        assert_eq!(swept.mesh.num_faces(), 3 * 18);
    }

    #[test]
    fn test_box_segments_wind_outward() {
        let path = SweepPath::from_tuples(&[(0.0, 0.0, 0.0), (0.0, 0.0, 1.0), (1.0, 0.5, 1.2)]);
        let frames: Vec<_> = path
            .segments()
            .filter_map(|(a, b)| SegmentFrame::new(a, b, &Tolerance::DEFAULT))
            .collect();
        let swept = sweep(&[path], &box_section()).unwrap().unwrap();
        assert_outward(&swept, 6, &frames);
    }

    #[test]
    fn test_round_segments_wind_outward() {
        let path = SweepPath::from_tuples(&[(0.35, -0.275, 0.70), (0.35, 0.275, 0.70)]);
        let frames: Vec<_> = path
            .segments()
            .filter_map(|(a, b)| SegmentFrame::new(a, b, &Tolerance::DEFAULT))
            .collect();
        let section = SweepSection::Round {
            radius: 0.006,
            segments: 32,
        };
        let swept = sweep(&[path], &section).unwrap().unwrap();
        assert_outward(&swept, 34, &frames);
    }

    #[test]
    fn test_box_extents_follow_frame() {
        // Horizontal along +X: lateral = -Y carries depth, normal = +Z carries width.
        let path = SweepPath::from_tuples(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let swept = sweep(&[path], &box_section()).unwrap().unwrap();
        let (lo, hi) = swept.mesh.bounds().unwrap();
        let size = hi - lo;
        assert!((size.x - 1.0).abs() < 1e-12);
        assert!((size.y - 0.008).abs() < 1e-12);
        assert!((size.z - 0.012).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_box_uses_x_up_frame() {
        // Straight up +Z: up falls back to X, lateral = Z × X = +Y, normal = +X.
        let path = SweepPath::from_tuples(&[(0.3, 0.2, 0.5), (0.3, 0.2, 1.7)]);
        let (a, b) = path.segments().next().unwrap();
        let frame = SegmentFrame::new(a, b, &Tolerance::DEFAULT).unwrap();

        let (n, l, d) = (frame.normal.as_ref(), frame.lateral.as_ref(), frame.direction.as_ref());
        assert!(n.dot(l).abs() < 1e-12 && l.dot(d).abs() < 1e-12 && d.dot(n).abs() < 1e-12);
        assert!((n.cross(l) - d).norm() < 1e-12);
        let expected_lateral = d.cross(&Vec3::x()).normalize();
        assert!((l - expected_lateral).norm() < 1e-12);
        assert!((n - Vec3::x()).norm() < 1e-12);

        let swept = sweep(&[path], &box_section()).unwrap().unwrap();
        let (lo, hi) = swept.mesh.bounds().unwrap();
        let size = hi - lo;
        assert!((size.x - 0.012).abs() < 1e-12);
        assert!((size.y - 0.008).abs() < 1e-12);
        assert!((size.z - 1.2).abs() < 1e-12);
        assert!((lo.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_sections() {
        let path = SweepPath::from_tuples(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let bad = [
            SweepSection::Box {
                width: 0.0,
                depth: 0.01,
            },
            SweepSection::Round {
                radius: -1.0,
                segments: 8,
            },
            SweepSection::Round {
                radius: 0.01,
                segments: 2,
            },
        ];
        for section in bad {
            let err = sweep(std::slice::from_ref(&path), &section).unwrap_err();
            assert!(matches!(err, SweepError::InvalidSection(_)));
        }
    }
}
