use crate::math::{Point, Real};
use crate::query::IntersectionResult;
use crate::shape::RigidBox;
use alloc::{vec, vec::Vec};

/// A colored world-space segment describing part of an intersection query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DebugLine {
    /// The first endpoint of the segment.
    pub a: Point<Real>,
    /// The second endpoint of the segment.
    pub b: Point<Real>,
    /// The RGBA color of the segment.
    pub color: [f32; 4],
}

impl DebugLine {
    /// Opaque white.
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Opaque black.
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Opaque red.
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Opaque green.
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Opaque blue.
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    /// Opaque yellow.
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Opaque dark green.
    pub const DARK_GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    /// Opaque dark blue.
    pub const DARK_BLUE: [f32; 4] = [0.0, 0.0, 0.5, 1.0];

    /// Creates a new colored segment.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, color: [f32; 4]) -> Self {
        Self { a, b, color }
    }
}

/// Converts the result of [`test_intersection`](crate::query::test_intersection)
/// into segments that can be drawn by any line renderer.
///
/// - Separated boxes produce a single white segment joining their centers.
/// - Intersecting boxes produce a red segment joining their centers, segments from
///   each center to its witness point (green for `box1`, blue for `box2`), and a
///   yellow segment joining both witness points.
/// - A face contact adds a white segment of unit length along the normal, starting at
///   the center of the reference box.
/// - An edge contact adds, from each box center, its contact edge direction in dark
///   green, the normal in black, and the offset to its support vertex in dark blue.
pub fn debug_lines(box1: &RigidBox, box2: &RigidBox, result: &IntersectionResult) -> Vec<DebugLine> {
    let c1 = *box1.center();
    let c2 = *box2.center();

    if !result.intersects {
        return vec![DebugLine::new(c1, c2, DebugLine::WHITE)];
    }

    let w1 = result.world_point1(box1);
    let w2 = result.world_point2(box2);
    let mut lines = vec![
        DebugLine::new(c1, c2, DebugLine::RED),
        DebugLine::new(c1, w1, DebugLine::GREEN),
        DebugLine::new(c2, w2, DebugLine::BLUE),
        DebugLine::new(w1, w2, DebugLine::YELLOW),
    ];

    let normal = result.normal.into_inner();

    if result.is_face_contact {
        let face = Point::from(result.edge_dir1);
        lines.push(DebugLine::new(face, face + normal, DebugLine::WHITE));
    } else {
        lines.extend_from_slice(&[
            DebugLine::new(c1, c1 + result.edge_dir1, DebugLine::DARK_GREEN),
            DebugLine::new(c2, c2 + result.edge_dir2, DebugLine::DARK_GREEN),
            DebugLine::new(c1, c1 + normal, DebugLine::BLACK),
            DebugLine::new(c2, c2 + normal, DebugLine::BLACK),
            DebugLine::new(
                c1,
                box1.local_to_world_point(&result.local_support1.into()),
                DebugLine::DARK_BLUE,
            ),
            DebugLine::new(
                c2,
                box2.local_to_world_point(&result.local_support2.into()),
                DebugLine::DARK_BLUE,
            ),
        ]);
    }

    lines
}
