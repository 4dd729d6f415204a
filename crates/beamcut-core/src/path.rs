//! Path segments and parametric curve sampling.

use crate::geometry::{Point, Transform};

/// One atomic drawn primitive: a straight line or a Bézier curve.
///
/// Segments are immutable once constructed. Arcs from SVG path data are
/// recognized by the parser but never constructed; their tokens are
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line from `p1` to `p2`.
    Line { p1: Point, p2: Point },
    /// Cubic Bézier with endpoints `p1`/`p4` and control points `p2`/`p3`.
    CubicBezier {
        p1: Point,
        p2: Point,
        p3: Point,
        p4: Point,
    },
    /// Quadratic Bézier with endpoints `p1`/`p3` and control point `p2`.
    QuadraticBezier { p1: Point, p2: Point, p3: Point },
}

impl Segment {
    /// Evaluates the segment at parameter `t`, clamped to `[0, 1]`.
    ///
    /// `point_at(0.0)` and `point_at(1.0)` return the first and last
    /// control points exactly.
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        match *self {
            Segment::Line { p1, p2 } => p1 * u + p2 * t,
            Segment::QuadraticBezier { p1, p2, p3 } => {
                p1 * (u * u) + p2 * (2.0 * u * t) + p3 * (t * t)
            }
            Segment::CubicBezier { p1, p2, p3, p4 } => {
                p1 * (u * u * u)
                    + p2 * (3.0 * u * u * t)
                    + p3 * (3.0 * u * t * t)
                    + p4 * (t * t * t)
            }
        }
    }
}

/// An ordered sequence of segments sharing one effective transform.
///
/// The transform is the composed document-tree transform in effect where
/// the path was declared. A path owns its segments exclusively; they are
/// immutable after collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub segments: Vec<Segment>,
    pub transform: Transform,
}

impl Path {
    /// Creates a path from its segments and effective transform.
    pub fn new(segments: Vec<Segment>, transform: Transform) -> Self {
        Self {
            segments,
            transform,
        }
    }
}
