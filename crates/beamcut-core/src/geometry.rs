//! 2D points and homogeneous affine transforms.

use std::ops::{Add, Mul, Sub};

/// A 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product.
impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// A 2D affine transform stored as a 3x3 homogeneous matrix.
///
/// Row-major layout. With the SVG coefficient names `(a, b, c, d, e, f)`:
///
/// ```text
/// | a c e |        x' = a*x + c*y + e
/// | b d f |        y' = b*x + d*y + f
/// | 0 0 1 |
/// ```
///
/// The bottom row is always `[0, 0, 1]`. A transform is never mutated in
/// place; composition returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: [[f64; 3]; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Builds a transform from the six SVG affine coefficients.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            m: [[a, c, e], [b, d, f], [0.0, 0.0, 1.0]],
        }
    }

    /// A translation by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_coefficients(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// A scale by `(sx, sy)` about the origin.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_coefficients(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation by `angle` radians about the pivot `(cx, cy)`.
    pub fn rotation(cx: f64, cy: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_coefficients(
            cos,
            sin,
            -sin,
            cos,
            -cx * cos + cy * sin + cx,
            -cx * sin - cy * cos + cy,
        )
    }

    /// A horizontal skew by `angle` radians.
    pub fn skew_x(angle: f64) -> Self {
        Self::from_coefficients(1.0, 0.0, angle.tan(), 1.0, 0.0, 0.0)
    }

    /// A vertical skew by `angle` radians.
    pub fn skew_y(angle: f64) -> Self {
        Self::from_coefficients(1.0, angle.tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// Composes two transforms. `self.compose(other)` applies `other`
    /// first, then `self`, matching nested-group accumulation
    /// (outer ∘ inner).
    pub fn compose(self, other: Transform) -> Transform {
        let mut m = [[0.0; 3]; 3];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[r][k] * other.m[k][c]).sum();
            }
        }
        Transform { m }
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(rhs)
    }
}
