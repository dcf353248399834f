use crate::error::GeometryError;

use super::{Point2, Vector2};

/// An infinite 2D line in implicit form: `a * x + b * y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEq {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEq {
    /// Creates a line from its coefficients, stored verbatim.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates the line through `anchor` running along `direction`.
    ///
    /// The normal `(a, b)` is `direction` rotated a quarter turn counter-clockwise,
    /// so the coefficients keep the orientation of the partition.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `direction` is `(0, 0)`.
    pub fn from_partition(anchor: &Point2, direction: &Vector2) -> Result<Self, GeometryError> {
        let line = Self {
            a: -direction.y,
            b: direction.x,
            c: direction.y * anchor.x - direction.x * anchor.y,
        };
        if line.is_degenerate() {
            return Err(GeometryError::ZeroVector);
        }
        Ok(line)
    }

    /// Returns `true` if both `a` and `b` are zero, in which case the
    /// equation describes no line.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Evaluates `a * x + b * y + c` at `point`.
    ///
    /// Zero means the point lies on the line.
    #[must_use]
    pub fn residual(&self, point: &Point2) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Intersects two lines with Cramer's rule.
    ///
    /// Returns `None` when the determinant is exactly zero (parallel or
    /// coincident lines). No tolerance is applied: coefficients come from
    /// integer map coordinates, so parallel partitions cancel exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn intersect(&self, other: &Self) -> Option<Point2> {
        let delta = self.a * other.b - other.a * self.b;
        if delta == 0.0 {
            return None;
        }
        let delta_x = -self.c * other.b + other.c * self.b;
        let delta_y = -self.a * other.c + other.a * self.c;
        Some(Point2::new(delta_x / delta, delta_y / delta))
    }
}
