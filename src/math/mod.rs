pub mod distance_2d;
pub mod line_eq;

pub use line_eq::LineEq;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for floating-point comparisons in tests and debug checks.
///
/// The reconstruction itself never compares against it.
pub const TOLERANCE: f64 = 1e-9;
