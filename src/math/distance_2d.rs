use super::Point2;

/// Returns the Manhattan (taxicab) distance between `p` and `q`.
#[must_use]
pub fn manhattan_distance(p: &Point2, q: &Point2) -> f64 {
    (p.x - q.x).abs() + (p.y - q.y).abs()
}
