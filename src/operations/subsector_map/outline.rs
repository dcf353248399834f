use std::fmt;

use crate::error::BspError;
use crate::math::Point2;

/// The bounded extent of one node's partition line.
///
/// `start` lies on the anchor side and `end` on the direction-tip side. Either
/// is NaN when no bounding line was found on that side. Descendant nodes that
/// end on this line record their endpoints here as shared vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySegment {
    start: Point2,
    end: Point2,
    shared: Vec<Point2>,
}

impl BoundarySegment {
    pub(crate) fn new(start: Option<Point2>, end: Option<Point2>) -> Self {
        let missing = Point2::new(f64::NAN, f64::NAN);
        Self {
            start: start.unwrap_or(missing),
            end: end.unwrap_or(missing),
            shared: Vec::new(),
        }
    }

    pub(crate) fn share(&mut self, point: Point2) {
        self.shared.push(point);
    }

    /// Returns the endpoint on the anchor side.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the endpoint on the direction-tip side.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the endpoints of later segments that terminate on this one,
    /// in the order they were recorded.
    #[must_use]
    pub fn shared_vertices(&self) -> &[Point2] {
        &self.shared
    }

    /// Returns `true` if both endpoints were found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_finite(&self.start) && is_finite(&self.end)
    }

    /// Returns every known point of the segment: endpoints first, then shared
    /// vertices. Missing endpoints are skipped.
    pub fn points(&self) -> impl Iterator<Item = &Point2> {
        [&self.start, &self.end]
            .into_iter()
            .chain(&self.shared)
            .filter(|p| is_finite(p))
    }

    /// Returns all known points sorted from `start` towards `end`.
    ///
    /// An incomplete segment has no direction; its points are returned in
    /// recording order.
    #[must_use]
    pub fn ordered_points(&self) -> Vec<Point2> {
        let mut points: Vec<Point2> = self.points().copied().collect();
        if self.is_complete() {
            let axis = self.end - self.start;
            points.sort_by(|p, q| {
                let tp = (p - self.start).dot(&axis);
                let tq = (q - self.start).dot(&axis);
                tp.total_cmp(&tq)
            });
        }
        points
    }
}

fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// The lines bounding one subsector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectorBounds {
    /// Subsector index taken from the leaf reference.
    pub subsector: u32,
    /// Indices into [`SubsectorOutline::segments`] of every ancestor node,
    /// root first.
    pub segments: Vec<usize>,
}

/// An anomaly found while building the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The node being processed, or `None` when the whole pass was aborted.
    pub node: Option<usize>,
    /// What went wrong.
    pub error: BspError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write!(f, "node {node}: {}", self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Result of one reconstruction pass.
///
/// A non-empty diagnostics list marks partial data, not a failed conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsectorOutline {
    pub(crate) segments: Vec<BoundarySegment>,
    pub(crate) subsectors: Vec<SubsectorBounds>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl SubsectorOutline {
    /// Returns one segment per processed node, in pre-order.
    #[must_use]
    pub fn segments(&self) -> &[BoundarySegment] {
        &self.segments
    }

    /// Returns the bounding lines of every subsector reached.
    #[must_use]
    pub fn subsectors(&self) -> &[SubsectorBounds] {
        &self.subsectors
    }

    /// Returns all recorded anomalies.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if no anomaly was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the outline, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<BoundarySegment> {
        self.segments
    }
}
