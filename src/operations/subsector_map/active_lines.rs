use crate::level::Extent;
use crate::math::distance_2d::manhattan_distance;
use crate::math::{LineEq, Point2};

/// Number of map boundary lines every stack starts with.
pub(crate) const BOUNDARY_COUNT: usize = 4;

/// Where an active line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineOwner {
    /// One side of the padded map extent; has no output segment.
    Boundary,
    /// The partition of an ancestor node, by output segment index.
    Segment(usize),
}

#[derive(Debug, Clone, Copy)]
struct ActiveLine {
    line: LineEq,
    owner: LineOwner,
}

/// The closest intersection found on one side of a partition.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hit {
    pub point: Point2,
    pub owner: LineOwner,
    distance: f64,
}

/// Closest bounds on the anchor side and the direction-tip side.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Bounds {
    pub start: Option<Hit>,
    pub end: Option<Hit>,
}

/// Lines bounding the region currently being descended into, root first.
#[derive(Debug)]
pub(crate) struct ActiveLines {
    entries: Vec<ActiveLine>,
}

impl ActiveLines {
    /// Seeds the stack with the four sides of `extent`.
    pub fn seeded(extent: &Extent, capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity + BOUNDARY_COUNT);
        entries.extend(extent.boundary_lines().into_iter().map(|line| ActiveLine {
            line,
            owner: LineOwner::Boundary,
        }));
        Self { entries }
    }

    pub fn push(&mut self, line: LineEq, segment: usize) {
        self.entries.push(ActiveLine {
            line,
            owner: LineOwner::Segment(segment),
        });
    }

    /// Pops the innermost partition line. The boundary lines are never popped.
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > BOUNDARY_COUNT {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if only the boundary lines remain.
    pub fn is_seed_only(&self) -> bool {
        self.entries.len() == BOUNDARY_COUNT
            && self.entries.iter().all(|e| e.owner == LineOwner::Boundary)
    }

    /// Output segment indices of the partition lines on the stack, root first.
    pub fn segment_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().filter_map(|e| match e.owner {
            LineOwner::Segment(index) => Some(index),
            LineOwner::Boundary => None,
        })
    }

    /// Finds the nearest active line on each side of the partition running
    /// from `anchor` to `far_end` along `line`.
    ///
    /// Intersections are bucketed by Manhattan distance to the two ends; a
    /// tie goes to the start bucket. Within a bucket the earliest entry wins
    /// ties. Parallel lines are skipped.
    pub fn closest_bounds(&self, line: &LineEq, anchor: &Point2, far_end: &Point2) -> Bounds {
        let mut bounds = Bounds::default();
        for entry in &self.entries {
            let Some(point) = line.intersect(&entry.line) else {
                continue;
            };
            let to_start = manhattan_distance(&point, anchor);
            let to_end = manhattan_distance(&point, far_end);
            let (slot, distance) = if to_end < to_start {
                (&mut bounds.end, to_end)
            } else {
                (&mut bounds.start, to_start)
            };
            if distance < slot.map_or(f64::MAX, |hit| hit.distance) {
                *slot = Some(Hit {
                    point,
                    owner: entry.owner,
                    distance,
                });
            }
        }
        bounds
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    fn square() -> ActiveLines {
        ActiveLines::seeded(&Extent::new(-32.0, -32.0, 132.0, 132.0), 0)
    }

    #[test]
    fn seeded_with_four_boundaries() {
        let lines = square();
        assert_eq!(lines.len(), BOUNDARY_COUNT);
        assert!(lines.is_seed_only());
        assert_eq!(lines.segment_indices().count(), 0);
    }

    #[test]
    fn pop_never_removes_boundaries() {
        let mut lines = square();
        lines.push(LineEq::new(1.0, 0.0, -50.0), 0);
        assert!(!lines.is_seed_only());
        assert!(lines.pop());
        assert!(!lines.pop());
        assert!(lines.is_seed_only());
    }

    #[test]
    fn segment_indices_are_root_first() {
        let mut lines = square();
        lines.push(LineEq::new(1.0, 0.0, -50.0), 0);
        lines.push(LineEq::new(0.0, 1.0, -50.0), 3);
        assert_eq!(lines.segment_indices().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn closest_bounds_vertical_partition() {
        let anchor = Point2::new(50.0, 50.0);
        let direction = Vector2::new(0.0, 10.0);
        let line = LineEq::from_partition(&anchor, &direction).unwrap();
        let bounds = square().closest_bounds(&line, &anchor, &(anchor + direction));
        let start = bounds.start.unwrap();
        let end = bounds.end.unwrap();
        assert_eq!(start.point, Point2::new(50.0, -32.0));
        assert_eq!(end.point, Point2::new(50.0, 132.0));
        assert_eq!(start.owner, LineOwner::Boundary);
        assert_eq!(end.owner, LineOwner::Boundary);
    }

    #[test]
    fn closest_bounds_prefers_nearer_ancestor() {
        let mut lines = square();
        // y = 80 belongs to segment 7 and is closer than the top boundary.
        lines.push(LineEq::new(0.0, 1.0, -80.0), 7);
        let anchor = Point2::new(20.0, 0.0);
        let direction = Vector2::new(0.0, 16.0);
        let line = LineEq::from_partition(&anchor, &direction).unwrap();
        let bounds = lines.closest_bounds(&line, &anchor, &(anchor + direction));
        let end = bounds.end.unwrap();
        assert_eq!(end.point, Point2::new(20.0, 80.0));
        assert_eq!(end.owner, LineOwner::Segment(7));
        assert_eq!(bounds.start.unwrap().point, Point2::new(20.0, -32.0));
    }

    #[test]
    fn equal_distances_go_to_start_bucket() {
        let lines = ActiveLines::seeded(&Extent::new(-10.0, -10.0, 10.0, 10.0), 0);
        // Partition from (0, -1) to (0, 1): both horizontal sides are 11 away
        // from one end and 9 from the other, so each side has one hit.
        let anchor = Point2::new(0.0, -1.0);
        let direction = Vector2::new(0.0, 2.0);
        let line = LineEq::from_partition(&anchor, &direction).unwrap();
        let bounds = lines.closest_bounds(&line, &anchor, &(anchor + direction));
        assert_eq!(bounds.start.unwrap().point, Point2::new(0.0, -10.0));
        assert_eq!(bounds.end.unwrap().point, Point2::new(0.0, 10.0));

        // A line through the midpoint of the partition is equidistant.
        let mut lines = lines;
        lines.push(LineEq::new(0.0, 1.0, 0.0), 2);
        let bounds = lines.closest_bounds(&line, &anchor, &(anchor + direction));
        let start = bounds.start.unwrap();
        assert_eq!(start.point, Point2::new(0.0, 0.0));
        assert_eq!(start.owner, LineOwner::Segment(2));
        assert_eq!(bounds.end.unwrap().point, Point2::new(0.0, 10.0));
    }

    #[test]
    fn equal_distance_within_bucket_keeps_earliest_entry() {
        let mut lines = square();
        // y = -32 coincides with the bottom boundary, so left, bottom and this
        // ancestor all meet the diagonal at the padded corner.
        lines.push(LineEq::new(0.0, 1.0, 32.0), 0);
        let anchor = Point2::new(-32.0, -32.0);
        let direction = Vector2::new(1.0, 1.0);
        let line = LineEq::from_partition(&anchor, &direction).unwrap();
        let bounds = lines.closest_bounds(&line, &anchor, &(anchor + direction));
        let start = bounds.start.unwrap();
        assert_eq!(start.point, Point2::new(-32.0, -32.0));
        assert_eq!(start.owner, LineOwner::Boundary);
        // Top and right also tie at the opposite corner; top is seeded first.
        let end = bounds.end.unwrap();
        assert_eq!(end.point, Point2::new(132.0, 132.0));
        assert_eq!(end.owner, LineOwner::Boundary);
    }
}
