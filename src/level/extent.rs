use crate::math::{LineEq, Point2};

/// Axis-aligned extent of a map, in map units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Extent {
    /// Creates an extent from its four sides.
    #[must_use]
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Computes the tightest extent around `points`.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut extent = Self::new(first.x, first.y, first.x, first.y);
        for p in iter {
            extent.left = extent.left.min(p.x);
            extent.bottom = extent.bottom.min(p.y);
            extent.right = extent.right.max(p.x);
            extent.top = extent.top.max(p.y);
        }
        Some(extent)
    }

    /// Returns `true` if the extent has no area.
    ///
    /// NaN sides also count as degenerate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.left < self.right && self.bottom < self.top)
    }

    /// Returns the extent grown by `margin` on all four sides.
    #[must_use]
    pub fn padded(&self, margin: f64) -> Self {
        Self::new(
            self.left - margin,
            self.bottom - margin,
            self.right + margin,
            self.top + margin,
        )
    }

    /// Returns the four side lines in the order left, top, right, bottom.
    #[must_use]
    pub fn boundary_lines(&self) -> [LineEq; 4] {
        [
            LineEq::new(1.0, 0.0, -self.left),
            LineEq::new(0.0, 1.0, -self.top),
            LineEq::new(1.0, 0.0, -self.right),
            LineEq::new(0.0, 1.0, -self.bottom),
        ]
    }
}
