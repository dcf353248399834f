mod active_lines;
mod outline;

pub use outline::{BoundarySegment, Diagnostic, SubsectorBounds, SubsectorOutline};

use tracing::{debug, trace, warn};

use crate::error::{BspError, LevelError, OperationError, Result, Side};
use crate::level::{ChildRef, Extent, PartitionTree};
use crate::math::LineEq;

use active_lines::{ActiveLines, LineOwner};

/// Parameters controlling subsector outline reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsectorMapParams {
    /// Distance the map extent is grown by on every side, so partitions
    /// near the map edge still meet a bounding line.
    pub padding: f64,
}

impl Default for SubsectorMapParams {
    fn default() -> Self {
        Self { padding: 32.0 }
    }
}

impl SubsectorMapParams {
    /// Checks that the parameters describe a usable pass.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `padding` is negative or not
    /// finite.
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "padding must be finite and non-negative, got {}",
                self.padding
            ))
            .into());
        }
        Ok(())
    }
}

/// Reconstructs, for every internal node of a partition tree, the segment of
/// its partition line that bounds the region reachable at that node.
///
/// Segments are emitted in pre-order (node, right subtree, left subtree).
/// When a node's segment ends on an ancestor's line, the endpoint is also
/// recorded in that ancestor's segment so both share the exact vertex.
#[derive(Debug)]
pub struct SubsectorMap<'a, T: PartitionTree + ?Sized> {
    tree: &'a T,
    params: SubsectorMapParams,
}

impl<'a, T: PartitionTree + ?Sized> SubsectorMap<'a, T> {
    /// Creates a reconstruction over `tree` with default parameters.
    #[must_use]
    pub fn new(tree: &'a T) -> Self {
        Self {
            tree,
            params: SubsectorMapParams::default(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: SubsectorMapParams) -> Self {
        self.params = params;
        self
    }

    /// Runs the reconstruction.
    ///
    /// Never fails. Per-node problems skip that node and are listed in
    /// [`SubsectorOutline::diagnostics`]; an unusable tree, extent or
    /// parameter set yields an empty outline with a single diagnostic.
    #[must_use]
    pub fn execute(&self) -> SubsectorOutline {
        self.run().0
    }

    fn run(&self) -> (SubsectorOutline, Option<ActiveLines>) {
        let mut outline = SubsectorOutline::default();
        let (root, extent) = match self.prepare() {
            Ok(start) => start,
            Err(error) => {
                record(&mut outline, None, error);
                return (outline, None);
            }
        };

        let mut pass = Pass {
            tree: self.tree,
            lines: ActiveLines::seeded(&extent, self.tree.nodes().len()),
            visited: vec![false; self.tree.nodes().len()],
            outline,
        };
        pass.walk(root);
        debug_assert!(pass.lines.is_seed_only(), "active line stack unbalanced");

        debug!(
            segments = pass.outline.segments.len(),
            subsectors = pass.outline.subsectors.len(),
            diagnostics = pass.outline.diagnostics.len(),
            "subsector map built"
        );
        (pass.outline, Some(pass.lines))
    }

    fn prepare(&self) -> Result<(ChildRef, Extent)> {
        self.params.validate()?;
        let root = self.tree.root().ok_or(LevelError::EmptyTree)?;
        let extent = self.tree.extent().ok_or(LevelError::MissingExtent)?;
        if extent.is_degenerate() {
            return Err(LevelError::EmptyExtent {
                left: extent.left,
                bottom: extent.bottom,
                right: extent.right,
                top: extent.top,
            }
            .into());
        }
        Ok((root, extent.padded(self.params.padding)))
    }
}

enum Step {
    Enter(ChildRef),
    Leave,
}

/// State of one reconstruction pass.
struct Pass<'a, T: PartitionTree + ?Sized> {
    tree: &'a T,
    lines: ActiveLines,
    visited: Vec<bool>,
    outline: SubsectorOutline,
}

impl<T: PartitionTree + ?Sized> Pass<'_, T> {
    fn walk(&mut self, root: ChildRef) {
        // Children are pushed after their `Leave`, so the pop runs once both
        // subtrees are done regardless of what they reported.
        let mut work = vec![Step::Enter(root)];
        while let Some(step) = work.pop() {
            match step {
                Step::Enter(ChildRef::Leaf(subsector)) => {
                    self.outline.subsectors.push(SubsectorBounds {
                        subsector,
                        segments: self.lines.segment_indices().collect(),
                    });
                }
                Step::Enter(ChildRef::Node(index)) => {
                    if let Some((right, left)) = self.enter(index) {
                        work.push(Step::Leave);
                        work.push(Step::Enter(left));
                        work.push(Step::Enter(right));
                    }
                }
                Step::Leave => {
                    let popped = self.lines.pop();
                    debug_assert!(popped, "leave without matching enter");
                }
            }
        }
    }

    /// Emits the segment of node `index` and pushes its line. Returns the
    /// children to descend into, or `None` if the subtree is skipped.
    fn enter(&mut self, index: usize) -> Option<(ChildRef, ChildRef)> {
        let tree = self.tree;
        let node = match tree.node(index) {
            Ok(node) => node,
            Err(error) => {
                record(&mut self.outline, Some(index), error.into());
                return None;
            }
        };
        let seen = match self.visited.get_mut(index) {
            Some(seen) => std::mem::replace(seen, true),
            None => true,
        };
        if seen {
            record(
                &mut self.outline,
                Some(index),
                LevelError::NodeRevisited { index }.into(),
            );
            return None;
        }
        let line = match LineEq::from_partition(&node.anchor, &node.direction) {
            Ok(line) => line,
            Err(error) => {
                record(&mut self.outline, Some(index), error.into());
                return None;
            }
        };

        let bounds = self.lines.closest_bounds(&line, &node.anchor, &node.far_end());
        for (side, hit) in [(Side::Start, bounds.start), (Side::End, bounds.end)] {
            match hit {
                Some(hit) => {
                    if let LineOwner::Segment(owner) = hit.owner {
                        if let Some(segment) = self.outline.segments.get_mut(owner) {
                            segment.share(hit.point);
                        }
                    }
                }
                None => record(
                    &mut self.outline,
                    Some(index),
                    OperationError::MissingBound { side }.into(),
                ),
            }
        }

        let segment = BoundarySegment::new(
            bounds.start.map(|hit| hit.point),
            bounds.end.map(|hit| hit.point),
        );
        trace!(node = index, start = ?segment.start(), end = ?segment.end(), "partition segment");
        let segment_index = self.outline.segments.len();
        self.outline.segments.push(segment);
        self.lines.push(line, segment_index);
        Some((node.right, node.left))
    }
}

fn record(outline: &mut SubsectorOutline, node: Option<usize>, error: BspError) {
    warn!(node = ?node, %error, "subsector map");
    outline.diagnostics.push(Diagnostic { node, error });
}
