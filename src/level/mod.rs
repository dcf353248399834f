pub mod extent;
pub mod node;

pub use extent::Extent;
pub use node::{BoundBox, ChildRef, PartitionNode, NF_SUBSECTOR_16, NF_SUBSECTOR_32};

use crate::error::LevelError;
use crate::math::Point2;

/// Read-only view of a decoded level's partition tree.
pub trait PartitionTree {
    /// Returns the partition nodes in record order.
    fn nodes(&self) -> &[PartitionNode];

    /// Returns the extent of all map vertices, or `None` if there are none.
    fn extent(&self) -> Option<Extent>;

    /// Returns the root reference: by convention the last node.
    fn root(&self) -> Option<ChildRef> {
        self.nodes().len().checked_sub(1).map(ChildRef::Node)
    }

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::NodeOutOfRange`] if `index` is not a valid node.
    fn node(&self, index: usize) -> Result<&PartitionNode, LevelError> {
        let nodes = self.nodes();
        nodes.get(index).ok_or(LevelError::NodeOutOfRange {
            index,
            count: nodes.len(),
        })
    }
}

/// Map vertices and partition nodes of one level.
#[derive(Debug, Clone, Default)]
pub struct LevelGeometry {
    vertices: Vec<Point2>,
    nodes: Vec<PartitionNode>,
}

impl LevelGeometry {
    /// Creates a level from its vertices and nodes.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, nodes: Vec<PartitionNode>) -> Self {
        Self { vertices, nodes }
    }

    /// Returns the map vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
}

impl PartitionTree for LevelGeometry {
    fn nodes(&self) -> &[PartitionNode] {
        &self.nodes
    }

    fn extent(&self) -> Option<Extent> {
        Extent::from_points(&self.vertices)
    }
}
