use crate::math::{Point2, Vector2};

/// Leaf flag of a 16-bit child reference in vanilla node records.
pub const NF_SUBSECTOR_16: u16 = 0x8000;

/// Leaf flag of a 32-bit child reference in extended node records.
pub const NF_SUBSECTOR_32: u32 = 0x8000_0000;

/// A decoded child reference of a partition node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRef {
    /// A terminal subsector, by subsector index.
    Leaf(u32),
    /// Another partition node, by node index.
    Node(usize),
}

impl ChildRef {
    /// Decodes a vanilla 16-bit child reference.
    #[must_use]
    pub fn from_raw_u16(raw: u16) -> Self {
        if raw & NF_SUBSECTOR_16 != 0 {
            Self::Leaf(u32::from(raw & !NF_SUBSECTOR_16))
        } else {
            Self::Node(usize::from(raw))
        }
    }

    /// Decodes an extended 32-bit child reference.
    ///
    /// Node indices that do not fit in `usize` decode to `usize::MAX`, which
    /// no tree can hold and so is reported as out of range downstream.
    #[must_use]
    pub fn from_raw_u32(raw: u32) -> Self {
        if raw & NF_SUBSECTOR_32 != 0 {
            Self::Leaf(raw & !NF_SUBSECTOR_32)
        } else {
            Self::Node(usize::try_from(raw).unwrap_or(usize::MAX))
        }
    }

    /// Returns `true` for a subsector reference.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

/// Axis-aligned bounding box of a node child, in record order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundBox {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

/// One internal node of the partition tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionNode {
    /// Start point of the partition line.
    pub anchor: Point2,
    /// Direction of the partition line; `anchor + direction` is its far end.
    pub direction: Vector2,
    /// Bounding box of the right child.
    pub right_box: BoundBox,
    /// Bounding box of the left child.
    pub left_box: BoundBox,
    /// Right (front) child.
    pub right: ChildRef,
    /// Left (back) child.
    pub left: ChildRef,
}

impl PartitionNode {
    /// Creates a node with empty child bounding boxes.
    #[must_use]
    pub fn new(anchor: Point2, direction: Vector2, right: ChildRef, left: ChildRef) -> Self {
        Self {
            anchor,
            direction,
            right_box: BoundBox::default(),
            left_box: BoundBox::default(),
            right,
            left,
        }
    }

    /// Creates a node from the integer fields of a vanilla node record.
    #[must_use]
    pub fn from_raw(
        partition: [i16; 4],
        right_box: BoundBox,
        left_box: BoundBox,
        right_child: u16,
        left_child: u16,
    ) -> Self {
        let [x, y, dx, dy] = partition;
        Self::new(
            Point2::new(f64::from(x), f64::from(y)),
            Vector2::new(f64::from(dx), f64::from(dy)),
            ChildRef::from_raw_u16(right_child),
            ChildRef::from_raw_u16(left_child),
        )
        .with_boxes(right_box, left_box)
    }

    /// Sets both child bounding boxes.
    #[must_use]
    pub fn with_boxes(mut self, right_box: BoundBox, left_box: BoundBox) -> Self {
        self.right_box = right_box;
        self.left_box = left_box;
        self
    }

    /// Returns the far end of the partition segment.
    #[must_use]
    pub fn far_end(&self) -> Point2 {
        self.anchor + self.direction
    }
}
