pub mod subsector_map;

pub use subsector_map::{
    BoundarySegment, Diagnostic, SubsectorBounds, SubsectorMap, SubsectorMapParams,
    SubsectorOutline,
};
