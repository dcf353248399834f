use std::fmt;

use thiserror::Error;

/// Top-level error type for subsector outline reconstruction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BspError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the decoded level data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("level has no nodes")]
    EmptyTree,

    #[error("level has no vertices")]
    MissingExtent,

    #[error("empty map extent ({left}, {bottom}) - ({right}, {top})")]
    EmptyExtent {
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
    },

    #[error("invalid node index {index} (level has {count} nodes)")]
    NodeOutOfRange { index: usize, count: usize },

    #[error("node {index} is reachable more than once")]
    NodeRevisited { index: usize },
}

/// Which end of a directed partition line a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The anchor side.
    Start,
    /// The direction-tip side.
    End,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors related to outline operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("no bounding line found on the {side} side")]
    MissingBound { side: Side },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`BspError`].
pub type Result<T> = std::result::Result<T, BspError>;
