pub mod error;
pub mod level;
pub mod math;
pub mod operations;

pub use error::{BspError, Result};
