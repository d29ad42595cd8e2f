pub mod error;
pub mod math;
pub mod operations;
pub mod report;
pub mod topology;

pub use error::{PolymetricError, Result};
