//! PhonoReduce core: shared error type and reducer configuration.

pub mod config;
pub mod error;

pub use config::{DistanceWeights, ReducerConfig};
pub use error::{PrError, Result};
