// Domain modules
pub mod error;
pub mod prediction;

pub use error::{CheckError, Result};
pub use prediction::{CheckOutcome, CheckRequest, PredictionResult};
