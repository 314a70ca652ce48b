use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),

    /// The slice is too small for a trend fit; callers surface this as a
    /// warning, not a failure.
    #[error("not enough observations for a trend fit: have {available}, need {required}")]
    NotEnoughData { available: usize, required: usize },

    /// Error from the regression fit
    #[error("regression error: {0}")]
    Regression(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(err: polars::error::PolarsError) -> Self {
        let compute_error = match err {
            polars::error::PolarsError::NoData(_)
            | polars::error::PolarsError::ShapeMismatch(_)
            | polars::error::PolarsError::SchemaMismatch(_)
            | polars::error::PolarsError::ComputeError(_)
            | polars::error::PolarsError::OutOfBounds(_) => {
                ComputeError::DataFrame(err.to_string())
            }
            _ => ComputeError::Series(err.to_string()),
        };
        error!(?compute_error, "DataFrame operation failed");
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
