use thiserror::Error;

/// Error types for the data layer
#[derive(Error, Debug)]
pub enum ModelError {
    /// Error reading the dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The wide table has no identifier column
    #[error("missing identifier column \"{0}\"")]
    MissingIdentifierColumn(String),

    /// Reshaping produced no usable records
    #[error("dataset contains no usable records")]
    EmptyDataset,

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl From<polars::error::PolarsError> for ModelError {
    fn from(error: polars::error::PolarsError) -> Self {
        ModelError::DataFrame(error.to_string())
    }
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
