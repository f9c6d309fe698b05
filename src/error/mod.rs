//! Error handling for the preparation pipeline.
//!
//! All errors are fatal to the run: partial imputation or partially binned
//! output would corrupt downstream statistical validity, so there is no
//! per-record recovery. Every diagnostic names the offending field and,
//! where one exists, the record index.

/// Specialized error type for the pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A rule or stage referenced a column that is not part of the input schema
    #[error("invalid field: column '{field}' does not exist in the input schema")]
    InvalidField {
        /// Name of the missing column
        field: String,
    },

    /// A stage was invoked on data that has not completed a prerequisite stage
    #[error("missing dependency: '{field}' is unset at record {row}; the '{stage}' stage must run first")]
    MissingDependency {
        /// Field that should have been populated by the prerequisite stage
        field: String,
        /// Name of the stage that populates the field
        stage: &'static str,
        /// Index of the offending record
        row: usize,
    },

    /// A categorical value fell outside every defined bin
    #[error("unmapped category: value {value} of '{field}' at record {row} matches no defined bin")]
    UnmappedCategory {
        /// Field holding the unexpected code
        field: String,
        /// The code that matched no bin
        value: i64,
        /// Index of the offending record
        row: usize,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error with schema or data type compatibility
    #[error("schema error: {0}")]
    Schema(String),
}

impl PipelineError {
    /// Shorthand for an [`PipelineError::InvalidField`] error
    #[must_use]
    pub fn invalid_field(field: &str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
        }
    }

    /// Shorthand for a [`PipelineError::MissingDependency`] error
    #[must_use]
    pub fn missing_dependency(field: &str, stage: &'static str, row: usize) -> Self {
        Self::MissingDependency {
            field: field.to_string(),
            stage,
            row,
        }
    }

    /// Shorthand for an [`PipelineError::UnmappedCategory`] error
    #[must_use]
    pub fn unmapped_category(field: &str, value: i64, row: usize) -> Self {
        Self::UnmappedCategory {
            field: field.to_string(),
            value,
            row,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
