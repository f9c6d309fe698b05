//! Configuration for the preparation pipeline.

use std::path::PathBuf;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the raw registry extract (Parquet)
    pub input_path: PathBuf,
    /// Path the modeling table is written to (Parquet)
    pub output_path: PathBuf,
    /// Batch size used when reading the input file
    pub batch_size: usize,
    /// Whether to validate the input schema before transformation
    pub validate_schema: bool,
    /// Whether to write the JSON run summary next to the output file
    pub write_summary: bool,
    /// Whether to display progress bars during the transform stages
    pub show_progress: bool,
}

impl PipelineConfig {
    /// Create a configuration for the given input/output pair with defaults
    #[must_use]
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            batch_size: 8192,
            validate_schema: true,
            write_summary: true,
            show_progress: true,
        }
    }
}
