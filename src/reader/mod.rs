//! Reading the registry extract with schema validation
//!
//! The reader projects the file down to the retained input columns, so the
//! four dropped columns (paternal age/schooling and the years-since fields)
//! never enter the pipeline. Unlike a generic reader, a missing required
//! column here is fatal: an imputation rule referencing a column the file
//! does not carry must abort the run, not degrade it.

use std::fs::{self, File};
use std::path::Path;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::schema::{input_schema, validate_input_schema};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<File> {
    if !path.exists() {
        return Err(PipelineError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {} (needed for: {purpose})", path.display()),
        )));
    }
    if !path.is_file() {
        return Err(PipelineError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "Path is not a file: {} (expected a file for: {purpose})",
                path.display()
            ),
        )));
    }
    fs::File::open(path).map_err(PipelineError::Io)
}

/// Read the registry extract into Arrow record batches
///
/// Validates the file schema against the retained input schema, then reads
/// only the retained columns.
///
/// # Arguments
/// * `config` - Pipeline configuration (input path, batch size, validation toggle)
///
/// # Returns
/// * `Result<Vec<RecordBatch>>` - Arrow record batches holding the retained columns
pub fn read_input(config: &PipelineConfig) -> Result<Vec<RecordBatch>> {
    let path = &config.input_path;
    let file = safe_open_file(path, "reading the registry extract")?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let file_schema = builder.schema().clone();

    if config.validate_schema {
        validate_input_schema(&file_schema)?;
    }

    // Project to the retained columns. Every retained column is known to
    // exist after validation; without validation a missing column is still
    // fatal here.
    let expected = input_schema();
    let mut projection = Vec::with_capacity(expected.fields().len());
    for field in expected.fields() {
        let idx = file_schema
            .index_of(field.name())
            .map_err(|_| PipelineError::invalid_field(field.name()))?;
        projection.push(idx);
    }

    let mask = ProjectionMask::leaves(builder.parquet_schema(), projection);
    let reader = builder
        .with_projection(mask)
        .with_batch_size(config.batch_size)
        .build()?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }

    log::info!(
        "Read {} batches from {}",
        batches.len(),
        path.display()
    );
    Ok(batches)
}
