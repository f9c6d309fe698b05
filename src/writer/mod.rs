//! Writing the modeling table
//!
//! The pipeline is an all-or-nothing batch transform: the modeling table is
//! written to a temporary sibling file and renamed into place only after the
//! write completes, so an aborted run never leaves a partial output file.

use std::fs::{self, File};
use std::path::Path;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::Result;

/// Write the modeling batch to a Parquet file
///
/// # Arguments
/// * `path` - Destination path of the modeling table
/// * `batch` - The finalized modeling batch
pub fn write_modeling(path: &Path, batch: &RecordBatch) -> Result<()> {
    let tmp_path = path.with_extension("parquet.tmp");

    let file = File::create(&tmp_path)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;

    fs::rename(&tmp_path, path)?;
    log::info!(
        "Wrote modeling table with {} records to {}",
        batch.num_rows(),
        path.display()
    );
    Ok(())
}
