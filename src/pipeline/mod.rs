//! The preparation pipeline
//!
//! Strictly ordered stages over the full dataset: load, resolve missing
//! values, bin, score, select, write. Every stage completes for the whole
//! dataset before the next one starts; the per-record work inside the
//! resolve/bin/score stages is parallel because records never read each
//! other, while the aggregate statistics the resolver needs are computed
//! once, sequentially, before any row is imputed.

pub mod bin;
pub mod resolve;
pub mod score;
pub mod select;
pub mod statistics;
pub mod summary;

use indicatif::ParallelProgressIterator;
use log::info;
use rayon::prelude::*;
use std::time::Instant;

use crate::adapters;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{BirthRecord, ModelingRecord};
use crate::reader;
use crate::utils::progress::stage_progress_bar;
use crate::writer;

pub use statistics::ImputationStatistics;
pub use summary::{ImputationCounts, RunSummary, TierCounts};

/// Orchestrates one preparation run
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline for the given configuration
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Execute the full preparation run
    ///
    /// # Returns
    /// * `Result<RunSummary>` - Aggregate description of the completed run
    ///
    /// # Errors
    /// Any stage failure aborts the run; no output file is written.
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        info!(
            "Preparing {} -> {}",
            self.config.input_path.display(),
            self.config.output_path.display()
        );

        let records = self.load()?;
        info!("Loaded {} records in {:?}", records.len(), start.elapsed());

        // Audit counts come from the pre-imputation records so the summary
        // reports exactly what the resolver filled.
        let imputed = ImputationCounts::from_records(&records);

        let records = self.resolve(records)?;
        let records = self.bin(records)?;
        let records = self.score(records)?;
        let modeling = self.select(&records)?;

        let batch = adapters::modeling_batch(&modeling)?;
        writer::write_modeling(&self.config.output_path, &batch)?;

        let summary = RunSummary::collect(&records, imputed);
        if self.config.write_summary {
            let summary_path = self.config.output_path.with_extension("summary.json");
            summary.write_json(&summary_path)?;
            info!("Wrote run summary to {}", summary_path.display());
        }
        info!("{}", summary.render());
        info!("Preparation completed in {:?}", start.elapsed());
        Ok(summary)
    }

    /// Load the registry extract into typed records
    fn load(&self) -> Result<Vec<BirthRecord>> {
        let batches = reader::read_input(&self.config)?;
        let mut records = Vec::new();
        for batch in &batches {
            let converted = adapters::records_from_batch(batch, records.len())?;
            records.extend(converted);
        }
        Ok(records)
    }

    /// Resolve stage: aggregate pass, then parallel per-record imputation
    fn resolve(&self, records: Vec<BirthRecord>) -> Result<Vec<BirthRecord>> {
        let stage = Instant::now();
        let stats = ImputationStatistics::from_records(&records);

        let pb = stage_progress_bar(
            records.len() as u64,
            "resolving missing values",
            self.config.show_progress,
        );
        let records: Vec<BirthRecord> = records
            .into_par_iter()
            .progress_with(pb)
            .map(|record| resolve::resolve_record(record, &stats))
            .collect();

        // Post-condition: no retained field is missing in any record.
        for (row, record) in records.iter().enumerate() {
            record.ensure_resolved(row)?;
        }
        info!(
            "Resolved missing values for {} records in {:?}",
            records.len(),
            stage.elapsed()
        );
        Ok(records)
    }

    /// Bin stage: parallel per-record categorical binning
    fn bin(&self, records: Vec<BirthRecord>) -> Result<Vec<BirthRecord>> {
        let stage = Instant::now();
        let pb = stage_progress_bar(
            records.len() as u64,
            "binning categorical fields",
            self.config.show_progress,
        );
        let records: Result<Vec<BirthRecord>> = records
            .into_par_iter()
            .enumerate()
            .progress_with(pb)
            .map(|(row, record)| bin::bin_record(record, row))
            .collect();
        let records = records?;
        info!("Binned {} records in {:?}", records.len(), stage.elapsed());
        Ok(records)
    }

    /// Score stage: parallel per-record composite scoring
    fn score(&self, records: Vec<BirthRecord>) -> Result<Vec<BirthRecord>> {
        let stage = Instant::now();
        let pb = stage_progress_bar(
            records.len() as u64,
            "computing composite risk scores",
            self.config.show_progress,
        );
        let records: Result<Vec<BirthRecord>> = records
            .into_par_iter()
            .enumerate()
            .progress_with(pb)
            .map(|(row, record)| score::score_record(record, row))
            .collect();
        let records = records?;
        info!("Scored {} records in {:?}", records.len(), stage.elapsed());
        Ok(records)
    }

    /// Select stage: projection onto the modeling schema
    fn select(&self, records: &[BirthRecord]) -> Result<Vec<ModelingRecord>> {
        let modeling: Result<Vec<ModelingRecord>> = records
            .iter()
            .enumerate()
            .map(|(row, record)| select::select_record(record, row))
            .collect();
        let modeling = modeling?;
        info!("Selected modeling features for {} records", modeling.len());
        Ok(modeling)
    }
}
