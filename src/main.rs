use anyhow::Context;
use lbw_pipeline::{Pipeline, PipelineConfig};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (input, output) = match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => (PathBuf::from(input), PathBuf::from(output)),
        _ => {
            eprintln!("usage: lbw-pipeline <input.parquet> <output.parquet>");
            return Ok(ExitCode::from(2));
        }
    };

    let config = PipelineConfig::new(input, output);
    let start = Instant::now();

    let summary = Pipeline::new(config)
        .run()
        .context("preparation run aborted")?;

    info!(
        "Prepared {} records ({} low-birth-weight cases) in {:?}",
        summary.records,
        summary.low_birth_weight_cases,
        start.elapsed()
    );
    Ok(ExitCode::SUCCESS)
}
