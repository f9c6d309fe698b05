//! Progress reporting utilities for long-running operations
//!
//! This module provides standardized progress reporting functionality
//! for the per-record transform stages, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a stage progress bar
pub const DEFAULT_STAGE_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a progress bar for a transform stage with a standardized style
///
/// # Arguments
/// * `length` - Total number of records in the stage
/// * `description` - Stage description displayed as the bar message
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_stage_progress_bar(length: u64, description: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) = ProgressStyle::default_bar().template(DEFAULT_STAGE_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(description.to_string());
    pb
}

/// Create a stage progress bar, or a hidden one when progress display is disabled
#[must_use]
pub fn stage_progress_bar(length: u64, description: &str, enabled: bool) -> ProgressBar {
    if enabled {
        create_stage_progress_bar(length, description)
    } else {
        ProgressBar::hidden()
    }
}
