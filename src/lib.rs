//! A Rust library for preparing perinatal registry extracts for
//! low-birth-weight risk modeling: fixed-rule imputation, categorical
//! binning, composite risk scoring and projection onto the modeling schema.

pub mod adapters;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
// Core types
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{ImputationCounts, ImputationStatistics, Pipeline, RunSummary};

// Record model
pub use models::{BirthRecord, ClinicalFlags, ModelingRecord, RiskTier};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Schema definitions
pub use schema::{input_schema, modeling_schema, validate_input_schema};
