//! Categorical Binner
//!
//! Maps each configured numeric/count field of a resolved record into its
//! ordinal label using the fixed cutpoints owned by the category enums. The
//! original numeric fields are retained alongside the labels. Re-invoking
//! the binner on an already-binned record is a pass-through: labels are
//! written once and never re-mapped.

use crate::error::{PipelineError, Result};
use crate::models::types::{
    AbortionGroup, ChildrenGroup, DrinkingLevel, LastBirthOutcome, MaritalStatus, ParityGroup,
    PrenatalStartGroup, SchoolingLevel, SmokingLevel,
};
use crate::models::BirthRecord;
use crate::schema::fields;

fn require_f64(value: Option<f64>, field: &str, row: usize) -> Result<f64> {
    value.ok_or_else(|| PipelineError::missing_dependency(field, "resolve", row))
}

fn require_i32(value: Option<i32>, field: &str, row: usize) -> Result<i32> {
    value.ok_or_else(|| PipelineError::missing_dependency(field, "resolve", row))
}

fn unmapped_f64(field: &str, value: f64, row: usize) -> PipelineError {
    // Cutpoint misses on a continuous field can only come from negative
    // values, so truncation loses nothing meaningful in the diagnostic.
    PipelineError::unmapped_category(field, value as i64, row)
}

/// Bin every configured field of a resolved record
///
/// # Arguments
/// * `record` - The record to bin; must have completed the resolve stage
/// * `row` - Global index of the record, used in diagnostics
///
/// # Errors
/// Fails with a missing-dependency error if a raw field is unset, or an
/// unmapped-category error if a value falls outside every defined bin.
pub fn bin_record(mut record: BirthRecord, row: usize) -> Result<BirthRecord> {
    if record.is_binned() {
        return Ok(record);
    }

    let schooling = require_f64(record.maternal_schooling, fields::MATERNAL_SCHOOLING, row)?;
    record.schooling_level = Some(
        SchoolingLevel::from_years(schooling)
            .ok_or_else(|| unmapped_f64(fields::MATERNAL_SCHOOLING, schooling, row))?,
    );

    let pregnancies = require_i32(record.total_pregnancies, fields::TOTAL_PREGNANCIES, row)?;
    record.parity_group = Some(ParityGroup::from_count(pregnancies).ok_or_else(|| {
        PipelineError::unmapped_category(fields::TOTAL_PREGNANCIES, i64::from(pregnancies), row)
    })?);

    let month = require_i32(record.prenatal_start_month, fields::PRENATAL_START_MONTH, row)?;
    record.prenatal_start = Some(PrenatalStartGroup::from_month(month).ok_or_else(|| {
        PipelineError::unmapped_category(fields::PRENATAL_START_MONTH, i64::from(month), row)
    })?);

    let abortions = require_i32(record.prior_abortions, fields::PRIOR_ABORTIONS, row)?;
    record.abortion_group = Some(AbortionGroup::from_count(abortions).ok_or_else(|| {
        PipelineError::unmapped_category(fields::PRIOR_ABORTIONS, i64::from(abortions), row)
    })?);

    let outcome = require_i32(record.last_birth_outcome, fields::LAST_BIRTH_OUTCOME, row)?;
    record.outcome_group = Some(LastBirthOutcome::from_code(outcome).ok_or_else(|| {
        PipelineError::unmapped_category(fields::LAST_BIRTH_OUTCOME, i64::from(outcome), row)
    })?);

    let marital = require_i32(record.marital_status, fields::MARITAL_STATUS, row)?;
    record.marital = Some(MaritalStatus::from_code(marital).ok_or_else(|| {
        PipelineError::unmapped_category(fields::MARITAL_STATUS, i64::from(marital), row)
    })?);

    let children = require_i32(record.living_children, fields::LIVING_CHILDREN, row)?;
    record.children_group = Some(ChildrenGroup::from_count(children).ok_or_else(|| {
        PipelineError::unmapped_category(fields::LIVING_CHILDREN, i64::from(children), row)
    })?);

    let cigarettes = require_f64(record.cigarettes_per_day, fields::CIGARETTES_PER_DAY, row)?;
    record.smoking_level = Some(
        SmokingLevel::from_cigarettes(cigarettes)
            .ok_or_else(|| unmapped_f64(fields::CIGARETTES_PER_DAY, cigarettes, row))?,
    );

    let doses = require_f64(
        record.alcohol_doses_per_week,
        fields::ALCOHOL_DOSES_PER_WEEK,
        row,
    )?;
    record.drinking_level = Some(
        DrinkingLevel::from_doses(doses)
            .ok_or_else(|| unmapped_f64(fields::ALCOHOL_DOSES_PER_WEEK, doses, row))?,
    );

    Ok(record)
}
