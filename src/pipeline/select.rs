//! Feature Selector
//!
//! Projects a fully transformed record onto the fixed modeling subset. The
//! field list itself is the contract: exclusions were decided offline
//! (statistical insignificance or redundancy with a composite score) and are
//! not re-derived at runtime.

use crate::error::{PipelineError, Result};
use crate::models::{BirthRecord, ModelingRecord};
use crate::schema::fields;

/// Project a scored record onto the modeling schema
///
/// # Arguments
/// * `record` - The record to project; must have completed the score stage
/// * `row` - Global index of the record, used in diagnostics
///
/// # Errors
/// Fails with a missing-dependency error if a projected field has not been
/// populated by its stage.
pub fn select_record(record: &BirthRecord, row: usize) -> Result<ModelingRecord> {
    let maternal_age = record
        .maternal_age
        .ok_or_else(|| PipelineError::missing_dependency(fields::MATERNAL_AGE, "resolve", row))?;
    let prior_abortions = record
        .prior_abortions
        .ok_or_else(|| PipelineError::missing_dependency(fields::PRIOR_ABORTIONS, "resolve", row))?;
    let children_group = record
        .children_group
        .ok_or_else(|| PipelineError::missing_dependency(fields::CHILDREN_GROUP, "bin", row))?;
    let organic_tier = record
        .organic_tier
        .ok_or_else(|| PipelineError::missing_dependency(fields::ORGANIC_TIER, "score", row))?;
    let gestational_tier = record
        .gestational_tier
        .ok_or_else(|| PipelineError::missing_dependency(fields::GESTATIONAL_TIER, "score", row))?;
    let behavioral_tier = record
        .behavioral_tier
        .ok_or_else(|| PipelineError::missing_dependency(fields::BEHAVIORAL_TIER, "score", row))?;
    let social_tier = record
        .social_tier
        .ok_or_else(|| PipelineError::missing_dependency(fields::SOCIAL_TIER, "score", row))?;

    Ok(ModelingRecord {
        low_birth_weight: record.low_birth_weight,
        maternal_age,
        prior_abortions,
        children_group,
        organic_tier,
        gestational_tier,
        behavioral_tier,
        social_tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::{ChildrenGroup, RiskTier};

    #[test]
    fn test_projection_of_a_scored_record() {
        let mut record = BirthRecord::new(true);
        record.maternal_age = Some(31.0);
        record.prior_abortions = Some(1);
        record.children_group = Some(ChildrenGroup::OneToTwo);
        record.organic_tier = Some(RiskTier::Low);
        record.gestational_tier = Some(RiskTier::Moderate);
        record.behavioral_tier = Some(RiskTier::Low);
        record.social_tier = Some(RiskTier::High);

        let selected = select_record(&record, 0).unwrap();
        assert!(selected.low_birth_weight);
        assert_eq!(selected.maternal_age, 31.0);
        assert_eq!(selected.prior_abortions, 1);
        assert_eq!(selected.children_group, ChildrenGroup::OneToTwo);
        assert_eq!(selected.social_tier, RiskTier::High);
    }

    #[test]
    fn test_unscored_record_is_a_missing_dependency() {
        let mut record = BirthRecord::default();
        record.maternal_age = Some(31.0);
        record.prior_abortions = Some(0);
        record.children_group = Some(ChildrenGroup::Zero);
        let err = select_record(&record, 5).unwrap_err();
        match err {
            PipelineError::MissingDependency { stage, row, .. } => {
                assert_eq!(stage, "score");
                assert_eq!(row, 5);
            }
            other => panic!("expected MissingDependency, got {other:?}"),
        }
    }
}
