//! Composite Risk Scorer
//!
//! Computes the four weighted composite scores from a binned record and maps
//! each to its 3-level risk tier via fixed cutpoints. All four scorers are
//! pure functions over a single record; there is no cross-record state.
//!
//! The behavioral score is an exhaustive decision table over the joint
//! smoking/drinking state rather than a match-first-true rule list, so the
//! one combination the original rules never enumerated is a visible arm
//! instead of a hidden default.

use crate::error::{PipelineError, Result};
use crate::models::types::{
    DrinkingLevel, MaritalStatus, PrenatalStartGroup, RiskTier, SchoolingLevel, SmokingLevel,
};
use crate::models::BirthRecord;
use crate::schema::fields;

/// Map an organic-comorbidity score to its tier (0 low, 1-2 moderate, 3+ high)
#[must_use]
pub const fn organic_tier(score: u32) -> RiskTier {
    match score {
        0 => RiskTier::Low,
        1..=2 => RiskTier::Moderate,
        _ => RiskTier::High,
    }
}

/// Map a gestational-comorbidity score to its tier (0 low, 1 moderate, 2+ high)
#[must_use]
pub const fn gestational_tier(score: u32) -> RiskTier {
    match score {
        0 => RiskTier::Low,
        1 => RiskTier::Moderate,
        _ => RiskTier::High,
    }
}

/// Map a behavioral-risk score to its tier (0 low, 1-2 moderate, 3+ high)
#[must_use]
pub const fn behavioral_tier(score: u32) -> RiskTier {
    match score {
        0 => RiskTier::Low,
        1..=2 => RiskTier::Moderate,
        _ => RiskTier::High,
    }
}

/// Map a social-vulnerability score to its tier (0 low, 1-2 moderate, 3+ high)
#[must_use]
pub const fn social_tier(score: u32) -> RiskTier {
    match score {
        0 => RiskTier::Low,
        1..=2 => RiskTier::Moderate,
        _ => RiskTier::High,
    }
}

/// Decision table for the behavioral score over the joint habit state
///
/// Nine combinations, all explicit. The light-smoking + heavy-drinking pair
/// is the one state the source rule list never enumerated; it keeps the rule
/// list's fallback weight of 1 rather than an invented one.
#[must_use]
pub const fn behavioral_score(smoking: SmokingLevel, drinking: DrinkingLevel) -> u32 {
    use DrinkingLevel::{HeavyDrinker, LightDrinker, NonDrinker};
    use SmokingLevel::{HeavySmoker, LightSmoker, NonSmoker};
    match (smoking, drinking) {
        (NonSmoker, NonDrinker) => 0,
        (LightSmoker, NonDrinker) => 1,
        (HeavySmoker, NonDrinker) => 2,
        (NonSmoker, LightDrinker) => 1,
        (NonSmoker, HeavyDrinker) => 2,
        (LightSmoker, LightDrinker) => 2,
        (HeavySmoker, LightDrinker) => 3,
        (HeavySmoker, HeavyDrinker) => 4,
        // Not enumerated by the source rules; carries their fallback weight.
        (LightSmoker, HeavyDrinker) => 1,
    }
}

/// Weighted presence of a clinical flag (0/1 value times the given weight)
fn weighted_flag(value: Option<i32>, weight: u32, field: &str, row: usize) -> Result<u32> {
    let value =
        value.ok_or_else(|| PipelineError::missing_dependency(field, "resolve", row))?;
    Ok(if value == 1 { weight } else { 0 })
}

fn require_label<T: Copy>(value: Option<T>, field: &'static str, row: usize) -> Result<T> {
    value.ok_or_else(|| PipelineError::missing_dependency(field, "bin", row))
}

/// Compute all four composite scores and tiers for a binned record
///
/// # Arguments
/// * `record` - The record to score; must have completed the bin stage
/// * `row` - Global index of the record, used in diagnostics
///
/// # Errors
/// Fails with a missing-dependency error if a required binned label or
/// clinical flag is unset.
pub fn score_record(mut record: BirthRecord, row: usize) -> Result<BirthRecord> {
    let flags = &record.clinical;

    // Organic comorbidity: diabetes and renal disease weigh double.
    let organic = weighted_flag(flags.diabetes, 2, fields::DIABETES, row)?
        + weighted_flag(flags.renal_disease, 2, fields::RENAL_DISEASE, row)?
        + weighted_flag(flags.anemia, 1, fields::ANEMIA, row)?
        + weighted_flag(flags.cardiac_disease, 1, fields::CARDIAC_DISEASE, row)?
        + weighted_flag(flags.pulmonary_disease, 1, fields::PULMONARY_DISEASE, row)?
        + weighted_flag(flags.herpes, 1, fields::HERPES, row)?
        + weighted_flag(flags.polyhydramnios, 1, fields::POLYHYDRAMNIOS, row)?
        + weighted_flag(flags.hemoglobinopathy, 1, fields::HEMOGLOBINOPATHY, row)?
        + weighted_flag(flags.rh_sensitization, 1, fields::RH_SENSITIZATION, row)?;

    // Gestational comorbidity: eclampsia weighs double.
    let gestational = weighted_flag(flags.eclampsia, 2, fields::ECLAMPSIA, row)?
        + weighted_flag(flags.chronic_hypertension, 1, fields::CHRONIC_HYPERTENSION, row)?
        + weighted_flag(
            flags.pregnancy_hypertension,
            1,
            fields::PREGNANCY_HYPERTENSION,
            row,
        )?
        + weighted_flag(flags.incompetent_cervix, 1, fields::INCOMPETENT_CERVIX, row)?
        + weighted_flag(flags.risk_medication, 1, fields::RISK_MEDICATION, row)?
        + weighted_flag(flags.prior_preterm_birth, 1, fields::PRIOR_PRETERM_BIRTH, row)?
        + weighted_flag(flags.uterine_bleeding, 1, fields::UTERINE_BLEEDING, row)?;

    // Behavioral risk over the joint habit state.
    let smoking = require_label(record.smoking_level, "smoking_level", row)?;
    let drinking = require_label(record.drinking_level, "drinking_level", row)?;
    let behavioral = behavioral_score(smoking, drinking);

    // Prenatal access / social vulnerability.
    let schooling = require_label(record.schooling_level, "schooling_level", row)?;
    let marital = require_label(record.marital, "marital", row)?;
    let prenatal = require_label(record.prenatal_start, "prenatal_start", row)?;
    let schooling_points = match schooling {
        SchoolingLevel::Low => 2,
        SchoolingLevel::Medium => 1,
        SchoolingLevel::High => 0,
    };
    let marital_points = match marital {
        MaritalStatus::Unmarried => 1,
        MaritalStatus::Married => 0,
    };
    let prenatal_points = match prenatal {
        PrenatalStartGroup::Late => 2,
        PrenatalStartGroup::Medium => 1,
        PrenatalStartGroup::Early => 0,
    };
    let ultrasound = flags
        .ultrasound
        .ok_or_else(|| PipelineError::missing_dependency(fields::ULTRASOUND, "resolve", row))?;
    let no_ultrasound_points = u32::from(ultrasound == 0);
    let social = schooling_points + marital_points + prenatal_points + no_ultrasound_points;

    record.organic_score = Some(organic);
    record.organic_tier = Some(organic_tier(organic));
    record.gestational_score = Some(gestational);
    record.gestational_tier = Some(gestational_tier(gestational));
    record.behavioral_score = Some(behavioral);
    record.behavioral_tier = Some(behavioral_tier(behavioral));
    record.social_score = Some(social);
    record.social_tier = Some(social_tier(social));

    Ok(record)
}
