//! Schema definitions for the registry extract and the modeling table
//!
//! The raw extract carries 36 columns. Four of them (paternal age, paternal
//! schooling, years since the last fetal death and years since the last live
//! birth) are dropped at load time rather than imputed, so the retained
//! input schema below has 32 columns. The modeling schema is the fixed
//! 7-predictor projection written back out for the external model trainer.

use crate::error::{PipelineError, Result};
use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Column names of the registry extract
pub mod fields {
    /// Target label: 1 low birth weight, 0 normal
    pub const LOW_BIRTH_WEIGHT: &str = "low_birth_weight";
    /// Maternal age in years
    pub const MATERNAL_AGE: &str = "maternal_age";
    /// Maternal schooling in years
    pub const MATERNAL_SCHOOLING: &str = "maternal_schooling";
    /// Total number of pregnancies
    pub const TOTAL_PREGNANCIES: &str = "total_pregnancies";
    /// Number of prior stillbirths
    pub const PRIOR_STILLBIRTHS: &str = "prior_stillbirths";
    /// Number of prior abortions
    pub const PRIOR_ABORTIONS: &str = "prior_abortions";
    /// Number of living children
    pub const LIVING_CHILDREN: &str = "living_children";
    /// Month prenatal care began
    pub const PRENATAL_START_MONTH: &str = "prenatal_start_month";
    /// Cigarettes smoked per day
    pub const CIGARETTES_PER_DAY: &str = "cigarettes_per_day";
    /// Alcohol doses per week
    pub const ALCOHOL_DOSES_PER_WEEK: &str = "alcohol_doses_per_week";
    /// Smoking habit flag
    pub const SMOKING_FLAG: &str = "smoking_flag";
    /// Drinking habit flag
    pub const DRINKING_FLAG: &str = "drinking_flag";
    /// Marital status code
    pub const MARITAL_STATUS: &str = "marital_status";
    /// Last-birth outcome code
    pub const LAST_BIRTH_OUTCOME: &str = "last_birth_outcome";

    /// Anemia flag
    pub const ANEMIA: &str = "anemia";
    /// Cardiac disease flag
    pub const CARDIAC_DISEASE: &str = "cardiac_disease";
    /// Pulmonary disease flag
    pub const PULMONARY_DISEASE: &str = "pulmonary_disease";
    /// Diabetes flag
    pub const DIABETES: &str = "diabetes";
    /// Herpes flag
    pub const HERPES: &str = "herpes";
    /// Excess amniotic fluid flag
    pub const POLYHYDRAMNIOS: &str = "polyhydramnios";
    /// Hemoglobinopathy flag
    pub const HEMOGLOBINOPATHY: &str = "hemoglobinopathy";
    /// Chronic hypertension flag
    pub const CHRONIC_HYPERTENSION: &str = "chronic_hypertension";
    /// Pregnancy-induced hypertension flag
    pub const PREGNANCY_HYPERTENSION: &str = "pregnancy_hypertension";
    /// Eclampsia flag
    pub const ECLAMPSIA: &str = "eclampsia";
    /// Incompetent cervix flag
    pub const INCOMPETENT_CERVIX: &str = "incompetent_cervix";
    /// Risk-associated medication flag
    pub const RISK_MEDICATION: &str = "risk_medication";
    /// Prior preterm birth flag
    pub const PRIOR_PRETERM_BIRTH: &str = "prior_preterm_birth";
    /// Renal disease flag
    pub const RENAL_DISEASE: &str = "renal_disease";
    /// Rh sensitization flag
    pub const RH_SENSITIZATION: &str = "rh_sensitization";
    /// Uterine bleeding flag
    pub const UTERINE_BLEEDING: &str = "uterine_bleeding";
    /// Ultrasound performed flag
    pub const ULTRASOUND: &str = "ultrasound";
    /// Amniocentesis performed flag
    pub const AMNIOCENTESIS: &str = "amniocentesis";

    /// Living-children group column of the modeling table
    pub const CHILDREN_GROUP: &str = "living_children_group";
    /// Organic-comorbidity tier column of the modeling table
    pub const ORGANIC_TIER: &str = "organic_risk_tier";
    /// Gestational-comorbidity tier column of the modeling table
    pub const GESTATIONAL_TIER: &str = "gestational_risk_tier";
    /// Behavioral-risk tier column of the modeling table
    pub const BEHAVIORAL_TIER: &str = "behavioral_risk_tier";
    /// Social-vulnerability tier column of the modeling table
    pub const SOCIAL_TIER: &str = "social_risk_tier";
}

/// Columns dropped at load time instead of being imputed
pub const DROPPED_COLUMNS: [&str; 4] = [
    "paternal_age",
    "paternal_schooling",
    "years_since_fetal_death",
    "years_since_live_birth",
];

/// The 18 clinical flag columns, in schema order
pub const FLAG_COLUMNS: [&str; 18] = [
    fields::ANEMIA,
    fields::CARDIAC_DISEASE,
    fields::PULMONARY_DISEASE,
    fields::DIABETES,
    fields::HERPES,
    fields::POLYHYDRAMNIOS,
    fields::HEMOGLOBINOPATHY,
    fields::CHRONIC_HYPERTENSION,
    fields::PREGNANCY_HYPERTENSION,
    fields::ECLAMPSIA,
    fields::INCOMPETENT_CERVIX,
    fields::RISK_MEDICATION,
    fields::PRIOR_PRETERM_BIRTH,
    fields::RENAL_DISEASE,
    fields::RH_SENSITIZATION,
    fields::UTERINE_BLEEDING,
    fields::ULTRASOUND,
    fields::AMNIOCENTESIS,
];

/// Get the Arrow schema for the retained input columns
///
/// This is the 32-column projection actually read from the extract; the
/// dropped columns never leave the file.
#[must_use]
pub fn input_schema() -> Arc<Schema> {
    let mut schema_fields = vec![
        Field::new(fields::LOW_BIRTH_WEIGHT, DataType::Int32, false),
        Field::new(fields::MATERNAL_AGE, DataType::Float64, true),
        Field::new(fields::MATERNAL_SCHOOLING, DataType::Float64, true),
        Field::new(fields::TOTAL_PREGNANCIES, DataType::Int32, true),
        Field::new(fields::PRIOR_STILLBIRTHS, DataType::Int32, true),
        Field::new(fields::PRIOR_ABORTIONS, DataType::Int32, true),
        Field::new(fields::LIVING_CHILDREN, DataType::Int32, true),
        Field::new(fields::PRENATAL_START_MONTH, DataType::Int32, true),
        Field::new(fields::CIGARETTES_PER_DAY, DataType::Float64, true),
        Field::new(fields::ALCOHOL_DOSES_PER_WEEK, DataType::Float64, true),
        Field::new(fields::SMOKING_FLAG, DataType::Int32, true),
        Field::new(fields::DRINKING_FLAG, DataType::Int32, true),
        Field::new(fields::MARITAL_STATUS, DataType::Int32, true),
        Field::new(fields::LAST_BIRTH_OUTCOME, DataType::Int32, true),
    ];
    for flag in FLAG_COLUMNS {
        schema_fields.push(Field::new(flag, DataType::Int32, true));
    }
    Arc::new(Schema::new(schema_fields))
}

/// Get the Arrow schema for the modeling table
///
/// Target label plus the fixed predictor set; categorical columns are stored
/// as their stable string labels.
#[must_use]
pub fn modeling_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(fields::LOW_BIRTH_WEIGHT, DataType::Int32, false),
        Field::new(fields::MATERNAL_AGE, DataType::Float64, false),
        Field::new(fields::PRIOR_ABORTIONS, DataType::Int32, false),
        Field::new(fields::CHILDREN_GROUP, DataType::Utf8, false),
        Field::new(fields::ORGANIC_TIER, DataType::Utf8, false),
        Field::new(fields::GESTATIONAL_TIER, DataType::Utf8, false),
        Field::new(fields::BEHAVIORAL_TIER, DataType::Utf8, false),
        Field::new(fields::SOCIAL_TIER, DataType::Utf8, false),
    ]))
}

/// Validate that every retained input column exists in a file schema
///
/// Logs all missing columns before failing so a malformed extract surfaces
/// every problem at once.
///
/// # Errors
/// Returns an invalid-field error naming the first missing column.
pub fn validate_input_schema(file_schema: &Schema) -> Result<()> {
    let expected = input_schema();
    let missing: Vec<&str> = expected
        .fields()
        .iter()
        .filter(|f| file_schema.field_with_name(f.name()).is_err())
        .map(|f| f.name().as_str())
        .collect();

    if let Some(first) = missing.first() {
        for field in &missing {
            log::error!("Input file is missing required column '{field}'");
        }
        return Err(PipelineError::invalid_field(first));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_schema_has_32_retained_columns() {
        assert_eq!(input_schema().fields().len(), 32);
        // together with the dropped columns this covers the 36-column extract
        assert_eq!(input_schema().fields().len() + DROPPED_COLUMNS.len(), 36);
    }

    #[test]
    fn test_modeling_schema_is_target_plus_predictors() {
        let schema = modeling_schema();
        assert_eq!(schema.fields().len(), 8);
        assert_eq!(schema.field(0).name(), fields::LOW_BIRTH_WEIGHT);
    }

    #[test]
    fn test_validate_reports_missing_column() {
        use arrow::datatypes::{DataType, Field, Schema};
        let truncated = Schema::new(vec![Field::new(
            fields::LOW_BIRTH_WEIGHT,
            DataType::Int32,
            false,
        )]);
        let err = validate_input_schema(&truncated).unwrap_err();
        assert!(matches!(
            err,
            crate::error::PipelineError::InvalidField { .. }
        ));
    }
}
