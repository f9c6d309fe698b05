//! Adapters between Arrow record batches and the typed record model
//!
//! The input adapter maps a batch of the registry extract to `BirthRecord`s,
//! preserving nulls as `None` for the resolver to handle. The output adapter
//! maps the finalized `ModelingRecord`s back to a batch of the modeling
//! schema.

use arrow::array::{Array, Float64Array, Int32Array, StringArray};
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::error::{PipelineError, Result};
use crate::models::{BirthRecord, ClinicalFlags, ModelingRecord};
use crate::schema::{fields, modeling_schema};

/// Column name to index lookup for a record batch
fn column_indices(batch: &RecordBatch) -> FxHashMap<String, usize> {
    batch
        .schema()
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| (field.name().clone(), idx))
        .collect()
}

/// Get a typed `Float64` column from a batch
fn float_column<'a>(
    batch: &'a RecordBatch,
    indices: &FxHashMap<String, usize>,
    name: &str,
) -> Result<&'a Float64Array> {
    let idx = *indices
        .get(name)
        .ok_or_else(|| PipelineError::invalid_field(name))?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| {
            PipelineError::Schema(format!("column '{name}' is not Float64 as expected"))
        })
}

/// Get a typed `Int32` column from a batch
fn int_column<'a>(
    batch: &'a RecordBatch,
    indices: &FxHashMap<String, usize>,
    name: &str,
) -> Result<&'a Int32Array> {
    let idx = *indices
        .get(name)
        .ok_or_else(|| PipelineError::invalid_field(name))?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<Int32Array>()
        .ok_or_else(|| PipelineError::Schema(format!("column '{name}' is not Int32 as expected")))
}

/// Nullable value at a row of a `Float64` column
fn float_value(array: &Float64Array, row: usize) -> Option<f64> {
    if array.is_null(row) {
        None
    } else {
        Some(array.value(row))
    }
}

/// Nullable value at a row of an `Int32` column
fn int_value(array: &Int32Array, row: usize) -> Option<i32> {
    if array.is_null(row) {
        None
    } else {
        Some(array.value(row))
    }
}

/// Convert a record batch of the retained input schema to typed records
///
/// # Arguments
/// * `batch` - The record batch to convert
/// * `row_offset` - Global index of the batch's first row, used in diagnostics
///
/// # Errors
/// Fails if a required column is absent or mistyped, or if the target label
/// is null or carries a code other than 0/1.
pub fn records_from_batch(batch: &RecordBatch, row_offset: usize) -> Result<Vec<BirthRecord>> {
    let indices = column_indices(batch);

    let target = int_column(batch, &indices, fields::LOW_BIRTH_WEIGHT)?;
    let maternal_age = float_column(batch, &indices, fields::MATERNAL_AGE)?;
    let maternal_schooling = float_column(batch, &indices, fields::MATERNAL_SCHOOLING)?;
    let total_pregnancies = int_column(batch, &indices, fields::TOTAL_PREGNANCIES)?;
    let prior_stillbirths = int_column(batch, &indices, fields::PRIOR_STILLBIRTHS)?;
    let prior_abortions = int_column(batch, &indices, fields::PRIOR_ABORTIONS)?;
    let living_children = int_column(batch, &indices, fields::LIVING_CHILDREN)?;
    let prenatal_start = int_column(batch, &indices, fields::PRENATAL_START_MONTH)?;
    let cigarettes = float_column(batch, &indices, fields::CIGARETTES_PER_DAY)?;
    let alcohol = float_column(batch, &indices, fields::ALCOHOL_DOSES_PER_WEEK)?;
    let smoking_flag = int_column(batch, &indices, fields::SMOKING_FLAG)?;
    let drinking_flag = int_column(batch, &indices, fields::DRINKING_FLAG)?;
    let marital_status = int_column(batch, &indices, fields::MARITAL_STATUS)?;
    let last_birth_outcome = int_column(batch, &indices, fields::LAST_BIRTH_OUTCOME)?;

    let anemia = int_column(batch, &indices, fields::ANEMIA)?;
    let cardiac = int_column(batch, &indices, fields::CARDIAC_DISEASE)?;
    let pulmonary = int_column(batch, &indices, fields::PULMONARY_DISEASE)?;
    let diabetes = int_column(batch, &indices, fields::DIABETES)?;
    let herpes = int_column(batch, &indices, fields::HERPES)?;
    let polyhydramnios = int_column(batch, &indices, fields::POLYHYDRAMNIOS)?;
    let hemoglobinopathy = int_column(batch, &indices, fields::HEMOGLOBINOPATHY)?;
    let chronic_htn = int_column(batch, &indices, fields::CHRONIC_HYPERTENSION)?;
    let pregnancy_htn = int_column(batch, &indices, fields::PREGNANCY_HYPERTENSION)?;
    let eclampsia = int_column(batch, &indices, fields::ECLAMPSIA)?;
    let cervix = int_column(batch, &indices, fields::INCOMPETENT_CERVIX)?;
    let medication = int_column(batch, &indices, fields::RISK_MEDICATION)?;
    let preterm = int_column(batch, &indices, fields::PRIOR_PRETERM_BIRTH)?;
    let renal = int_column(batch, &indices, fields::RENAL_DISEASE)?;
    let rh = int_column(batch, &indices, fields::RH_SENSITIZATION)?;
    let bleeding = int_column(batch, &indices, fields::UTERINE_BLEEDING)?;
    let ultrasound = int_column(batch, &indices, fields::ULTRASOUND)?;
    let amniocentesis = int_column(batch, &indices, fields::AMNIOCENTESIS)?;

    let mut records = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        let global_row = row_offset + row;
        let label = int_value(target, row).ok_or_else(|| {
            PipelineError::Schema(format!(
                "target '{}' is null at record {global_row}",
                fields::LOW_BIRTH_WEIGHT
            ))
        })?;
        let low_birth_weight = match label {
            0 => false,
            1 => true,
            code => {
                return Err(PipelineError::unmapped_category(
                    fields::LOW_BIRTH_WEIGHT,
                    i64::from(code),
                    global_row,
                ));
            }
        };

        records.push(BirthRecord {
            low_birth_weight,
            maternal_age: float_value(maternal_age, row),
            maternal_schooling: float_value(maternal_schooling, row),
            total_pregnancies: int_value(total_pregnancies, row),
            prior_stillbirths: int_value(prior_stillbirths, row),
            prior_abortions: int_value(prior_abortions, row),
            living_children: int_value(living_children, row),
            prenatal_start_month: int_value(prenatal_start, row),
            cigarettes_per_day: float_value(cigarettes, row),
            alcohol_doses_per_week: float_value(alcohol, row),
            smoking_flag: int_value(smoking_flag, row),
            drinking_flag: int_value(drinking_flag, row),
            marital_status: int_value(marital_status, row),
            last_birth_outcome: int_value(last_birth_outcome, row),
            clinical: ClinicalFlags {
                anemia: int_value(anemia, row),
                cardiac_disease: int_value(cardiac, row),
                pulmonary_disease: int_value(pulmonary, row),
                diabetes: int_value(diabetes, row),
                herpes: int_value(herpes, row),
                polyhydramnios: int_value(polyhydramnios, row),
                hemoglobinopathy: int_value(hemoglobinopathy, row),
                chronic_hypertension: int_value(chronic_htn, row),
                pregnancy_hypertension: int_value(pregnancy_htn, row),
                eclampsia: int_value(eclampsia, row),
                incompetent_cervix: int_value(cervix, row),
                risk_medication: int_value(medication, row),
                prior_preterm_birth: int_value(preterm, row),
                renal_disease: int_value(renal, row),
                rh_sensitization: int_value(rh, row),
                uterine_bleeding: int_value(bleeding, row),
                ultrasound: int_value(ultrasound, row),
                amniocentesis: int_value(amniocentesis, row),
            },
            ..BirthRecord::default()
        });
    }

    Ok(records)
}

/// Convert finalized modeling records to a record batch of the modeling schema
///
/// # Errors
/// Fails if the assembled columns do not match the modeling schema.
pub fn modeling_batch(records: &[ModelingRecord]) -> Result<RecordBatch> {
    let target: Int32Array = records
        .iter()
        .map(|r| Some(i32::from(r.low_birth_weight)))
        .collect();
    let maternal_age: Float64Array = records.iter().map(|r| Some(r.maternal_age)).collect();
    let prior_abortions: Int32Array = records.iter().map(|r| Some(r.prior_abortions)).collect();
    let children_group: StringArray = records
        .iter()
        .map(|r| Some(r.children_group.label()))
        .collect();
    let organic: StringArray = records.iter().map(|r| Some(r.organic_tier.label())).collect();
    let gestational: StringArray = records
        .iter()
        .map(|r| Some(r.gestational_tier.label()))
        .collect();
    let behavioral: StringArray = records
        .iter()
        .map(|r| Some(r.behavioral_tier.label()))
        .collect();
    let social: StringArray = records.iter().map(|r| Some(r.social_tier.label())).collect();

    RecordBatch::try_new(
        modeling_schema(),
        vec![
            Arc::new(target),
            Arc::new(maternal_age),
            Arc::new(prior_abortions),
            Arc::new(children_group),
            Arc::new(organic),
            Arc::new(gestational),
            Arc::new(behavioral),
            Arc::new(social),
        ],
    )
    .map_err(PipelineError::Arrow)
}
