//! Shared fixtures for integration tests
#![allow(dead_code)]

use arrow::array::{ArrayRef, Float64Array, Int32Array};
use arrow::record_batch::RecordBatch;
use lbw_pipeline::models::{BirthRecord, ClinicalFlags};
use lbw_pipeline::schema::input_schema;
use std::sync::Arc;

/// A record with every retained raw field populated and all clinical flags
/// clear (ultrasound performed)
#[must_use]
pub fn resolved_record() -> BirthRecord {
    let mut record = BirthRecord::new(false);
    record.maternal_age = Some(27.0);
    record.maternal_schooling = Some(8.0);
    record.total_pregnancies = Some(2);
    record.prior_stillbirths = Some(0);
    record.prior_abortions = Some(0);
    record.living_children = Some(1);
    record.prenatal_start_month = Some(2);
    record.cigarettes_per_day = Some(0.0);
    record.alcohol_doses_per_week = Some(0.0);
    record.smoking_flag = Some(0);
    record.drinking_flag = Some(0);
    record.marital_status = Some(1);
    record.last_birth_outcome = Some(1);
    record.clinical = ClinicalFlags {
        anemia: Some(0),
        cardiac_disease: Some(0),
        pulmonary_disease: Some(0),
        diabetes: Some(0),
        herpes: Some(0),
        polyhydramnios: Some(0),
        hemoglobinopathy: Some(0),
        chronic_hypertension: Some(0),
        pregnancy_hypertension: Some(0),
        eclampsia: Some(0),
        incompetent_cervix: Some(0),
        risk_medication: Some(0),
        prior_preterm_birth: Some(0),
        renal_disease: Some(0),
        rh_sensitization: Some(0),
        uterine_bleeding: Some(0),
        ultrasound: Some(1),
        amniocentesis: Some(0),
    };
    record
}

/// Build a record batch of the retained input schema from raw records
///
/// Missing values in the records become nulls in the batch, which is how the
/// extract itself carries them.
#[must_use]
pub fn input_batch(records: &[BirthRecord]) -> RecordBatch {
    let int32 = |values: Vec<Option<i32>>| -> ArrayRef { Arc::new(Int32Array::from(values)) };
    let float64 = |values: Vec<Option<f64>>| -> ArrayRef { Arc::new(Float64Array::from(values)) };

    let columns: Vec<ArrayRef> = vec![
        int32(
            records
                .iter()
                .map(|r| Some(i32::from(r.low_birth_weight)))
                .collect(),
        ),
        float64(records.iter().map(|r| r.maternal_age).collect()),
        float64(records.iter().map(|r| r.maternal_schooling).collect()),
        int32(records.iter().map(|r| r.total_pregnancies).collect()),
        int32(records.iter().map(|r| r.prior_stillbirths).collect()),
        int32(records.iter().map(|r| r.prior_abortions).collect()),
        int32(records.iter().map(|r| r.living_children).collect()),
        int32(records.iter().map(|r| r.prenatal_start_month).collect()),
        float64(records.iter().map(|r| r.cigarettes_per_day).collect()),
        float64(records.iter().map(|r| r.alcohol_doses_per_week).collect()),
        int32(records.iter().map(|r| r.smoking_flag).collect()),
        int32(records.iter().map(|r| r.drinking_flag).collect()),
        int32(records.iter().map(|r| r.marital_status).collect()),
        int32(records.iter().map(|r| r.last_birth_outcome).collect()),
        int32(records.iter().map(|r| r.clinical.anemia).collect()),
        int32(records.iter().map(|r| r.clinical.cardiac_disease).collect()),
        int32(records.iter().map(|r| r.clinical.pulmonary_disease).collect()),
        int32(records.iter().map(|r| r.clinical.diabetes).collect()),
        int32(records.iter().map(|r| r.clinical.herpes).collect()),
        int32(records.iter().map(|r| r.clinical.polyhydramnios).collect()),
        int32(records.iter().map(|r| r.clinical.hemoglobinopathy).collect()),
        int32(
            records
                .iter()
                .map(|r| r.clinical.chronic_hypertension)
                .collect(),
        ),
        int32(
            records
                .iter()
                .map(|r| r.clinical.pregnancy_hypertension)
                .collect(),
        ),
        int32(records.iter().map(|r| r.clinical.eclampsia).collect()),
        int32(
            records
                .iter()
                .map(|r| r.clinical.incompetent_cervix)
                .collect(),
        ),
        int32(records.iter().map(|r| r.clinical.risk_medication).collect()),
        int32(
            records
                .iter()
                .map(|r| r.clinical.prior_preterm_birth)
                .collect(),
        ),
        int32(records.iter().map(|r| r.clinical.renal_disease).collect()),
        int32(records.iter().map(|r| r.clinical.rh_sensitization).collect()),
        int32(records.iter().map(|r| r.clinical.uterine_bleeding).collect()),
        int32(records.iter().map(|r| r.clinical.ultrasound).collect()),
        int32(records.iter().map(|r| r.clinical.amniocentesis).collect()),
    ];

    RecordBatch::try_new(input_schema(), columns).expect("fixture batch matches the input schema")
}
