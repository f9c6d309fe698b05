//! Tests for the batch <-> record adapters

mod common;

use arrow::array::{Int32Array, StringArray};
use common::{input_batch, resolved_record};
use lbw_pipeline::adapters::{modeling_batch, records_from_batch};
use lbw_pipeline::models::types::{ChildrenGroup, RiskTier};
use lbw_pipeline::models::ModelingRecord;
use lbw_pipeline::schema::modeling_schema;
use lbw_pipeline::PipelineError;

#[test]
fn batch_round_trip_preserves_values_and_nulls() {
    let mut with_gaps = resolved_record();
    with_gaps.maternal_age = None;
    with_gaps.smoking_flag = None;
    with_gaps.clinical.eclampsia = Some(1);

    let batch = input_batch(&[resolved_record(), with_gaps]);
    let records = records_from_batch(&batch, 0).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].maternal_age, Some(27.0));
    assert_eq!(records[1].maternal_age, None);
    assert_eq!(records[1].smoking_flag, None);
    assert_eq!(records[1].clinical.eclampsia, Some(1));
    // labels and scores are untouched by the adapter
    assert!(!records[0].is_binned());
    assert!(!records[0].is_scored());
}

#[test]
fn unexpected_target_code_is_unmapped() {
    let batch = input_batch(&[resolved_record()]);
    // rebuild the batch with an out-of-range target code
    let mut columns = batch.columns().to_vec();
    columns[0] = std::sync::Arc::new(Int32Array::from(vec![Some(2)]));
    let batch =
        arrow::record_batch::RecordBatch::try_new(batch.schema(), columns).unwrap();

    let err = records_from_batch(&batch, 10).unwrap_err();
    match err {
        PipelineError::UnmappedCategory { field, value, row } => {
            assert_eq!(field, "low_birth_weight");
            assert_eq!(value, 2);
            assert_eq!(row, 10);
        }
        other => panic!("expected UnmappedCategory, got {other:?}"),
    }
}

#[test]
fn modeling_batch_follows_the_output_schema() {
    let record = ModelingRecord {
        low_birth_weight: true,
        maternal_age: 33.5,
        prior_abortions: 2,
        children_group: ChildrenGroup::ThreePlus,
        organic_tier: RiskTier::High,
        gestational_tier: RiskTier::Low,
        behavioral_tier: RiskTier::Moderate,
        social_tier: RiskTier::High,
    };

    let batch = modeling_batch(&[record]).unwrap();
    assert_eq!(batch.schema(), modeling_schema());
    assert_eq!(batch.num_rows(), 1);

    let children = batch
        .column(3)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(children.value(0), "three-plus");
    let behavioral = batch
        .column(6)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(behavioral.value(0), "moderate");
}
