//! Dataset-wide aggregate statistics for imputation
//!
//! The resolver's mean/median rules depend on aggregates of the
//! pre-imputation columns. They are computed exactly once per run, before
//! any row is imputed, and carried in an immutable statistics object passed
//! by reference into the per-record resolver. This establishes the
//! two-phase barrier inside the resolve stage: an aggregate pass over the
//! whole dataset, then the per-record pass.

use crate::models::BirthRecord;
use crate::utils::{mean, median_f64, median_i32};

/// Immutable column aggregates computed from the pre-imputation dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImputationStatistics {
    /// Mean maternal age over records where it is present
    pub maternal_age_mean: f64,
    /// Mean maternal schooling over records where it is present
    pub maternal_schooling_mean: f64,
    /// Median total-pregnancy count over records where it is present
    pub total_pregnancies_median: i32,
    /// Median cigarettes per day among records flagged as smokers
    pub cigarettes_median_smokers: f64,
    /// Median alcohol doses per week among records flagged as drinkers
    pub alcohol_median_drinkers: f64,
    /// Median of the smoking flag over records where it is present
    pub smoking_flag_median: i32,
    /// Median of the drinking flag over records where it is present
    pub drinking_flag_median: i32,
}

impl ImputationStatistics {
    /// Compute the aggregates from the pre-imputation dataset
    ///
    /// Missing values are excluded from every aggregate. A column with no
    /// observed values at all falls back to zero, with a warning; this can
    /// only happen on degenerate extracts (e.g. no flagged smokers).
    #[must_use]
    pub fn from_records(records: &[BirthRecord]) -> Self {
        let ages: Vec<f64> = records.iter().filter_map(|r| r.maternal_age).collect();
        let schooling: Vec<f64> = records.iter().filter_map(|r| r.maternal_schooling).collect();
        let pregnancies: Vec<i32> = records.iter().filter_map(|r| r.total_pregnancies).collect();
        let smoker_cigarettes: Vec<f64> = records
            .iter()
            .filter(|r| r.smoking_flag == Some(1))
            .filter_map(|r| r.cigarettes_per_day)
            .collect();
        let drinker_doses: Vec<f64> = records
            .iter()
            .filter(|r| r.drinking_flag == Some(1))
            .filter_map(|r| r.alcohol_doses_per_week)
            .collect();
        let smoking_flags: Vec<i32> = records.iter().filter_map(|r| r.smoking_flag).collect();
        let drinking_flags: Vec<i32> = records.iter().filter_map(|r| r.drinking_flag).collect();

        Self {
            maternal_age_mean: observed(mean(&ages), "maternal_age mean"),
            maternal_schooling_mean: observed(mean(&schooling), "maternal_schooling mean"),
            total_pregnancies_median: observed_i32(
                median_i32(&pregnancies),
                "total_pregnancies median",
            ),
            cigarettes_median_smokers: observed(
                median_f64(&smoker_cigarettes),
                "cigarettes_per_day median among smokers",
            ),
            alcohol_median_drinkers: observed(
                median_f64(&drinker_doses),
                "alcohol_doses_per_week median among drinkers",
            ),
            smoking_flag_median: observed_i32(median_i32(&smoking_flags), "smoking_flag median"),
            drinking_flag_median: observed_i32(median_i32(&drinking_flags), "drinking_flag median"),
        }
    }
}

fn observed(value: Option<f64>, what: &str) -> f64 {
    value.unwrap_or_else(|| {
        log::warn!("No observed values for {what}; falling back to 0");
        0.0
    })
}

fn observed_i32(value: Option<i32>, what: &str) -> i32 {
    value.unwrap_or_else(|| {
        log::warn!("No observed values for {what}; falling back to 0");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_age(age: Option<f64>) -> BirthRecord {
        BirthRecord {
            maternal_age: age,
            ..BirthRecord::default()
        }
    }

    #[test]
    fn test_aggregates_exclude_missing_values() {
        let records = vec![
            record_with_age(Some(20.0)),
            record_with_age(None),
            record_with_age(Some(30.0)),
        ];
        let stats = ImputationStatistics::from_records(&records);
        assert_eq!(stats.maternal_age_mean, 25.0);
    }

    #[test]
    fn test_habit_medians_restricted_to_flagged_records() {
        let mut smoker = BirthRecord::default();
        smoker.smoking_flag = Some(1);
        smoker.cigarettes_per_day = Some(10.0);
        let mut heavy_smoker = BirthRecord::default();
        heavy_smoker.smoking_flag = Some(1);
        heavy_smoker.cigarettes_per_day = Some(30.0);
        let mut non_smoker = BirthRecord::default();
        non_smoker.smoking_flag = Some(0);
        non_smoker.cigarettes_per_day = Some(99.0);

        let stats = ImputationStatistics::from_records(&[smoker, heavy_smoker, non_smoker]);
        // the non-smoker's value must not enter the smokers' median
        assert_eq!(stats.cigarettes_median_smokers, 20.0);
    }

    #[test]
    fn test_empty_column_falls_back_to_zero() {
        let stats = ImputationStatistics::from_records(&[BirthRecord::default()]);
        assert_eq!(stats.maternal_age_mean, 0.0);
        assert_eq!(stats.total_pregnancies_median, 0);
    }
}
