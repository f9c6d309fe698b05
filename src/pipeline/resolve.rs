//! Missing-Value Resolver
//!
//! Applies the fixed per-field imputation rules to one record. The
//! evaluation order is load-bearing: the habit rules read fields that may
//! themselves have been imputed earlier in the same pass, so cigarettes are
//! resolved before alcohol, alcohol before the drinking flag, and the
//! drinking flag before the smoking flag. Reordering these rules changes
//! the output.
//!
//! The four dropped columns never reach this stage; the reader's projection
//! excludes them.

use crate::models::BirthRecord;
use crate::pipeline::statistics::ImputationStatistics;

/// Resolve every missing value in a record using the fixed per-field rules
///
/// The statistics must have been computed from the full pre-imputation
/// dataset; they are never re-estimated during the pass.
#[must_use]
pub fn resolve_record(mut record: BirthRecord, stats: &ImputationStatistics) -> BirthRecord {
    // Independent rules first.
    if record.maternal_age.is_none() {
        record.maternal_age = Some(stats.maternal_age_mean);
    }
    if record.maternal_schooling.is_none() {
        record.maternal_schooling = Some(stats.maternal_schooling_mean);
    }
    if record.total_pregnancies.is_none() {
        record.total_pregnancies = Some(stats.total_pregnancies_median);
    }
    if record.prenatal_start_month.is_none() {
        record.prenatal_start_month = Some(0);
    }
    if record.prior_stillbirths.is_none() {
        record.prior_stillbirths = Some(0);
    }
    if record.prior_abortions.is_none() {
        record.prior_abortions = Some(0);
    }
    if record.living_children.is_none() {
        // One living child is assumed only when the previous birth was live.
        let assumed = if record.last_birth_outcome == Some(1) { 1 } else { 0 };
        record.living_children = Some(assumed);
    }

    // Habit rules, in dependency order.
    if record.cigarettes_per_day.is_none() {
        record.cigarettes_per_day = if record.smoking_flag == Some(0) {
            Some(0.0)
        } else {
            Some(stats.cigarettes_median_smokers)
        };
    }
    if record.alcohol_doses_per_week.is_none() {
        record.alcohol_doses_per_week = if record.drinking_flag == Some(0) {
            Some(0.0)
        } else {
            Some(stats.alcohol_median_drinkers)
        };
    }
    if record.drinking_flag.is_none() {
        // Reads the alcohol dose resolved just above.
        record.drinking_flag = if record.alcohol_doses_per_week == Some(0.0) {
            Some(0)
        } else {
            Some(stats.drinking_flag_median)
        };
    }
    if record.smoking_flag.is_none() {
        // Reads the cigarette count resolved earlier in this pass.
        record.smoking_flag = if record.cigarettes_per_day == Some(0.0) {
            Some(0)
        } else {
            Some(stats.smoking_flag_median)
        };
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ImputationStatistics {
        ImputationStatistics {
            maternal_age_mean: 26.5,
            maternal_schooling_mean: 8.2,
            total_pregnancies_median: 2,
            cigarettes_median_smokers: 10.0,
            alcohol_median_drinkers: 4.0,
            smoking_flag_median: 1,
            drinking_flag_median: 1,
        }
    }

    #[test]
    fn test_mean_and_median_rules() {
        let record = resolve_record(BirthRecord::default(), &stats());
        assert_eq!(record.maternal_age, Some(26.5));
        assert_eq!(record.maternal_schooling, Some(8.2));
        assert_eq!(record.total_pregnancies, Some(2));
        assert_eq!(record.prenatal_start_month, Some(0));
        assert_eq!(record.prior_stillbirths, Some(0));
        assert_eq!(record.prior_abortions, Some(0));
    }

    #[test]
    fn test_living_children_follows_last_birth_outcome() {
        let mut live = BirthRecord::default();
        live.last_birth_outcome = Some(1);
        assert_eq!(resolve_record(live, &stats()).living_children, Some(1));

        let mut no_prior = BirthRecord::default();
        no_prior.last_birth_outcome = Some(9);
        assert_eq!(resolve_record(no_prior, &stats()).living_children, Some(0));
    }

    #[test]
    fn test_cigarettes_zeroed_for_non_smokers_only() {
        let mut non_smoker = BirthRecord::default();
        non_smoker.smoking_flag = Some(0);
        assert_eq!(
            resolve_record(non_smoker, &stats()).cigarettes_per_day,
            Some(0.0)
        );

        let mut smoker = BirthRecord::default();
        smoker.smoking_flag = Some(1);
        assert_eq!(
            resolve_record(smoker, &stats()).cigarettes_per_day,
            Some(10.0)
        );
    }

    #[test]
    fn test_drinking_flag_reads_alcohol_imputed_in_same_pass() {
        // Alcohol and the drinking flag are both missing. The alcohol rule
        // runs first: drinking_flag is not 0, so alcohol gets the drinkers'
        // median (4.0), and the flag rule then sees a non-zero dose.
        let record = resolve_record(BirthRecord::default(), &stats());
        assert_eq!(record.alcohol_doses_per_week, Some(4.0));
        assert_eq!(record.drinking_flag, Some(1));
    }

    #[test]
    fn test_smoking_flag_zeroed_when_cigarettes_resolve_to_zero() {
        let mut record = BirthRecord::default();
        record.smoking_flag = None;
        record.cigarettes_per_day = Some(0.0);
        let resolved = resolve_record(record, &stats());
        assert_eq!(resolved.smoking_flag, Some(0));
    }

    #[test]
    fn test_present_values_are_untouched() {
        let mut record = BirthRecord::default();
        record.maternal_age = Some(41.0);
        record.total_pregnancies = Some(6);
        let resolved = resolve_record(record, &stats());
        assert_eq!(resolved.maternal_age, Some(41.0));
        assert_eq!(resolved.total_pregnancies, Some(6));
    }
}
