//! Run summary and audit counts
//!
//! This module aggregates what a preparation run actually did: how many
//! values each imputation rule filled, how the composite tiers are
//! distributed, and the class balance of the target. The summary is logged
//! at the end of a run and can be written as JSON next to the output file.

use itertools::Itertools;
use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::models::types::RiskTier;
use crate::models::BirthRecord;

/// How many values each imputation rule filled
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ImputationCounts {
    /// Maternal ages filled with the column mean
    pub maternal_age: usize,
    /// Schooling years filled with the column mean
    pub maternal_schooling: usize,
    /// Pregnancy counts filled with the column median
    pub total_pregnancies: usize,
    /// Prenatal start months filled with zero
    pub prenatal_start_month: usize,
    /// Stillbirth counts filled with zero
    pub prior_stillbirths: usize,
    /// Abortion counts filled with zero
    pub prior_abortions: usize,
    /// Living-children counts filled from the last-birth outcome
    pub living_children: usize,
    /// Cigarette counts filled by the smoking rule
    pub cigarettes_per_day: usize,
    /// Alcohol doses filled by the drinking rule
    pub alcohol_doses_per_week: usize,
    /// Smoking flags filled by the habit rule
    pub smoking_flag: usize,
    /// Drinking flags filled by the habit rule
    pub drinking_flag: usize,
}

impl ImputationCounts {
    /// Count the missing values each rule is about to fill
    ///
    /// Computed from the pre-imputation records, so the counts double as an
    /// audit that no value was silently skipped: after the resolver runs,
    /// every counted slot must be populated.
    #[must_use]
    pub fn from_records(records: &[BirthRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.maternal_age += usize::from(record.maternal_age.is_none());
            counts.maternal_schooling += usize::from(record.maternal_schooling.is_none());
            counts.total_pregnancies += usize::from(record.total_pregnancies.is_none());
            counts.prenatal_start_month += usize::from(record.prenatal_start_month.is_none());
            counts.prior_stillbirths += usize::from(record.prior_stillbirths.is_none());
            counts.prior_abortions += usize::from(record.prior_abortions.is_none());
            counts.living_children += usize::from(record.living_children.is_none());
            counts.cigarettes_per_day += usize::from(record.cigarettes_per_day.is_none());
            counts.alcohol_doses_per_week += usize::from(record.alcohol_doses_per_week.is_none());
            counts.smoking_flag += usize::from(record.smoking_flag.is_none());
            counts.drinking_flag += usize::from(record.drinking_flag.is_none());
        }
        counts
    }

    /// Total number of filled values across all rules
    #[must_use]
    pub const fn total(&self) -> usize {
        self.maternal_age
            + self.maternal_schooling
            + self.total_pregnancies
            + self.prenatal_start_month
            + self.prior_stillbirths
            + self.prior_abortions
            + self.living_children
            + self.cigarettes_per_day
            + self.alcohol_doses_per_week
            + self.smoking_flag
            + self.drinking_flag
    }
}

/// Distribution of one composite tier over the dataset
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TierCounts {
    /// Records in the low tier
    pub low: usize,
    /// Records in the moderate tier
    pub moderate: usize,
    /// Records in the high tier
    pub high: usize,
}

impl TierCounts {
    fn from_tiers(tiers: impl Iterator<Item = Option<RiskTier>>) -> Self {
        let grouped = tiers.flatten().counts();
        Self {
            low: grouped.get(&RiskTier::Low).copied().unwrap_or(0),
            moderate: grouped.get(&RiskTier::Moderate).copied().unwrap_or(0),
            high: grouped.get(&RiskTier::High).copied().unwrap_or(0),
        }
    }
}

/// Aggregate description of a completed preparation run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Number of records processed
    pub records: usize,
    /// Number of low-birth-weight cases
    pub low_birth_weight_cases: usize,
    /// Values filled per imputation rule
    pub imputed: ImputationCounts,
    /// Organic-comorbidity tier distribution
    pub organic_tiers: TierCounts,
    /// Gestational-comorbidity tier distribution
    pub gestational_tiers: TierCounts,
    /// Behavioral-risk tier distribution
    pub behavioral_tiers: TierCounts,
    /// Social-vulnerability tier distribution
    pub social_tiers: TierCounts,
}

impl RunSummary {
    /// Build the summary from the scored records and the pre-computed
    /// imputation counts
    #[must_use]
    pub fn collect(records: &[BirthRecord], imputed: ImputationCounts) -> Self {
        Self {
            records: records.len(),
            low_birth_weight_cases: records.iter().filter(|r| r.low_birth_weight).count(),
            imputed,
            organic_tiers: TierCounts::from_tiers(records.iter().map(|r| r.organic_tier)),
            gestational_tiers: TierCounts::from_tiers(records.iter().map(|r| r.gestational_tier)),
            behavioral_tiers: TierCounts::from_tiers(records.iter().map(|r| r.behavioral_tier)),
            social_tiers: TierCounts::from_tiers(records.iter().map(|r| r.social_tier)),
        }
    }

    /// Generate a human-readable summary
    #[must_use]
    pub fn render(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Preparation Run Summary:\n");
        summary.push_str(&format!("  Records: {}\n", self.records));
        let share = if self.records > 0 {
            (self.low_birth_weight_cases as f64 / self.records as f64) * 100.0
        } else {
            0.0
        };
        summary.push_str(&format!(
            "  Low-Birth-Weight Cases: {} ({share:.1}%)\n",
            self.low_birth_weight_cases
        ));
        summary.push_str(&format!("  Imputed Values: {}\n", self.imputed.total()));

        summary.push_str("  Tier Distributions (low/moderate/high):\n");
        for (name, tiers) in [
            ("Organic Comorbidity", &self.organic_tiers),
            ("Gestational Comorbidity", &self.gestational_tiers),
            ("Behavioral Risk", &self.behavioral_tiers),
            ("Social Vulnerability", &self.social_tiers),
        ] {
            summary.push_str(&format!(
                "    {name}: {}/{}/{}\n",
                tiers.low, tiers.moderate, tiers.high
            ));
        }
        summary
    }

    /// Write the summary as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| crate::error::PipelineError::Schema(format!("summary JSON: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imputation_counts_track_missing_slots() {
        let mut one_missing = BirthRecord::default();
        one_missing.maternal_age = Some(25.0);
        let counts = ImputationCounts::from_records(&[BirthRecord::default(), one_missing]);
        assert_eq!(counts.maternal_age, 1);
        assert_eq!(counts.smoking_flag, 2);
    }

    #[test]
    fn test_summary_counts_target_balance_and_tiers() {
        let mut case = BirthRecord::new(true);
        case.organic_tier = Some(RiskTier::High);
        let mut control = BirthRecord::new(false);
        control.organic_tier = Some(RiskTier::Low);

        let summary = RunSummary::collect(&[case, control], ImputationCounts::default());
        assert_eq!(summary.records, 2);
        assert_eq!(summary.low_birth_weight_cases, 1);
        assert_eq!(summary.organic_tiers.low, 1);
        assert_eq!(summary.organic_tiers.high, 1);
        assert!(summary.render().contains("Records: 2"));
    }
}
