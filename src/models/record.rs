//! Consolidated record model for one gestation case
//!
//! A [`BirthRecord`] is populated in stages: the adapter fills the raw
//! fields straight from the registry extract (missing values stay `None`),
//! the resolver eliminates the `None`s, the binner fills the categorical
//! labels and the scorer fills the composite scores and risk tiers. Each
//! field is written by exactly one stage and is immutable afterwards.

use crate::error::{PipelineError, Result};
use crate::models::types::{
    AbortionGroup, ChildrenGroup, DrinkingLevel, LastBirthOutcome, MaritalStatus, ParityGroup,
    PrenatalStartGroup, RiskTier, SchoolingLevel, SmokingLevel,
};
use crate::schema::fields;
use serde::Serialize;

/// Presence/absence flags for the clinical conditions and exposures carried
/// by the registry extract (0 = absent, 1 = present)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClinicalFlags {
    /// Anemia during pregnancy
    pub anemia: Option<i32>,
    /// Cardiac disease
    pub cardiac_disease: Option<i32>,
    /// Pulmonary disease
    pub pulmonary_disease: Option<i32>,
    /// Diabetes (any form)
    pub diabetes: Option<i32>,
    /// Genital herpes
    pub herpes: Option<i32>,
    /// Excess amniotic fluid
    pub polyhydramnios: Option<i32>,
    /// Hemoglobinopathy
    pub hemoglobinopathy: Option<i32>,
    /// Hypertension predating the pregnancy
    pub chronic_hypertension: Option<i32>,
    /// Pregnancy-induced hypertension
    pub pregnancy_hypertension: Option<i32>,
    /// Eclampsia
    pub eclampsia: Option<i32>,
    /// Incompetent cervix
    pub incompetent_cervix: Option<i32>,
    /// Use of medication associated with gestational risk
    pub risk_medication: Option<i32>,
    /// A previous preterm birth
    pub prior_preterm_birth: Option<i32>,
    /// Renal disease
    pub renal_disease: Option<i32>,
    /// Rh sensitization
    pub rh_sensitization: Option<i32>,
    /// Uterine bleeding
    pub uterine_bleeding: Option<i32>,
    /// Whether an ultrasound examination was performed
    pub ultrasound: Option<i32>,
    /// Whether an amniocentesis was performed
    pub amniocentesis: Option<i32>,
}

impl ClinicalFlags {
    /// Field name/value pairs, in input-schema order
    #[must_use]
    pub fn named(&self) -> [(&'static str, Option<i32>); 18] {
        [
            (fields::ANEMIA, self.anemia),
            (fields::CARDIAC_DISEASE, self.cardiac_disease),
            (fields::PULMONARY_DISEASE, self.pulmonary_disease),
            (fields::DIABETES, self.diabetes),
            (fields::HERPES, self.herpes),
            (fields::POLYHYDRAMNIOS, self.polyhydramnios),
            (fields::HEMOGLOBINOPATHY, self.hemoglobinopathy),
            (fields::CHRONIC_HYPERTENSION, self.chronic_hypertension),
            (fields::PREGNANCY_HYPERTENSION, self.pregnancy_hypertension),
            (fields::ECLAMPSIA, self.eclampsia),
            (fields::INCOMPETENT_CERVIX, self.incompetent_cervix),
            (fields::RISK_MEDICATION, self.risk_medication),
            (fields::PRIOR_PRETERM_BIRTH, self.prior_preterm_birth),
            (fields::RENAL_DISEASE, self.renal_disease),
            (fields::RH_SENSITIZATION, self.rh_sensitization),
            (fields::UTERINE_BLEEDING, self.uterine_bleeding),
            (fields::ULTRASOUND, self.ultrasound),
            (fields::AMNIOCENTESIS, self.amniocentesis),
        ]
    }
}

/// One gestation case
///
/// Raw fields are `Option` until the resolver has run; the categorical
/// labels are `Option` until the binner has run; the scores and tiers are
/// `Option` until the scorer has run. Stages check these preconditions and
/// fail with a missing-dependency error rather than guessing.
#[derive(Debug, Clone, Default)]
pub struct BirthRecord {
    /// Target label: low birth weight vs normal (never missing)
    pub low_birth_weight: bool,

    // Raw fields, straight from the registry extract
    /// Maternal age in years
    pub maternal_age: Option<f64>,
    /// Maternal schooling in years
    pub maternal_schooling: Option<f64>,
    /// Total number of pregnancies, including this one
    pub total_pregnancies: Option<i32>,
    /// Number of prior stillbirths
    pub prior_stillbirths: Option<i32>,
    /// Number of prior abortions
    pub prior_abortions: Option<i32>,
    /// Number of living children
    pub living_children: Option<i32>,
    /// Month of pregnancy in which prenatal care began
    pub prenatal_start_month: Option<i32>,
    /// Cigarettes smoked per day
    pub cigarettes_per_day: Option<f64>,
    /// Alcohol doses per week
    pub alcohol_doses_per_week: Option<f64>,
    /// Smoking habit flag (0/1)
    pub smoking_flag: Option<i32>,
    /// Drinking habit flag (0/1)
    pub drinking_flag: Option<i32>,
    /// Marital status code (1 married, 2 unmarried)
    pub marital_status: Option<i32>,
    /// Outcome code of the previous birth (1 live, 2 fetal death, 9 n/a)
    pub last_birth_outcome: Option<i32>,
    /// Clinical condition/exposure flags
    pub clinical: ClinicalFlags,

    // Labels populated by the binner
    /// Binned maternal schooling
    pub schooling_level: Option<SchoolingLevel>,
    /// Binned total pregnancies
    pub parity_group: Option<ParityGroup>,
    /// Binned prenatal-care start month
    pub prenatal_start: Option<PrenatalStartGroup>,
    /// Binned prior abortions
    pub abortion_group: Option<AbortionGroup>,
    /// Decoded last-birth outcome
    pub outcome_group: Option<LastBirthOutcome>,
    /// Decoded marital status
    pub marital: Option<MaritalStatus>,
    /// Binned living children
    pub children_group: Option<ChildrenGroup>,
    /// Binned smoking intensity
    pub smoking_level: Option<SmokingLevel>,
    /// Binned drinking intensity
    pub drinking_level: Option<DrinkingLevel>,

    // Composite scores and tiers populated by the scorer
    /// Organic-comorbidity composite score
    pub organic_score: Option<u32>,
    /// Organic-comorbidity risk tier
    pub organic_tier: Option<RiskTier>,
    /// Gestational-comorbidity composite score
    pub gestational_score: Option<u32>,
    /// Gestational-comorbidity risk tier
    pub gestational_tier: Option<RiskTier>,
    /// Behavioral-risk composite score
    pub behavioral_score: Option<u32>,
    /// Behavioral-risk tier
    pub behavioral_tier: Option<RiskTier>,
    /// Prenatal-access/social-vulnerability composite score
    pub social_score: Option<u32>,
    /// Social-vulnerability risk tier
    pub social_tier: Option<RiskTier>,
}

impl BirthRecord {
    /// Create an empty record for the given target label
    #[must_use]
    pub fn new(low_birth_weight: bool) -> Self {
        Self {
            low_birth_weight,
            ..Self::default()
        }
    }

    /// Verify the post-resolver invariant: no retained raw field is missing
    ///
    /// # Errors
    /// Returns a missing-dependency error naming the first unset field.
    pub fn ensure_resolved(&self, row: usize) -> Result<()> {
        let scalar = [
            (fields::MATERNAL_AGE, self.maternal_age.is_some()),
            (fields::MATERNAL_SCHOOLING, self.maternal_schooling.is_some()),
            (fields::TOTAL_PREGNANCIES, self.total_pregnancies.is_some()),
            (fields::PRIOR_STILLBIRTHS, self.prior_stillbirths.is_some()),
            (fields::PRIOR_ABORTIONS, self.prior_abortions.is_some()),
            (fields::LIVING_CHILDREN, self.living_children.is_some()),
            (
                fields::PRENATAL_START_MONTH,
                self.prenatal_start_month.is_some(),
            ),
            (fields::CIGARETTES_PER_DAY, self.cigarettes_per_day.is_some()),
            (
                fields::ALCOHOL_DOSES_PER_WEEK,
                self.alcohol_doses_per_week.is_some(),
            ),
            (fields::SMOKING_FLAG, self.smoking_flag.is_some()),
            (fields::DRINKING_FLAG, self.drinking_flag.is_some()),
            (fields::MARITAL_STATUS, self.marital_status.is_some()),
            (fields::LAST_BIRTH_OUTCOME, self.last_birth_outcome.is_some()),
        ];
        for (field, present) in scalar {
            if !present {
                return Err(PipelineError::missing_dependency(field, "resolve", row));
            }
        }
        for (field, value) in self.clinical.named() {
            if value.is_none() {
                return Err(PipelineError::missing_dependency(field, "resolve", row));
            }
        }
        Ok(())
    }

    /// Whether every categorical label has been populated by the binner
    #[must_use]
    pub const fn is_binned(&self) -> bool {
        self.schooling_level.is_some()
            && self.parity_group.is_some()
            && self.prenatal_start.is_some()
            && self.abortion_group.is_some()
            && self.outcome_group.is_some()
            && self.marital.is_some()
            && self.children_group.is_some()
            && self.smoking_level.is_some()
            && self.drinking_level.is_some()
    }

    /// Whether every composite score and tier has been populated
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.organic_tier.is_some()
            && self.gestational_tier.is_some()
            && self.behavioral_tier.is_some()
            && self.social_tier.is_some()
    }
}

/// The fixed modeling-ready projection consumed by the external model trainer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelingRecord {
    /// Target label
    pub low_birth_weight: bool,
    /// Maternal age in years
    pub maternal_age: f64,
    /// Prior-abortion count (raw)
    pub prior_abortions: i32,
    /// Living-children group
    pub children_group: ChildrenGroup,
    /// Organic-comorbidity risk tier
    pub organic_tier: RiskTier,
    /// Gestational-comorbidity risk tier
    pub gestational_tier: RiskTier,
    /// Behavioral-risk tier
    pub behavioral_tier: RiskTier,
    /// Social-vulnerability risk tier
    pub social_tier: RiskTier,
}
