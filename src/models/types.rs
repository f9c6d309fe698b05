//! Common domain type definitions
//!
//! This module contains the ordinal category enums used across the record
//! model. Each enum owns its fixed cutpoints: the constructors are the single
//! place a raw value is mapped to a category, and they return `None` for
//! codes outside every defined bin so callers can raise an unmapped-category
//! error with the record index attached.
//!
//! Boundary values always belong to the lower-labeled bin (e.g. 9 years of
//! schooling is `Low`, 20 cigarettes a day is `Light`).

use serde::Serialize;
use std::fmt;

/// Maternal schooling level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SchoolingLevel {
    /// At most 9 years of schooling
    Low,
    /// 10 to 15 years of schooling
    Medium,
    /// More than 15 years of schooling
    High,
}

impl SchoolingLevel {
    /// Map years of schooling to a level
    ///
    /// Accepts fractional years because the column may carry a mean-imputed
    /// value.
    #[must_use]
    pub fn from_years(years: f64) -> Option<Self> {
        if years < 0.0 {
            None
        } else if years <= 9.0 {
            Some(Self::Low)
        } else if years <= 15.0 {
            Some(Self::Medium)
        } else {
            Some(Self::High)
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Pregnancy-count group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParityGroup {
    /// First pregnancy
    FirstPregnancy,
    /// Second or third pregnancy
    SecondToThird,
    /// Fourth or later pregnancy
    FourPlus,
}

impl ParityGroup {
    /// Map a total-pregnancy count to a group
    #[must_use]
    pub const fn from_count(count: i32) -> Option<Self> {
        match count {
            1 => Some(Self::FirstPregnancy),
            2..=3 => Some(Self::SecondToThird),
            c if c >= 4 => Some(Self::FourPlus),
            _ => None,
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstPregnancy => "first-pregnancy",
            Self::SecondToThird => "second-to-third",
            Self::FourPlus => "four-plus",
        }
    }
}

/// Month prenatal care began, grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrenatalStartGroup {
    /// Care began in the first trimester (month 3 or earlier)
    Early,
    /// Care began in month 4 or 5
    Medium,
    /// Care began after month 5
    Late,
}

impl PrenatalStartGroup {
    /// Map a start month to a group
    #[must_use]
    pub const fn from_month(month: i32) -> Option<Self> {
        match month {
            m if m < 0 => None,
            m if m <= 3 => Some(Self::Early),
            4..=5 => Some(Self::Medium),
            _ => Some(Self::Late),
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Medium => "medium",
            Self::Late => "late",
        }
    }
}

/// Prior-abortion count group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbortionGroup {
    /// No prior abortions
    None,
    /// One or two prior abortions
    OneToTwo,
    /// Three or more prior abortions
    ThreePlus,
}

impl AbortionGroup {
    /// Map a prior-abortion count to a group
    #[must_use]
    pub const fn from_count(count: i32) -> Option<Self> {
        match count {
            0 => Some(Self::None),
            1..=2 => Some(Self::OneToTwo),
            c if c >= 3 => Some(Self::ThreePlus),
            _ => None,
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OneToTwo => "one-to-two",
            Self::ThreePlus => "three-plus",
        }
    }
}

/// Outcome of the mother's previous birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LastBirthOutcome {
    /// Previous birth was a live birth (code 1)
    Live,
    /// Previous birth was a fetal death (code 2)
    FetalDeath,
    /// No previous birth (code 9)
    NotApplicable,
}

impl LastBirthOutcome {
    /// Map a registry code to an outcome
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Live),
            2 => Some(Self::FetalDeath),
            9 => Some(Self::NotApplicable),
            _ => None,
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::FetalDeath => "fetal-death",
            Self::NotApplicable => "not-applicable",
        }
    }
}

/// Marital status of the mother
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaritalStatus {
    /// Married (code 1)
    Married,
    /// Unmarried (code 2)
    Unmarried,
}

impl MaritalStatus {
    /// Map a registry code to a marital status
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Married),
            2 => Some(Self::Unmarried),
            _ => None,
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Unmarried => "unmarried",
        }
    }
}

/// Living-children count group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChildrenGroup {
    /// No living children
    Zero,
    /// One or two living children
    OneToTwo,
    /// Three or more living children
    ThreePlus,
}

impl ChildrenGroup {
    /// Map a living-children count to a group
    #[must_use]
    pub const fn from_count(count: i32) -> Option<Self> {
        match count {
            0 => Some(Self::Zero),
            1..=2 => Some(Self::OneToTwo),
            c if c >= 3 => Some(Self::ThreePlus),
            _ => None,
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::OneToTwo => "one-to-two",
            Self::ThreePlus => "three-plus",
        }
    }
}

/// Smoking intensity derived from cigarettes per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SmokingLevel {
    /// Zero cigarettes a day
    NonSmoker,
    /// Up to and including 20 cigarettes a day
    LightSmoker,
    /// More than 20 cigarettes a day
    HeavySmoker,
}

impl SmokingLevel {
    /// Map a cigarettes-per-day count to a level
    ///
    /// 20 a day is the boundary and bins as `LightSmoker`.
    #[must_use]
    pub fn from_cigarettes(per_day: f64) -> Option<Self> {
        if per_day < 0.0 {
            None
        } else if per_day == 0.0 {
            Some(Self::NonSmoker)
        } else if per_day <= 20.0 {
            Some(Self::LightSmoker)
        } else {
            Some(Self::HeavySmoker)
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NonSmoker => "non-smoker",
            Self::LightSmoker => "light-smoker",
            Self::HeavySmoker => "heavy-smoker",
        }
    }
}

/// Drinking intensity derived from alcohol doses per week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DrinkingLevel {
    /// Zero doses a week
    NonDrinker,
    /// Up to and including 2 doses a week
    LightDrinker,
    /// More than 2 doses a week
    HeavyDrinker,
}

impl DrinkingLevel {
    /// Map an alcohol doses-per-week count to a level
    #[must_use]
    pub fn from_doses(per_week: f64) -> Option<Self> {
        if per_week < 0.0 {
            None
        } else if per_week == 0.0 {
            Some(Self::NonDrinker)
        } else if per_week <= 2.0 {
            Some(Self::LightDrinker)
        } else {
            Some(Self::HeavyDrinker)
        }
    }

    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NonDrinker => "non-drinker",
            Self::LightDrinker => "light-drinker",
            Self::HeavyDrinker => "heavy-drinker",
        }
    }
}

/// Risk tier derived from a composite score via fixed cutpoints
///
/// The derived `Ord` follows clinical severity, so tier monotonicity in the
/// underlying score can be asserted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RiskTier {
    /// No elevated risk
    Low,
    /// Elevated risk
    Moderate,
    /// High risk
    High,
}

impl RiskTier {
    /// Stable label used in the output schema
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
