//! Domain models for the preparation pipeline
//!
//! The record model mirrors how the registry extract is actually shaped: one
//! consolidated struct per gestation case whose optional fields are filled in
//! by successive pipeline stages.

pub mod record;
pub mod types;

pub use record::{BirthRecord, ClinicalFlags, ModelingRecord};
pub use types::{
    AbortionGroup, ChildrenGroup, DrinkingLevel, LastBirthOutcome, MaritalStatus, ParityGroup,
    PrenatalStartGroup, RiskTier, SchoolingLevel, SmokingLevel,
};
