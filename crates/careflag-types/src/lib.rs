//! Domain types for patient-flag evaluation
//!
//! This crate defines the values a flag rule works over:
//! - Identifiers (`PatientId`, `ConceptRef`, `ProgramRef`)
//! - Cohorts of patients submitted for one evaluation pass
//! - Clinical observations and their values
//! - Per-patient eligibility results
//! - The symbolic dictionary names resolved at evaluation time

pub mod cohort;
pub mod dictionary;
pub mod value;

pub use cohort::Cohort;
pub use value::*;
