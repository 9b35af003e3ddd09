//! Patient-flag evaluation for mother-child health programs
//!
//! This crate ties the workspace together:
//! - Domain types (patients, cohorts, observations, results)
//! - Provider traits and in-memory reference providers
//! - The rule engine and the shipped flag rules
//!
//! # Example
//!
//! ```ignore
//! use careflag::{Cohort, EvaluationContext, FlagRule, NeedsPcrTest};
//!
//! let ctx = EvaluationContext::new(now, survival, enrollment, observations, demographics, concepts);
//! let results = NeedsPcrTest::new().evaluate(&cohort, &ctx).await?;
//! for (patient, result) in &results {
//!     println!("{patient}: {}", result.eligible);
//! }
//! ```

// Re-export all public APIs from internal crates
pub use careflag_eval as eval;
pub use careflag_model as model;
pub use careflag_types as types;

// Convenience re-exports
pub use careflag_eval::{
    EvalError, EvalResult, EvaluationContext, FlagRule, NeedsPcrTest, ResultMap,
};
pub use careflag_types::{Cohort, EligibilityResult, Observation, PatientId};
