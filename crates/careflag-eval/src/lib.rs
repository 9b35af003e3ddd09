//! Patient-Flag Rule Engine
//!
//! This crate evaluates clinical flag rules over patient cohorts. A rule
//! is a pure batch transform: given a cohort and an evaluation context
//! (a fixed `now` plus injected data providers) it produces one boolean
//! eligibility result per cohort member.
//!
//! # Example
//!
//! ```ignore
//! use careflag_eval::{EvaluationContext, FlagRule, NeedsPcrTest};
//!
//! let ctx = EvaluationContext::new(now, survival, enrollment, observations, demographics, concepts);
//! let results = NeedsPcrTest::new().evaluate(&cohort, &ctx).await?;
//! ```
//!
//! # Architecture
//!
//! - `EvaluationContext`: the evaluation instant and the collaborators,
//!   injected per call, so rules never reach for ambient state
//! - `FlagRule`: the rule seam; `NeedsPcrTest` is the shipped rule
//! - `age`: completed-week / completed-month calendar arithmetic
//!
//! # Error model
//!
//! Dictionary misses fail the whole call (`EvalError::Configuration`), as
//! does any provider failure (`EvalError::Collaborator`); a patient with
//! missing demographics degrades to "not flagged" without aborting the
//! rest of the batch.

pub mod age;
pub mod context;
pub mod error;
pub mod rule;
pub mod rules;

// Re-export main types
pub use context::EvaluationContext;
pub use error::{EvalError, EvalResult};
pub use rule::{FlagRule, ResultMap};
pub use rules::NeedsPcrTest;
