//! Flag rule abstraction

use crate::context::EvaluationContext;
use crate::error::EvalResult;
use async_trait::async_trait;
use careflag_types::{Cohort, EligibilityResult, PatientId};
use indexmap::IndexMap;

/// Per-patient outcomes of one evaluation call, keyed in cohort order
pub type ResultMap = IndexMap<PatientId, EligibilityResult>;

/// A patient-flag decision rule evaluated over a cohort
///
/// Implementations are pure batch transforms: the same cohort, the same
/// `now`, and unchanged clinical data yield identical result maps, and
/// nothing in the record system is mutated. The returned map carries
/// exactly one entry per cohort member, no more and no fewer.
#[async_trait]
pub trait FlagRule: Send + Sync {
    /// Short display message identifying the flag
    fn flag_message(&self) -> &'static str;

    /// Evaluate the rule for every patient in `cohort`
    async fn evaluate(&self, cohort: &Cohort, ctx: &EvaluationContext) -> EvalResult<ResultMap>;
}
