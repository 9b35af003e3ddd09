//! Evaluation context for rule execution

use careflag_model::{
    ConceptResolver, DemographicsStore, EnrollmentFilter, ObservationStore, SurvivalFilter,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Immutable context for one evaluation pass
///
/// Carries the evaluation instant and the injected collaborators. Supply a
/// fresh context per call so every decision in a batch shares the same
/// `now`. The context is never mutated during evaluation and may be shared
/// read-only across concurrent evaluations of different cohorts.
#[derive(Clone)]
pub struct EvaluationContext {
    now: DateTime<Utc>,
    survival: Arc<dyn SurvivalFilter>,
    enrollment: Arc<dyn EnrollmentFilter>,
    observations: Arc<dyn ObservationStore>,
    demographics: Arc<dyn DemographicsStore>,
    concepts: Arc<dyn ConceptResolver>,
}

impl EvaluationContext {
    /// Create a context fixed at the given evaluation instant
    pub fn new(
        now: DateTime<Utc>,
        survival: Arc<dyn SurvivalFilter>,
        enrollment: Arc<dyn EnrollmentFilter>,
        observations: Arc<dyn ObservationStore>,
        demographics: Arc<dyn DemographicsStore>,
        concepts: Arc<dyn ConceptResolver>,
    ) -> Self {
        Self {
            now,
            survival,
            enrollment,
            observations,
            demographics,
            concepts,
        }
    }

    /// The evaluation instant
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Filter narrowing cohorts to patients alive at an instant
    pub fn survival(&self) -> &dyn SurvivalFilter {
        self.survival.as_ref()
    }

    /// Filter narrowing cohorts to patients enrolled in a program
    pub fn enrollment(&self) -> &dyn EnrollmentFilter {
        self.enrollment.as_ref()
    }

    /// Batched latest-observation lookup
    pub fn observations(&self) -> &dyn ObservationStore {
        self.observations.as_ref()
    }

    /// Patient demographics access
    pub fn demographics(&self) -> &dyn DemographicsStore {
        self.demographics.as_ref()
    }

    /// Dictionary resolving symbolic names
    pub fn concepts(&self) -> &dyn ConceptResolver {
        self.concepts.as_ref()
    }
}
