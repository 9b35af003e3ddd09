//! Provider traits the rule engine evaluates against
//!
//! Each trait is a narrow view of one backend capability. Implementations
//! own retry policy, caching, and tie-breaking between equally recent
//! observations; the engine treats their answers as given. Batch-level
//! calls take the whole cohort so a provider can answer in one round-trip.

use async_trait::async_trait;
use careflag_types::{Cohort, ConceptRef, Observation, PatientId, ProgramRef};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

/// Error raised by a data provider call
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The backend rejected or failed the call
    #[error("Backend call failed: {0}")]
    Backend(String),

    /// The call did not complete in time
    #[error("Backend call timed out: {0}")]
    Timeout(String),

    /// Internal provider error
    #[error("Internal provider error: {0}")]
    Internal(String),
}

/// Error raised when a symbolic dictionary name cannot be resolved
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolutionError {
    /// No concept is mapped to the given name
    #[error("Unknown concept: {0}")]
    UnknownConcept(String),

    /// No program is mapped to the given name
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
}

/// Narrows a cohort to the patients alive at a given instant
#[async_trait]
pub trait SurvivalFilter: Send + Sync {
    /// Return the subset of `cohort` alive as of `as_of`
    async fn alive_as_of(
        &self,
        cohort: &Cohort,
        as_of: DateTime<Utc>,
    ) -> Result<Cohort, ProviderError>;
}

/// Narrows a cohort to the patients enrolled in a care program
#[async_trait]
pub trait EnrollmentFilter: Send + Sync {
    /// Return the subset of `cohort` actively enrolled in `program` as of `as_of`
    async fn enrolled_as_of(
        &self,
        program: &ProgramRef,
        cohort: &Cohort,
        as_of: DateTime<Utc>,
    ) -> Result<Cohort, ProviderError>;
}

/// Batched lookup of the most recent observation per patient
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// For each patient in `cohort`, the latest observation of `concept`
    /// effective on or before `as_of`. Patients with no such observation
    /// are absent from the returned map.
    async fn latest_observation(
        &self,
        concept: &ConceptRef,
        cohort: &Cohort,
        as_of: DateTime<Utc>,
    ) -> Result<HashMap<PatientId, Observation>, ProviderError>;
}

/// Access to patient demographics
#[async_trait]
pub trait DemographicsStore: Send + Sync {
    /// The patient's recorded birth date, if any
    async fn birth_date(&self, patient: PatientId) -> Result<Option<NaiveDate>, ProviderError>;
}

/// Resolves symbolic dictionary names to backend references
///
/// Resolution is deployment configuration, not clinical data, so the trait
/// is synchronous. A miss means the dictionary is misconfigured.
pub trait ConceptResolver: Send + Sync {
    /// Resolve a concept name to a backend reference
    fn resolve_concept(&self, name: &str) -> Result<ConceptRef, ResolutionError>;

    /// Resolve a program name to a backend reference
    fn resolve_program(&self, name: &str) -> Result<ProgramRef, ResolutionError>;
}
