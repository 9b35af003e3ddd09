//! In-memory provider implementations
//!
//! Configurable implementations of the provider traits backed by plain
//! maps. They serve as test fixtures and as a backend for embedding the
//! engine without an external record system.

use crate::provider::{
    ConceptResolver, DemographicsStore, EnrollmentFilter, ObservationStore, ProviderError,
    ResolutionError, SurvivalFilter,
};
use async_trait::async_trait;
use careflag_types::{Cohort, ConceptRef, Observation, PatientId, ProgramRef};
use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Concept dictionary backed by a name-to-reference map
#[derive(Default)]
pub struct InMemoryDictionary {
    concepts: RwLock<HashMap<String, ConceptRef>>,
    programs: RwLock<HashMap<String, ProgramRef>>,
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a concept name to a backend identifier
    pub fn define_concept(&self, name: impl Into<String>, id: impl Into<String>) {
        self.concepts
            .write()
            .insert(name.into(), ConceptRef::new(id));
    }

    /// Map a program name to a backend identifier
    pub fn define_program(&self, name: impl Into<String>, id: impl Into<String>) {
        self.programs
            .write()
            .insert(name.into(), ProgramRef::new(id));
    }
}

impl ConceptResolver for InMemoryDictionary {
    fn resolve_concept(&self, name: &str) -> Result<ConceptRef, ResolutionError> {
        self.concepts
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownConcept(name.to_string()))
    }

    fn resolve_program(&self, name: &str) -> Result<ProgramRef, ResolutionError> {
        self.programs
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownProgram(name.to_string()))
    }
}

#[derive(Clone)]
struct PatientRecord {
    birth_date: Option<NaiveDate>,
    died_at: Option<DateTime<Utc>>,
}

/// Patient registry serving both the survival filter and demographics
///
/// A patient counts as alive at an instant when they are registered and
/// have no death recorded on or before it. Unregistered patients are never
/// alive, so they fall out of every narrowing.
#[derive(Default)]
pub struct InMemoryPatientRegistry {
    records: RwLock<HashMap<PatientId, PatientRecord>>,
}

impl InMemoryPatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a patient with an optional birth date
    pub fn register(&self, patient: PatientId, birth_date: Option<NaiveDate>) {
        self.records.write().insert(
            patient,
            PatientRecord {
                birth_date,
                died_at: None,
            },
        );
    }

    /// Record a patient's death
    pub fn record_death(&self, patient: PatientId, at: DateTime<Utc>) {
        if let Some(record) = self.records.write().get_mut(&patient) {
            record.died_at = Some(at);
        }
    }
}

#[async_trait]
impl SurvivalFilter for InMemoryPatientRegistry {
    async fn alive_as_of(
        &self,
        cohort: &Cohort,
        as_of: DateTime<Utc>,
    ) -> Result<Cohort, ProviderError> {
        let records = self.records.read();
        Ok(cohort
            .iter()
            .filter(|patient| {
                records
                    .get(patient)
                    .is_some_and(|r| r.died_at.is_none_or(|died| died > as_of))
            })
            .collect())
    }
}

#[async_trait]
impl DemographicsStore for InMemoryPatientRegistry {
    async fn birth_date(&self, patient: PatientId) -> Result<Option<NaiveDate>, ProviderError> {
        Ok(self
            .records
            .read()
            .get(&patient)
            .and_then(|r| r.birth_date))
    }
}

struct EnrollmentSpan {
    program: ProgramRef,
    from: DateTime<Utc>,
    until: Option<DateTime<Utc>>,
}

/// Program enrollment index
#[derive(Default)]
pub struct InMemoryEnrollmentIndex {
    spans: RwLock<HashMap<PatientId, Vec<EnrollmentSpan>>>,
}

impl InMemoryEnrollmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an enrollment for a patient starting at `from`
    pub fn enroll(&self, patient: PatientId, program: &ProgramRef, from: DateTime<Utc>) {
        self.spans.write().entry(patient).or_default().push(
            EnrollmentSpan {
                program: program.clone(),
                from,
                until: None,
            },
        );
    }

    /// Close the patient's open enrollment in `program` at `at`
    pub fn complete(&self, patient: PatientId, program: &ProgramRef, at: DateTime<Utc>) {
        if let Some(spans) = self.spans.write().get_mut(&patient) {
            for span in spans.iter_mut() {
                if span.program == *program && span.until.is_none() {
                    span.until = Some(at);
                }
            }
        }
    }
}

#[async_trait]
impl EnrollmentFilter for InMemoryEnrollmentIndex {
    async fn enrolled_as_of(
        &self,
        program: &ProgramRef,
        cohort: &Cohort,
        as_of: DateTime<Utc>,
    ) -> Result<Cohort, ProviderError> {
        let spans = self.spans.read();
        Ok(cohort
            .iter()
            .filter(|patient| {
                spans.get(patient).is_some_and(|patient_spans| {
                    patient_spans.iter().any(|span| {
                        span.program == *program
                            && span.from <= as_of
                            && span.until.is_none_or(|until| until > as_of)
                    })
                })
            })
            .collect())
    }
}

/// Append-only observation log with latest-per-concept lookup
#[derive(Default)]
pub struct InMemoryObservationLog {
    entries: RwLock<HashMap<PatientId, Vec<Observation>>>,
}

impl InMemoryObservationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observation for a patient
    pub fn record(&self, patient: PatientId, observation: Observation) {
        self.entries
            .write()
            .entry(patient)
            .or_default()
            .push(observation);
    }
}

#[async_trait]
impl ObservationStore for InMemoryObservationLog {
    /// On equal effective instants the most recently recorded observation
    /// wins.
    async fn latest_observation(
        &self,
        concept: &ConceptRef,
        cohort: &Cohort,
        as_of: DateTime<Utc>,
    ) -> Result<HashMap<PatientId, Observation>, ProviderError> {
        let entries = self.entries.read();
        let mut latest = HashMap::new();
        for patient in cohort.iter() {
            let found = entries.get(&patient).and_then(|observations| {
                observations
                    .iter()
                    .filter(|obs| obs.concept == *concept && obs.effective <= as_of)
                    .max_by_key(|obs| obs.effective)
            });
            if let Some(obs) = found {
                latest.insert(patient, obs.clone());
            }
        }
        Ok(latest)
    }
}
