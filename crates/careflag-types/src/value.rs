//! Core value types shared across the workspace

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque patient identifier, stable for the duration of a batch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PatientId(pub i32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PatientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Resolved handle to a coded clinical concept
///
/// Concept references are produced by a `ConceptResolver` from a symbolic
/// dictionary name and are only meaningful to the collaborators that issued
/// them. Two references are the same concept iff their identifiers match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptRef(String);

impl ConceptRef {
    /// Create a reference from a backend concept identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The backend identifier this reference wraps
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConceptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "concept '{}'", self.0)
    }
}

/// Resolved handle to a care program definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramRef(String);

impl ProgramRef {
    /// Create a reference from a backend program identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The backend identifier this reference wraps
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program '{}'", self.0)
    }
}

/// Value carried by an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObsValue {
    /// A coded answer (e.g. a status drawn from a terminology)
    Coded(ConceptRef),
    /// A numeric reading
    Numeric(Decimal),
    /// Free text
    Text(String),
}

impl ObsValue {
    /// The coded answer, if this value is coded
    pub fn as_coded(&self) -> Option<&ConceptRef> {
        match self {
            ObsValue::Coded(concept) => Some(concept),
            _ => None,
        }
    }
}

/// A single timestamped clinical fact attached to a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Concept this observation answers
    pub concept: ConceptRef,
    /// Observed value
    pub value: ObsValue,
    /// Instant the observation became effective
    pub effective: DateTime<Utc>,
}

impl Observation {
    /// Create a new observation
    pub fn new(concept: ConceptRef, value: ObsValue, effective: DateTime<Utc>) -> Self {
        Self {
            concept,
            value,
            effective,
        }
    }

    /// Create an observation with a coded value
    pub fn coded(concept: ConceptRef, answer: ConceptRef, effective: DateTime<Utc>) -> Self {
        Self::new(concept, ObsValue::Coded(answer), effective)
    }
}

/// Per-patient outcome of a flag rule
///
/// Produced fresh on every evaluation call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Patient the result belongs to
    pub patient: PatientId,
    /// Whether the rule is satisfied for this patient
    pub eligible: bool,
    /// Instant the decision was computed (the context's `now`)
    pub evaluated_at: DateTime<Utc>,
}

impl EligibilityResult {
    /// Create a result for a patient
    pub fn new(patient: PatientId, eligible: bool, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            patient,
            eligible,
            evaluated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_concept_ref_equality() {
        let a = ConceptRef::new("1040AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
        let b = ConceptRef::new("1040AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
        let c = ConceptRef::new("1030AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_obs_value_as_coded() {
        let answer = ConceptRef::new("822AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
        let coded = ObsValue::Coded(answer.clone());
        assert_eq!(coded.as_coded(), Some(&answer));

        let numeric = ObsValue::Numeric(Decimal::new(1200, 1));
        assert_eq!(numeric.as_coded(), None);
    }

    #[test]
    fn test_observation_coded_helper() {
        let concept = ConceptRef::new("status");
        let answer = ConceptRef::new("exposed");
        let effective = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();

        let obs = Observation::coded(concept.clone(), answer.clone(), effective);
        assert_eq!(obs.concept, concept);
        assert_eq!(obs.value.as_coded(), Some(&answer));
        assert_eq!(obs.effective, effective);
    }

    #[test]
    fn test_patient_id_display() {
        assert_eq!(PatientId(42).to_string(), "42");
    }
}
