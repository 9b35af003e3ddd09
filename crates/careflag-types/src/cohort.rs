//! Cohorts of patients submitted for evaluation

use crate::value::PatientId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The batch of patient identifiers evaluated in one call
///
/// A cohort is a set: duplicate ids collapse on insert. Iteration follows
/// insertion order, so repeated evaluations of the same cohort visit
/// patients in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cohort(IndexSet<PatientId>);

impl Cohort {
    /// Create an empty cohort
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Number of patients in the cohort
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cohort has no patients
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the cohort contains a patient
    pub fn contains(&self, patient: PatientId) -> bool {
        self.0.contains(&patient)
    }

    /// Add a patient; returns false if already present
    pub fn insert(&mut self, patient: PatientId) -> bool {
        self.0.insert(patient)
    }

    /// Iterate over patients in insertion order
    pub fn iter(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<PatientId> for Cohort {
    fn from_iter<I: IntoIterator<Item = PatientId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<i32> for Cohort {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        iter.into_iter().map(PatientId).collect()
    }
}

impl<'a> IntoIterator for &'a Cohort {
    type Item = PatientId;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, PatientId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_deduplicates() {
        let cohort: Cohort = [7, 8, 7, 9].into_iter().collect();
        assert_eq!(cohort.len(), 3);
        assert!(cohort.contains(PatientId(7)));
    }

    #[test]
    fn test_cohort_preserves_insertion_order() {
        let cohort: Cohort = [30, 10, 20].into_iter().collect();
        let ids: Vec<i32> = cohort.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_empty_cohort() {
        let cohort = Cohort::new();
        assert!(cohort.is_empty());
        assert_eq!(cohort.iter().count(), 0);
    }
}
