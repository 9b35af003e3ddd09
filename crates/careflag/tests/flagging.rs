//! Whole-workspace flagging scenario through the facade API

use careflag::model::{
    InMemoryDictionary, InMemoryEnrollmentIndex, InMemoryObservationLog, InMemoryPatientRegistry,
};
use careflag::types::dictionary as names;
use careflag::types::{ConceptRef, ObsValue, ProgramRef};
use careflag::{
    Cohort, EligibilityResult, EvaluationContext, FlagRule, NeedsPcrTest, Observation, PatientId,
    ResultMap,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A small clinic: one child due for the test, and one counterexample for
/// each way the rule can fail.
fn clinic() -> (EvaluationContext, Cohort) {
    let dictionary = InMemoryDictionary::new();
    dictionary.define_program(names::MCH_CHILD_SERVICES, "prog-mchcs");
    dictionary.define_concept(names::CHILDS_CURRENT_HIV_STATUS, "c-hiv-status");
    dictionary.define_concept(names::HIV_DNA_POLYMERASE_CHAIN_REACTION, "c-pcr");
    dictionary.define_concept(
        names::HIV_DNA_POLYMERASE_CHAIN_REACTION_QUALITATIVE,
        "c-pcr-qual",
    );
    dictionary.define_concept(names::EXPOSURE_TO_HIV, "c-exposed");

    let registry = InMemoryPatientRegistry::new();
    let enrollment = InMemoryEnrollmentIndex::new();
    let observations = InMemoryObservationLog::new();
    let program = ProgramRef::new("prog-mchcs");
    let enrolled_since = Utc.with_ymd_and_hms(2024, 4, 25, 0, 0, 0).unwrap();
    let observed_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

    let mark_exposed = |obs: &InMemoryObservationLog, patient: PatientId| {
        obs.record(
            patient,
            Observation::coded(
                ConceptRef::new("c-hiv-status"),
                ConceptRef::new("c-exposed"),
                observed_at,
            ),
        );
    };

    // patient 1: exposed, enrolled, untested, exactly six weeks old
    let due = PatientId(1);
    registry.register(due, NaiveDate::from_ymd_opt(2024, 4, 20));
    enrollment.enroll(due, &program, enrolled_since);
    mark_exposed(&observations, due);

    // patient 2: same story but five weeks and six days old
    let too_young = PatientId(2);
    registry.register(too_young, NaiveDate::from_ymd_opt(2024, 4, 21));
    enrollment.enroll(too_young, &program, enrolled_since);
    mark_exposed(&observations, too_young);

    // patient 3: already has a qualitative result on file
    let tested = PatientId(3);
    registry.register(tested, NaiveDate::from_ymd_opt(2024, 4, 20));
    enrollment.enroll(tested, &program, enrolled_since);
    mark_exposed(&observations, tested);
    observations.record(
        tested,
        Observation::new(
            ConceptRef::new("c-pcr-qual"),
            ObsValue::Text("NOT DETECTED".to_string()),
            Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap(),
        ),
    );

    // patient 4: exposed and the right age, but never enrolled
    let unenrolled = PatientId(4);
    registry.register(unenrolled, NaiveDate::from_ymd_opt(2024, 4, 20));
    mark_exposed(&observations, unenrolled);

    // patient 5: enrolled and exposed, birth date never recorded
    let undated = PatientId(5);
    registry.register(undated, None);
    enrollment.enroll(undated, &program, enrolled_since);
    mark_exposed(&observations, undated);

    // the registry serves both the survival filter and demographics
    let registry = Arc::new(registry);
    let ctx = EvaluationContext::new(
        now(),
        registry.clone(),
        Arc::new(enrollment),
        Arc::new(observations),
        registry,
        Arc::new(dictionary),
    );

    let cohort: Cohort = [due, too_young, tested, unenrolled, undated]
        .into_iter()
        .collect();
    (ctx, cohort)
}

#[tokio::test]
async fn only_the_due_infant_is_flagged() {
    let (ctx, cohort) = clinic();

    let results = NeedsPcrTest::new().evaluate(&cohort, &ctx).await.unwrap();

    let expected: ResultMap = cohort
        .iter()
        .map(|patient| {
            (
                patient,
                EligibilityResult::new(patient, patient == PatientId(1), now()),
            )
        })
        .collect();
    assert_eq!(results, expected);
}

#[tokio::test]
async fn repeated_evaluation_is_stable() {
    let (ctx, cohort) = clinic();
    let rule = NeedsPcrTest::new();

    let first = rule.evaluate(&cohort, &ctx).await.unwrap();
    let second = rule.evaluate(&cohort, &ctx).await.unwrap();

    assert_eq!(first, second);
}
