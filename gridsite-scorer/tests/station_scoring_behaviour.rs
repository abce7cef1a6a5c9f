#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for generation facility scoring.

use std::cell::RefCell;

use geo::Coord;
use gridsite_core::GenerationFacility;
use gridsite_scorer::{ScoreError, StationScoreConfig, score_stations};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Candidate site shared by every scenario: Wagga Wagga, NSW.
const CANDIDATE: Coord<f64> = Coord {
    x: 147.3707,
    y: -35.1175,
};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    facilities: RefCell<Vec<GenerationFacility>>,
    outcome: RefCell<Option<Result<f64, ScoreError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        facilities: RefCell::new(Vec::new()),
        outcome: RefCell::new(None),
    }
}

#[given("a facility table with a solar farm at the candidate site")]
fn solar_at_candidate(context: &TestContext) {
    context
        .facilities
        .borrow_mut()
        .push(GenerationFacility::from_label(CANDIDATE, "Solar"));
}

#[given("a facility table with a coal plant 500 km from the candidate")]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture coordinates are derived from a kilometre offset"
)]
fn coal_far_from_candidate(context: &TestContext) {
    let location = Coord {
        x: CANDIDATE.x,
        y: CANDIDATE.y + 500.0 / 111.195,
    };
    context
        .facilities
        .borrow_mut()
        .push(GenerationFacility::from_label(location, "Coal"));
}

#[given("an empty facility table")]
fn empty_facility_table(context: &TestContext) {
    context.facilities.borrow_mut().clear();
}

#[when("I score the candidate against the facility table")]
fn score_the_candidate(context: &TestContext) {
    let facilities = context.facilities.borrow();
    *context.outcome.borrow_mut() = Some(score_stations(
        CANDIDATE,
        facilities.as_slice(),
        &StationScoreConfig::default(),
    ));
}

#[then("the station score is exactly 120.0")]
#[expect(clippy::float_cmp, reason = "zero-distance decay is exact")]
fn assert_solar_score(context: &TestContext) {
    assert_eq!(recorded_score(context), 120.0);
}

#[then("the station score is the station penalty")]
#[expect(clippy::float_cmp, reason = "penalty sentinel is an exact constant")]
fn assert_penalty_score(context: &TestContext) {
    assert_eq!(recorded_score(context), StationScoreConfig::default().penalty);
}

#[then("scoring fails because no facilities were supplied")]
fn assert_empty_table_rejected(context: &TestContext) {
    let outcome = context
        .outcome
        .borrow()
        .clone()
        .expect("score should be recorded");
    assert_eq!(outcome, Err(ScoreError::NoFacilities));
}

fn recorded_score(context: &TestContext) -> f64 {
    context
        .outcome
        .borrow()
        .clone()
        .expect("score should be recorded")
        .expect("scoring should succeed")
}

#[scenario(path = "tests/features/station_scoring.feature", index = 0)]
fn nearby_solar_scores_through_distance_decay(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/station_scoring.feature", index = 1)]
fn distant_facilities_trigger_the_penalty(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/station_scoring.feature", index = 2)]
fn an_empty_facility_table_is_rejected(context: TestContext) {
    let _ = context;
}
