//! Behavioural tests for the scarcity boundary of `select_within_budget`.

use std::cell::RefCell;

use itinerant_core::test_support::poi_at;
use itinerant_core::{BuildState, PointOfInterest, SCARCITY_DIVISOR, select_within_budget};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct SelectorWorld {
    candidates: RefCell<Vec<PointOfInterest>>,
    state: RefCell<BuildState>,
    party_size: RefCell<u32>,
    picked: RefCell<Option<(usize, bool)>>,
}

impl SelectorWorld {
    fn new() -> Self {
        Self {
            candidates: RefCell::new(Vec::new()),
            state: RefCell::new(BuildState::new(0)),
            party_size: RefCell::new(1),
            picked: RefCell::new(None),
        }
    }

    fn picked(&self) -> (usize, bool) {
        self.picked
            .borrow()
            .expect("selection should run before assertions")
    }

    fn select(&self, target: usize) {
        let candidates = self.candidates.borrow();
        let refs: Vec<&PointOfInterest> = candidates.iter().collect();
        let mut state = self.state.borrow_mut();
        let selection = select_within_budget(
            target,
            &refs,
            *self.party_size.borrow(),
            SCARCITY_DIVISOR,
            &mut state,
        );
        self.picked
            .replace(Some((selection.len(), selection.fallback_used)));
    }
}

fn monument(name: &str, lon: f64) -> PointOfInterest {
    poi_at(name, "monument", lon, 0.0)
}

fn restaurant(name: &str, lon: f64) -> PointOfInterest {
    poi_at(name, "restaurant", lon, 0.0)
}

#[fixture]
fn world() -> SelectorWorld {
    SelectorWorld::new()
}

#[given("one unused affordable attraction and three already used ones")]
fn given_mostly_used(world: &SelectorWorld) {
    let candidates = vec![
        monument("Arch", 0.0),
        monument("Bridge", 0.1),
        monument("Column", 0.2),
        monument("Dome", 0.3),
    ];
    let mut state = BuildState::new(60);
    for used in candidates.iter().skip(1) {
        state.used.insert(used.key());
    }
    world.candidates.replace(candidates);
    world.state.replace(state);
    world.party_size.replace(1);
}

#[given("one affordable attraction and three expensive ones")]
fn given_mostly_expensive(world: &SelectorWorld) {
    world.candidates.replace(vec![
        restaurant("Grill", 0.0),
        monument("Arch", 0.1),
        restaurant("Steakhouse", 0.2),
        restaurant("Oyster Bar", 0.3),
    ]);
    world.state.replace(BuildState::new(40));
    world.party_size.replace(2);
}

#[given("only expensive attractions")]
fn given_only_expensive(world: &SelectorWorld) {
    world.candidates.replace(vec![
        restaurant("Grill", 0.0),
        restaurant("Steakhouse", 0.2),
        restaurant("Oyster Bar", 0.3),
    ]);
    world.state.replace(BuildState::new(40));
    world.party_size.replace(2);
}

#[when("three attractions are selected")]
fn when_three_selected(world: &SelectorWorld) {
    world.select(3);
}

#[when("four attractions are selected")]
fn when_four_selected(world: &SelectorWorld) {
    world.select(4);
}

#[then("1 attraction is selected")]
fn then_one_selected(world: &SelectorWorld) {
    assert_eq!(world.picked().0, 1);
}

#[then("4 attractions are selected")]
fn then_four_selected(world: &SelectorWorld) {
    assert_eq!(world.picked().0, 4);
}

#[then("no attraction is selected")]
fn then_none_selected(world: &SelectorWorld) {
    assert_eq!(world.picked(), (0, false));
}

#[then("the scarcity fallback was not used")]
fn then_no_fallback(world: &SelectorWorld) {
    assert!(!world.picked().1);
}

#[then("the scarcity fallback was used")]
fn then_fallback(world: &SelectorWorld) {
    assert!(world.picked().1);
}

#[then("the selection stays within the day's budget")]
fn then_within_budget(world: &SelectorWorld) {
    let state = world.state.borrow();
    assert!(state.budget.spent() <= state.budget.ceiling());
    assert_eq!(state.budget.remaining(), 0);
}

#[scenario(path = "tests/features/selector.feature", index = 0)]
fn below_threshold_target(world: SelectorWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/selector.feature", index = 1)]
fn threshold_crossed(world: SelectorWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/selector.feature", index = 2)]
fn expensive_candidates(world: SelectorWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/selector.feature", index = 3)]
fn nothing_affordable(world: SelectorWorld) {
    let _ = world;
}
