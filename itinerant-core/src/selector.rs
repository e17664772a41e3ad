//! Greedy, budget-aware selection of visits for a single window.
//!
//! The selector walks an already-shuffled candidate list once, taking every
//! unregistered place the running budget can pay for. When that leaves the
//! window badly under-filled a second pass may repeat places from earlier in
//! the trip, but it still never overspends the day.

use std::collections::HashSet;

use crate::budget::RunningBudget;
use crate::cost::party_cost;
use crate::{PoiKey, PointOfInterest, UsedPlaces};

/// Mutable state shared by every selector call of one itinerary build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildState {
    /// Places already scheduled somewhere in the trip.
    pub used: UsedPlaces,
    /// Spend left for the day being assembled.
    pub budget: RunningBudget,
}

impl BuildState {
    /// Fresh state with an empty registry and a full daily ceiling.
    #[must_use]
    pub fn new(day_ceiling: u32) -> Self {
        Self {
            used: UsedPlaces::new(),
            budget: RunningBudget::new(day_ceiling),
        }
    }
}

/// Places chosen for one window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection<'a> {
    /// Chosen places in the order they were accepted.
    pub picks: Vec<&'a PointOfInterest>,
    /// Whether the scarcity pass contributed at least one pick.
    pub fallback_used: bool,
}

impl Selection<'_> {
    /// Number of chosen places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Report whether nothing was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

/// Minimum selection size below which the scarcity pass runs.
///
/// # Examples
/// ```
/// use itinerant_core::scarcity_threshold;
///
/// assert_eq!(scarcity_threshold(4, 2), 2);
/// assert_eq!(scarcity_threshold(3, 2), 1);
/// assert_eq!(scarcity_threshold(1, 2), 1);
/// ```
#[must_use]
pub fn scarcity_threshold(target: usize, divisor: usize) -> usize {
    target.checked_div(divisor.max(1)).unwrap_or(target).max(1)
}

/// Choose up to `target` candidates the remaining budget can pay for.
///
/// Accepted places are registered in `state.used` and their party cost is
/// deducted from `state.budget`. Free places are always affordable.
///
/// When fewer than [`scarcity_threshold`] places were found, a second pass
/// over the same candidates ignores the registry to top the window up. That
/// pass still respects the budget and never picks the same place twice
/// within this selection.
///
/// An empty selection is a valid result.
pub fn select_within_budget<'a>(
    target: usize,
    candidates: &[&'a PointOfInterest],
    party_size: u32,
    scarcity_divisor: usize,
    state: &mut BuildState,
) -> Selection<'a> {
    let mut selection = Selection::default();
    if target == 0 {
        return selection;
    }
    let mut chosen: HashSet<PoiKey> = HashSet::new();

    for poi in candidates {
        if selection.picks.len() >= target {
            break;
        }
        let key = poi.key();
        if state.used.contains(&key) || chosen.contains(&key) {
            continue;
        }
        let cost = party_cost(poi, party_size);
        if !state.budget.can_afford(cost) {
            continue;
        }
        state.budget.spend(cost);
        state.used.insert(key.clone());
        chosen.insert(key);
        selection.picks.push(poi);
    }

    let threshold = scarcity_threshold(target, scarcity_divisor);
    if selection.picks.len() >= threshold {
        return selection;
    }

    log::debug!(
        "selected {} of {target} (threshold {threshold}); trying repeats",
        selection.picks.len()
    );
    for poi in candidates {
        if selection.picks.len() >= target {
            break;
        }
        let key = poi.key();
        if chosen.contains(&key) {
            continue;
        }
        let cost = party_cost(poi, party_size);
        if !state.budget.can_afford(cost) {
            continue;
        }
        state.budget.spend(cost);
        state.used.insert(key.clone());
        chosen.insert(key);
        selection.picks.push(poi);
        selection.fallback_used = true;
    }
    if selection.fallback_used {
        log::warn!(
            "scarcity fallback repeated places to fill {} of {target} slots",
            selection.picks.len()
        );
    }
    selection
}
