//! Core domain logic for the Itinerant trip planner.
//!
//! Responsibilities:
//! - Estimate visit costs and durations from category tags.
//! - Choose visits per time window under a daily budget without repeating
//!   places across the trip.
//! - Assemble days city by city and wrap them into an [`Itinerary`].
//!
//! Boundaries:
//! - No I/O. Candidate pools arrive in memory through [`PoolProvider`].
//! - No wall-clock randomness. Orderings come from [`deterministic_shuffle`].
//!
//! Invariants:
//! - Day numbers are contiguous across cities.
//! - A place is only scheduled twice when the scarcity pass had to repeat it,
//!   and that window carries `relaxed_repeat`.
//! - No day's estimated cost exceeds its ceiling.

#![forbid(unsafe_code)]

mod assembler;
mod budget;
mod category;
mod config;
pub mod cost;
mod filter;
mod itinerary;
mod orchestrator;
mod pacing;
mod plan;
mod planner;
mod poi;
mod pools;
mod registry;
mod request;
mod selector;
pub mod shuffle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use assembler::{DayContext, assemble_day, day_title};
pub use budget::{BudgetAllocation, BudgetBreakdown, RunningBudget, day_ceiling};
pub use category::{Category, TravelStyle, category_label};
pub use config::{LODGING_CADENCE, PlannerConfig, SCARCITY_DIVISOR};
pub use filter::{filter_relevant, relevant_categories};
pub use itinerary::{Itinerary, TripMetadata, TripPreferences};
pub use orchestrator::build_days;
pub use pacing::{ActivityLevel, Pacing, WindowCapacity};
pub use plan::{DayPlan, Period, TimeWindow, Visit};
pub use planner::{ItineraryPlanner, PlanError, Planner};
pub use poi::PointOfInterest;
pub use pools::{CityPools, PoolCatalog, PoolProvider};
pub use registry::{PoiKey, UsedPlaces};
pub use request::{CityStay, TripRequest, TripRequestError};
pub use selector::{BuildState, Selection, scarcity_threshold, select_within_budget};
pub use shuffle::{day_seed, deterministic_shuffle};
