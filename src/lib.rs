//! Facade crate for the Itinerant planning engine.
//!
//! This crate re-exports the core domain types and the default planner so
//! applications depend on a single crate.

#![forbid(unsafe_code)]

pub use itinerant_core::{
    ActivityLevel, BudgetAllocation, BudgetBreakdown, BuildState, Category, CityPools, CityStay,
    DayPlan, Itinerary, ItineraryPlanner, Pacing, Period, PlanError, Planner, PlannerConfig,
    PointOfInterest, PoolCatalog, PoolProvider, TimeWindow, TravelStyle, TripMetadata,
    TripPreferences, TripRequest, TripRequestError, Visit,
};

#[cfg(feature = "test-support")]
pub use itinerant_core::test_support;
