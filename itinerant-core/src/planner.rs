//! Entry point tying the orchestrator, budget and aggregation together.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::budget::day_ceiling;
use crate::config::PlannerConfig;
use crate::itinerary::Itinerary;
use crate::orchestrator::build_days;
use crate::request::{TripRequest, TripRequestError};
use crate::selector::BuildState;
use crate::PoolProvider;

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request failed validation.
    #[error("invalid trip request: {0}")]
    InvalidRequest(#[from] TripRequestError),
}

/// Build an itinerary for a trip request.
///
/// Implementations should return [`PlanError::InvalidRequest`] for invalid
/// requests rather than panicking. Scarcity of candidates is not an error;
/// it shows up as emptier windows.
/// Planners must be `Send + Sync` to be shared across threads.
pub trait Planner: Send + Sync {
    /// Plan a trip.
    fn plan(&self, request: &TripRequest) -> Result<Itinerary, PlanError>;
}

/// Planner drawing candidates from a [`PoolProvider`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use itinerant_core::{
///     CityPools, ItineraryPlanner, Planner, PointOfInterest, PoolCatalog, TripRequest,
/// };
///
/// let pools = CityPools {
///     attractions: vec![PointOfInterest::new("Ribeira", Coord { x: -8.61, y: 41.14 }, ["historic"])],
///     ..CityPools::default()
/// };
/// let planner = ItineraryPlanner::new(PoolCatalog::new().with_city("Porto", pools));
/// let itinerary = planner.plan(&TripRequest::single_city("Porto", 2, 50))?;
/// assert_eq!(itinerary.days.len(), 2);
/// # Ok::<(), itinerant_core::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryPlanner<P>
where
    P: PoolProvider,
{
    provider: P,
    config: PlannerConfig,
}

impl<P> ItineraryPlanner<P>
where
    P: PoolProvider,
{
    /// Construct a planner using default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(provider: P, config: PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a trip, stamping the result with `now`.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidRequest`] when `request` fails validation.
    pub fn plan_at(
        &self,
        request: &TripRequest,
        now: DateTime<Utc>,
    ) -> Result<Itinerary, PlanError> {
        request.validate()?;
        let ceiling = day_ceiling(request.daily_budget_per_person(), request.party_size);
        let mut state = BuildState::new(ceiling);
        let days = build_days(request, &self.provider, &self.config, &mut state);
        let itinerary = Itinerary::aggregate(request, days, now);
        log::info!(
            "planned {} days for {} (estimated {} of {})",
            itinerary.days.len(),
            itinerary.trip_metadata.destination,
            itinerary.total_estimated_cost(),
            itinerary.trip_metadata.budget.trip_ceiling
        );
        Ok(itinerary)
    }
}

impl<P> Planner for ItineraryPlanner<P>
where
    P: PoolProvider + Send + Sync,
{
    fn plan(&self, request: &TripRequest) -> Result<Itinerary, PlanError> {
        self.plan_at(request, Utc::now())
    }
}
