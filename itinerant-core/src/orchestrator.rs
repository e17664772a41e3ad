//! Walk the requested cities in order and assemble every day.

use crate::assembler::{DayContext, assemble_day};
use crate::config::PlannerConfig;
use crate::filter::relevant_categories;
use crate::plan::DayPlan;
use crate::selector::BuildState;
use crate::{PoolProvider, TripRequest};

/// Assemble all days of `request`, city by city.
///
/// Each city's pools are resolved once. Day numbers run on across city
/// boundaries and `state` is shared by every day, so a place scheduled in one
/// city is not scheduled again in the next. Cities unknown to `provider` are
/// skipped without consuming day numbers.
pub fn build_days<P>(
    request: &TripRequest,
    provider: &P,
    config: &PlannerConfig,
    state: &mut BuildState,
) -> Vec<DayPlan>
where
    P: PoolProvider + ?Sized,
{
    let relevant = relevant_categories(&request.travel_style, &request.interests);
    let mut days = Vec::new();
    let mut day_number: u32 = 0;

    for stay in &request.cities {
        let city = stay.city.trim();
        let Some(pools) = provider.pools_for(city) else {
            log::warn!("no candidate pools for {city}; skipping {} days", stay.days);
            continue;
        };
        if pools.is_empty() {
            log::warn!("candidate pools for {city} are empty");
        }
        for _ in 0..stay.days {
            day_number = day_number.saturating_add(1);
            let ctx = DayContext {
                day_number,
                city: Some(city),
                party_size: request.party_size,
                pacing: request.pacing,
                activity_level: request.activity_level,
                relevant: &relevant,
            };
            days.push(assemble_day(&ctx, &pools, config, state));
        }
        log::debug!("{city}: assembled {} days", stay.days);
    }
    days
}
