//! Build one day's schedule from a city's pools.

use crate::config::PlannerConfig;
use crate::filter::filter_relevant;
use crate::plan::{DayPlan, Period, TimeWindow, Visit};
use crate::selector::{BuildState, Selection, select_within_budget};
use crate::shuffle::{ACTIVITY_SALT, DINING_SALT, LODGING_SALT, day_seed, deterministic_shuffle};
use crate::{ActivityLevel, CityPools, Pacing, PointOfInterest, WindowCapacity};

/// Day titles in trip order. Days past the end reuse the last entry.
const DAY_THEMES: [&str; 7] = [
    "Arrival and First Impressions",
    "Historic Heart",
    "Art and Culture",
    "Local Flavours",
    "Parks and Viewpoints",
    "Hidden Corners",
    "Leisurely Wanderings",
];

/// Title for `day_number` (1-based).
///
/// # Examples
/// ```
/// use itinerant_core::day_title;
///
/// assert_eq!(day_title(1), "Arrival and First Impressions");
/// assert_eq!(day_title(30), day_title(7));
/// ```
#[must_use]
pub fn day_title(day_number: u32) -> &'static str {
    let index = usize::try_from(day_number.saturating_sub(1)).unwrap_or(usize::MAX);
    DAY_THEMES
        .get(index)
        .or_else(|| DAY_THEMES.last())
        .copied()
        .unwrap_or_default()
}

/// Per-day inputs that do not depend on the city's pools.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// Position in the whole trip, starting at 1.
    pub day_number: u32,
    /// City the day is spent in.
    pub city: Option<&'a str>,
    /// Number of travellers.
    pub party_size: u32,
    /// Schedule density.
    pub pacing: Pacing,
    /// Capacity multiplier.
    pub activity_level: ActivityLevel,
    /// Category needles for daytime activities.
    pub relevant: &'a [String],
}

/// Assemble the windows of one day.
///
/// The running budget is reset to the daily ceiling first. Morning and
/// afternoon draw from the city's daytime activities, the evening from
/// dining, and lodging days add a night window when a place to stay was
/// affordable. Windows with nothing affordable stay empty.
pub fn assemble_day(
    ctx: &DayContext<'_>,
    pools: &CityPools,
    config: &PlannerConfig,
    state: &mut BuildState,
) -> DayPlan {
    state.budget.reset();
    let capacity = WindowCapacity::for_pace(ctx.pacing, ctx.activity_level);
    let day = ctx.day_number;

    let activities = filter_relevant(&pools.activities(), ctx.relevant);
    let activities = deterministic_shuffle(&activities, day_seed(config.seed, day, ACTIVITY_SALT));
    let dining = deterministic_shuffle(&pools.dining(), day_seed(config.seed, day, DINING_SALT));

    let mut time_slots = vec![
        fill_window(Period::Morning, capacity.morning, &activities, ctx, config, state),
        fill_window(Period::Afternoon, capacity.afternoon, &activities, ctx, config, state),
        fill_window(Period::Evening, capacity.evening, &dining, ctx, config, state),
    ];

    if config.is_lodging_day(day) && !pools.lodging.is_empty() {
        let lodging =
            deterministic_shuffle(&pools.lodging(), day_seed(config.seed, day, LODGING_SALT));
        let night = fill_window(Period::Night, 1, &lodging, ctx, config, state);
        if night.is_empty() {
            log::debug!("day {day}: no affordable lodging");
        } else {
            time_slots.push(night);
        }
    }

    log::debug!(
        "day {day}: scheduled {} visits, spent {} of {}",
        time_slots.iter().map(|w| w.activities.len()).sum::<usize>(),
        state.budget.spent(),
        state.budget.ceiling()
    );

    DayPlan {
        day_number: day,
        title: day_title(day).to_owned(),
        city: ctx.city.map(str::to_owned),
        time_slots,
    }
}

fn fill_window(
    period: Period,
    target: usize,
    candidates: &[&PointOfInterest],
    ctx: &DayContext<'_>,
    config: &PlannerConfig,
    state: &mut BuildState,
) -> TimeWindow {
    let Selection {
        picks,
        fallback_used,
    } = select_within_budget(
        target,
        candidates,
        ctx.party_size,
        config.scarcity_divisor,
        state,
    );
    if picks.is_empty() && period != Period::Night {
        log::warn!(
            "day {}: {period} window left empty ({} candidates)",
            ctx.day_number,
            candidates.len()
        );
    }
    let visits = picks.into_iter().map(Visit::from_poi).collect();
    TimeWindow::new(period, visits).with_relaxed_repeat(fallback_used)
}
