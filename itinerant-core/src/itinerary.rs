//! The finished trip handed back to callers.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::budget::{BudgetBreakdown, day_ceiling};
use crate::plan::{DayPlan, Period};
use crate::{ActivityLevel, Pacing, TravelStyle, TripRequest};

/// Preferences the itinerary was built for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripPreferences {
    /// Style of travel.
    pub travel_style: TravelStyle,
    /// Extra interests.
    pub interests: Vec<String>,
    /// Schedule density.
    pub pacing: Pacing,
    /// Capacity multiplier.
    pub activity_level: ActivityLevel,
    /// Number of travellers.
    pub party_size: u32,
}

/// Summary of the trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripMetadata {
    /// City names joined with `", "`.
    pub destination: String,
    /// Requested number of days.
    pub duration: u32,
    /// First day of the trip, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_date: Option<NaiveDate>,
    /// Preferences used during the build.
    pub preferences: TripPreferences,
    /// Budget figures.
    pub budget: BudgetBreakdown,
}

/// A complete itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Itinerary {
    /// Random v4 identifier.
    pub id: Uuid,
    /// Trip summary.
    pub trip_metadata: TripMetadata,
    /// Days in order.
    pub days: Vec<DayPlan>,
    /// When the itinerary was built.
    pub created_at: DateTime<Utc>,
    /// When the itinerary last changed.
    pub updated_at: DateTime<Utc>,
}

impl Itinerary {
    /// Wrap assembled days with metadata derived from `request`.
    ///
    /// No validation happens here; `days` are taken as they are.
    #[must_use]
    pub fn aggregate(request: &TripRequest, days: Vec<DayPlan>, now: DateTime<Utc>) -> Self {
        let total_days = request.total_days();
        let daily_per_person = request.daily_budget_per_person();
        let daily_ceiling = day_ceiling(daily_per_person, request.party_size);
        let estimated_total = days
            .iter()
            .map(|day| day.estimated_cost(request.party_size))
            .fold(0, u32::saturating_add);
        let budget = BudgetBreakdown {
            allocation: request.budget_allocation,
            daily_per_person,
            daily_ceiling,
            trip_ceiling: daily_ceiling.saturating_mul(total_days),
            estimated_total,
        };
        Self {
            id: Uuid::new_v4(),
            trip_metadata: TripMetadata {
                destination: request.destination(),
                duration: total_days,
                start_date: request.start_date,
                preferences: TripPreferences {
                    travel_style: request.travel_style.clone(),
                    interests: request.interests.clone(),
                    pacing: request.pacing,
                    activity_level: request.activity_level,
                    party_size: request.party_size,
                },
                budget,
            },
            days,
            created_at: now,
            updated_at: now,
        }
    }

    /// Estimated cost of every visit for the whole party.
    #[must_use]
    pub fn total_estimated_cost(&self) -> u32 {
        self.trip_metadata.budget.estimated_total
    }

    /// Find a day by its number.
    #[must_use]
    pub fn day(&self, day_number: u32) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.day_number == day_number)
    }

    /// Mark the visit at `index` in the `period` window of `day_number` as
    /// completed.
    ///
    /// Returns `false` when no such visit exists.
    pub fn mark_completed(&mut self, day_number: u32, period: Period, index: usize) -> bool {
        let visit = self
            .days
            .iter_mut()
            .find(|day| day.day_number == day_number)
            .and_then(|day| day.time_slots.iter_mut().find(|w| w.period == period))
            .and_then(|window| window.activities.get_mut(index));
        match visit {
            Some(visit) => {
                visit.completed = true;
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Date of `day_number`, when the trip has a start date.
    #[must_use]
    pub fn date_of(&self, day_number: u32) -> Option<NaiveDate> {
        let start = self.trip_metadata.start_date?;
        let offset = chrono::Days::new(u64::from(day_number.checked_sub(1)?));
        start.checked_add_days(offset)
    }
}
