//! What a traveller asks for.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{ActivityLevel, BudgetAllocation, Pacing, TravelStyle};

/// A stay of `days` consecutive days in one city.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CityStay {
    /// City name as known to the pool provider.
    pub city: String,
    /// Number of days spent there.
    pub days: u32,
}

impl CityStay {
    /// Construct a stay.
    pub fn new(city: impl Into<String>, days: u32) -> Self {
        Self {
            city: city.into(),
            days,
        }
    }
}

/// Errors returned by [`TripRequest::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripRequestError {
    /// No city was requested.
    #[error("trip request must name at least one city")]
    NoCities,
    /// The party has nobody in it.
    #[error("party size must be at least one")]
    ZeroPartySize,
    /// A city name was empty or whitespace.
    #[error("city names must not be blank")]
    BlankCity,
    /// A stay lasts zero days.
    #[error("stay in {city} must last at least one day")]
    ZeroDays {
        /// City with the empty stay.
        city: String,
    },
    /// The declared duration disagrees with the stays.
    #[error("trip declares {declared} days but its stays add up to {summed}")]
    DurationMismatch {
        /// Duration given in the request.
        declared: u32,
        /// Sum of the stays.
        summed: u32,
    },
}

/// Everything needed to build an itinerary.
///
/// # Examples
/// ```
/// use itinerant_core::{CityStay, TravelStyle, TripRequest};
///
/// let request = TripRequest::new(vec![CityStay::new("Lisbon", 2), CityStay::new("Porto", 1)], 80)
///     .with_party_size(2)
///     .with_travel_style(TravelStyle::Cultural);
/// assert_eq!(request.total_days(), 3);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripRequest {
    /// Cities in visiting order.
    pub cities: Vec<CityStay>,
    /// Declared duration; must match the stays when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_days: Option<u32>,
    /// First day of the trip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_date: Option<NaiveDate>,
    /// Number of travellers.
    #[cfg_attr(feature = "serde", serde(default = "default_party_size"))]
    pub party_size: u32,
    /// Preferred style of travel.
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_style: TravelStyle,
    /// Extra interests, matched against category tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: Vec<String>,
    /// Per-person amount, interpreted by `budget_allocation`.
    pub budget: u32,
    /// Whether `budget` is per day or for the whole trip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget_allocation: BudgetAllocation,
    /// Schedule density.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pacing: Pacing,
    /// Capacity multiplier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activity_level: ActivityLevel,
}

#[cfg(feature = "serde")]
const fn default_party_size() -> u32 {
    1
}

impl TripRequest {
    /// Request for one traveller with default preferences.
    #[must_use]
    pub fn new(cities: Vec<CityStay>, budget: u32) -> Self {
        Self {
            cities,
            total_days: None,
            start_date: None,
            party_size: 1,
            travel_style: TravelStyle::default(),
            interests: Vec::new(),
            budget,
            budget_allocation: BudgetAllocation::default(),
            pacing: Pacing::default(),
            activity_level: ActivityLevel::default(),
        }
    }

    /// Request covering a single city.
    #[must_use]
    pub fn single_city(city: impl Into<String>, days: u32, budget: u32) -> Self {
        Self::new(vec![CityStay::new(city, days)], budget)
    }

    /// Set the party size.
    #[must_use]
    pub const fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    /// Set the travel style.
    #[must_use]
    pub fn with_travel_style(mut self, style: TravelStyle) -> Self {
        self.travel_style = style;
        self
    }

    /// Set the extra interests.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Set how the budget is interpreted.
    #[must_use]
    pub const fn with_budget_allocation(mut self, allocation: BudgetAllocation) -> Self {
        self.budget_allocation = allocation;
        self
    }

    /// Set pacing and activity level.
    #[must_use]
    pub const fn with_pace(mut self, pacing: Pacing, level: ActivityLevel) -> Self {
        self.pacing = pacing;
        self.activity_level = level;
        self
    }

    /// Set the first day of the trip.
    #[must_use]
    pub const fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Declare the expected duration.
    #[must_use]
    pub const fn with_total_days(mut self, days: u32) -> Self {
        self.total_days = Some(days);
        self
    }

    /// Sum of all stays.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.cities
            .iter()
            .map(|stay| stay.days)
            .fold(0, u32::saturating_add)
    }

    /// City names joined for display, in visiting order.
    #[must_use]
    pub fn destination(&self) -> String {
        self.cities
            .iter()
            .map(|stay| stay.city.trim())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Per-person amount available each day.
    #[must_use]
    pub fn daily_budget_per_person(&self) -> u32 {
        self.budget_allocation
            .daily_per_person(self.budget, self.total_days())
    }

    /// Check the request is something the planner can work with.
    ///
    /// # Errors
    /// Returns the first problem found, checking cities before the party.
    pub fn validate(&self) -> Result<(), TripRequestError> {
        if self.cities.is_empty() {
            return Err(TripRequestError::NoCities);
        }
        for stay in &self.cities {
            if stay.city.trim().is_empty() {
                return Err(TripRequestError::BlankCity);
            }
            if stay.days == 0 {
                return Err(TripRequestError::ZeroDays {
                    city: stay.city.clone(),
                });
            }
        }
        if self.party_size == 0 {
            return Err(TripRequestError::ZeroPartySize);
        }
        let summed = self.total_days();
        match self.total_days {
            Some(declared) if declared != summed => {
                Err(TripRequestError::DurationMismatch { declared, summed })
            }
            _ => Ok(()),
        }
    }
}
