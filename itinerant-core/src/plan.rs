//! Scheduled visits grouped into time windows and days.
//!
//! These are the values handed to presentation and persistence layers, so
//! their serialised shape is camelCase and mirrors the field names used by
//! existing consumers (`dayNumber`, `timeSlots`, `startTime`, ...).

use std::fmt;

use geo::Coord;

use crate::category::category_label;
use crate::cost::{estimate_for, parse_cost_range};
use crate::{PoiKey, PointOfInterest};

/// Part of the day a window covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Period {
    /// 09:00-12:00.
    Morning,
    /// 14:00-18:00.
    Afternoon,
    /// 19:00-22:00.
    Evening,
    /// 22:00-23:59, used for the lodging recommendation.
    Night,
}

impl Period {
    /// Return the period tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Default start and end times as `HH:MM`.
    #[must_use]
    pub const fn hours(self) -> (&'static str, &'static str) {
        match self {
            Self::Morning => ("09:00", "12:00"),
            Self::Afternoon => ("14:00", "18:00"),
            Self::Evening => ("19:00", "22:00"),
            Self::Night => ("22:00", "23:59"),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point of interest scheduled into a window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Visit {
    /// Name of the place.
    pub name: String,
    /// Where the place is.
    pub location: Coord<f64>,
    /// Resolved category label.
    pub category: String,
    /// Duration bucket, e.g. `"1-2 hours"`.
    pub duration: String,
    /// Per-person cost range, e.g. `"$15-25"`.
    pub cost_range: String,
    /// Per-person point estimate of `cost_range`.
    pub estimated_cost: u32,
    /// Provider description or a generated one.
    pub description: String,
    /// Provider image or a category placeholder.
    pub image_url: String,
    /// Provider rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f32>,
    /// Set by the traveller once the visit has happened.
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: bool,
}

impl Visit {
    /// Derive a visit from a point of interest.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use itinerant_core::{PointOfInterest, Visit};
    ///
    /// let poi = PointOfInterest::new("Jardim da Estrela", Coord { x: 0.0, y: 0.0 }, ["leisure.park"]);
    /// let visit = Visit::from_poi(&poi);
    /// assert_eq!(visit.category, "park");
    /// assert_eq!(visit.cost_range, "Free");
    /// assert_eq!(visit.estimated_cost, 0);
    /// assert!(visit.description.contains("Jardim da Estrela"));
    /// ```
    #[must_use]
    pub fn from_poi(poi: &PointOfInterest) -> Self {
        let estimate = estimate_for(poi.categories.as_slice());
        let category = category_label(poi.categories.as_slice());
        let description = poi
            .description
            .clone()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| format!("Visit {}, a {category} worth exploring.", poi.name));
        let image_url = poi
            .image_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| placeholder_image(&category));
        Self {
            name: poi.name.clone(),
            location: poi.location,
            duration: estimate.duration.to_owned(),
            cost_range: estimate.cost_range.to_owned(),
            estimated_cost: parse_cost_range(estimate.cost_range),
            description,
            image_url,
            rating: poi.rating,
            completed: false,
            category,
        }
    }

    /// Registry identity of the visited place.
    #[must_use]
    pub fn key(&self) -> PoiKey {
        PoiKey::new(&self.name, self.location)
    }

    /// Estimated cost for the whole party.
    #[must_use]
    pub const fn party_cost(&self, party_size: u32) -> u32 {
        self.estimated_cost.saturating_mul(party_size)
    }
}

fn placeholder_image(category: &str) -> String {
    format!("/images/placeholders/{}.jpg", category.replace(' ', "-"))
}

/// Visits scheduled within one part of a day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimeWindow {
    /// Which part of the day.
    pub period: Period,
    /// Window start as `HH:MM`.
    pub start_time: String,
    /// Window end as `HH:MM`.
    pub end_time: String,
    /// Visits in order.
    pub activities: Vec<Visit>,
    /// Set when the window repeats a place used earlier in the trip.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub relaxed_repeat: bool,
}

impl TimeWindow {
    /// Window with the period's default hours.
    #[must_use]
    pub fn new(period: Period, activities: Vec<Visit>) -> Self {
        let (start, end) = period.hours();
        Self {
            period,
            start_time: start.to_owned(),
            end_time: end.to_owned(),
            activities,
            relaxed_repeat: false,
        }
    }

    /// Mark the window as containing intentional repeats.
    #[must_use]
    pub const fn with_relaxed_repeat(mut self, relaxed: bool) -> Self {
        self.relaxed_repeat = relaxed;
        self
    }

    /// Report whether nothing could be scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// The schedule for one day of the trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DayPlan {
    /// Position in the whole trip, starting at 1.
    pub day_number: u32,
    /// Thematic title.
    pub title: String,
    /// City the day is spent in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<String>,
    /// Windows in chronological order.
    pub time_slots: Vec<TimeWindow>,
}

impl DayPlan {
    /// Iterate over every visit of the day.
    pub fn visits(&self) -> impl Iterator<Item = &Visit> {
        self.time_slots
            .iter()
            .flat_map(|window| window.activities.iter())
    }

    /// Find the window for `period`.
    #[must_use]
    pub fn window(&self, period: Period) -> Option<&TimeWindow> {
        self.time_slots.iter().find(|window| window.period == period)
    }

    /// Estimated cost of the day for the whole party.
    #[must_use]
    pub fn estimated_cost(&self, party_size: u32) -> u32 {
        self.visits()
            .map(|visit| visit.party_cost(party_size))
            .fold(0, u32::saturating_add)
    }

    /// Report whether any window relaxed the no-repeat rule.
    #[must_use]
    pub fn has_relaxed_repeat(&self) -> bool {
        self.time_slots.iter().any(|window| window.relaxed_repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn provider_text_is_preferred_over_fallbacks() {
        let poi = PointOfInterest::new("MAAT", Coord { x: 0.0, y: 0.0 }, ["museum"])
            .with_description("Riverside art and technology museum.")
            .with_image_url("https://img.example/maat.jpg")
            .with_rating(4.4);
        let visit = Visit::from_poi(&poi);
        assert_eq!(visit.description, "Riverside art and technology museum.");
        assert_eq!(visit.image_url, "https://img.example/maat.jpg");
        assert_eq!(visit.rating, Some(4.4));
        assert_eq!(visit.duration, "2-3 hours");
        assert!(!visit.completed);
    }

    #[rstest]
    fn fallback_image_uses_category() {
        let poi = PointOfInterest::new("Padrão", Coord { x: 0.0, y: 0.0 }, ["monument"]);
        assert_eq!(
            Visit::from_poi(&poi).image_url,
            "/images/placeholders/monument.jpg"
        );
    }

    #[rstest]
    #[case(Period::Morning, "09:00", "12:00")]
    #[case(Period::Afternoon, "14:00", "18:00")]
    #[case(Period::Evening, "19:00", "22:00")]
    #[case(Period::Night, "22:00", "23:59")]
    fn windows_use_period_hours(#[case] period: Period, #[case] start: &str, #[case] end: &str) {
        let window = TimeWindow::new(period, Vec::new());
        assert_eq!(window.start_time, start);
        assert_eq!(window.end_time, end);
        assert!(window.is_empty());
    }

    #[rstest]
    fn day_cost_sums_party_costs() {
        let museum = PointOfInterest::new("a", Coord { x: 0.0, y: 0.0 }, ["museum"]);
        let dinner = PointOfInterest::new("b", Coord { x: 0.0, y: 0.0 }, ["restaurant"]);
        let day = DayPlan {
            day_number: 1,
            title: "Test".into(),
            city: None,
            time_slots: vec![
                TimeWindow::new(Period::Morning, vec![Visit::from_poi(&museum)]),
                TimeWindow::new(Period::Evening, vec![Visit::from_poi(&dinner)]),
            ],
        };
        assert_eq!(day.estimated_cost(2), 100);
        assert_eq!(day.visits().count(), 2);
        assert!(day.window(Period::Afternoon).is_none());
    }
}
