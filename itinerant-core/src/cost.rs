//! Visit duration and cost estimates derived from category tags.
//!
//! Providers rarely publish prices, so the engine guesses from what a place
//! is. [`estimate_for`] walks a fixed priority table and [`parse_cost_range`]
//! turns the resulting range text back into a per-person dollar amount.
//!
//! # Examples
//! ```
//! use itinerant_core::cost::{estimate_for, parse_cost_range};
//!
//! let estimate = estimate_for(&["Art Museum"]);
//! assert_eq!(estimate.duration, "2-3 hours");
//! assert_eq!(estimate.cost_range, "$15-25");
//! assert_eq!(parse_cost_range(estimate.cost_range), 20);
//! ```

use crate::PointOfInterest;

/// Per-person amount assumed when a cost range cannot be parsed.
pub const UNPARSABLE_COST: u32 = 20;

/// Estimated time on site and spend for one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostEstimate {
    /// Duration bucket, e.g. `"1-2 hours"`.
    pub duration: &'static str,
    /// Per-person cost range, e.g. `"$10-30"` or `"Free"`.
    pub cost_range: &'static str,
}

/// Estimate used when no table row matches.
pub const DEFAULT_ESTIMATE: CostEstimate = CostEstimate {
    duration: "1-2 hours",
    cost_range: "$10-30",
};

/// Rows are checked in order; the first row with a matching needle wins.
const COST_TABLE: [(&[&str], CostEstimate); 4] = [
    (
        &["museum"],
        CostEstimate {
            duration: "2-3 hours",
            cost_range: "$15-25",
        },
    ),
    (
        &["restaurant", "food"],
        CostEstimate {
            duration: "1-1.5 hours",
            cost_range: "$20-40",
        },
    ),
    (
        &["park", "natural"],
        CostEstimate {
            duration: "1-2 hours",
            cost_range: "Free",
        },
    ),
    (
        &["monument", "architecture"],
        CostEstimate {
            duration: "30min-1 hour",
            cost_range: "$10-20",
        },
    ),
];

/// Pick the duration bucket and cost range for a set of category tags.
///
/// Matching is a case-insensitive substring test of each needle against each
/// tag.
#[must_use]
pub fn estimate_for<S: AsRef<str>>(tags: &[S]) -> CostEstimate {
    let lowered: Vec<String> = tags.iter().map(|tag| tag.as_ref().to_lowercase()).collect();
    COST_TABLE
        .iter()
        .find(|(needles, _)| {
            needles
                .iter()
                .any(|needle| lowered.iter().any(|tag| tag.contains(needle)))
        })
        .map_or(DEFAULT_ESTIMATE, |(_, estimate)| *estimate)
}

/// Convert cost-range text to a per-person point estimate in whole dollars.
///
/// - anything mentioning "free" is `0`;
/// - a single number is taken as-is;
/// - a range uses the rounded average of its first two numbers;
/// - text without numbers falls back to [`UNPARSABLE_COST`].
///
/// Fractional parts are ignored and thousands separators are dropped.
///
/// # Examples
/// ```
/// use itinerant_core::cost::parse_cost_range;
///
/// assert_eq!(parse_cost_range("Free"), 0);
/// assert_eq!(parse_cost_range("$20"), 20);
/// assert_eq!(parse_cost_range("$20-40"), 30);
/// assert_eq!(parse_cost_range("ask at the door"), 20);
/// ```
#[must_use]
pub fn parse_cost_range(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    if lowered.contains("free") {
        return 0;
    }
    let ungrouped = strip_digit_grouping(&lowered);
    let mut amounts = ungrouped
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter_map(|token| token.split('.').next())
        .filter(|whole| !whole.is_empty())
        .filter_map(|whole| whole.parse::<u32>().ok());
    match (amounts.next(), amounts.next()) {
        (Some(low), Some(high)) => rounded_average(low, high),
        (Some(single), None) => single,
        _ => UNPARSABLE_COST,
    }
}

/// Drop commas used as thousands separators, as in `$1,200`.
fn strip_digit_grouping(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let grouped = c == ','
                && i.checked_sub(1)
                    .and_then(|prev| chars.get(prev))
                    .is_some_and(char::is_ascii_digit)
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            !grouped
        })
        .map(|(_, &c)| c)
        .collect()
}

fn rounded_average(low: u32, high: u32) -> u32 {
    let sum = u64::from(low) + u64::from(high);
    u32::try_from(sum.div_ceil(2)).unwrap_or(u32::MAX)
}

/// Per-person cost estimate for a point of interest.
#[must_use]
pub fn estimated_cost(poi: &PointOfInterest) -> u32 {
    parse_cost_range(estimate_for(poi.categories.as_slice()).cost_range)
}

/// Cost of visiting `poi` for the whole party.
#[must_use]
pub fn party_cost(poi: &PointOfInterest, party_size: u32) -> u32 {
    estimated_cost(poi).saturating_mul(party_size)
}
