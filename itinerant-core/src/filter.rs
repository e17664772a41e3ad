//! Narrow candidates to the categories a travel style cares about.
//!
//! Filtering never removes the last available option: when nothing matches,
//! the unfiltered candidates come back unchanged.

use crate::{PointOfInterest, TravelStyle};

/// Expand a style and the traveller's own interests into category needles.
///
/// The style's table entry comes first, followed by each interest as given
/// (lowercased), so an interest the table does not know still passes through.
/// A custom style contributes its own tag. Duplicates are dropped.
///
/// # Examples
/// ```
/// use itinerant_core::{TravelStyle, relevant_categories};
///
/// let needles = relevant_categories(&TravelStyle::Nature, &["Wine".to_owned()]);
/// assert_eq!(needles, vec!["natural", "park", "beach", "wine"]);
/// ```
#[must_use]
pub fn relevant_categories(style: &TravelStyle, interests: &[String]) -> Vec<String> {
    let from_table = style
        .categories()
        .iter()
        .map(|category| category.as_str().to_owned());
    let custom = match style {
        TravelStyle::Custom(tag) => Some(tag.trim().to_lowercase()),
        _ => None,
    };
    let passthrough = interests.iter().map(|interest| interest.trim().to_lowercase());

    let mut needles: Vec<String> = Vec::new();
    for needle in from_table.chain(custom).chain(passthrough) {
        if !needle.is_empty() && !needles.contains(&needle) {
            needles.push(needle);
        }
    }
    needles
}

/// Keep candidates whose tags mention any of `needles`.
///
/// Falls back to every candidate when no needle is given or nothing
/// matches.
#[must_use]
pub fn filter_relevant<'a>(
    candidates: &[&'a PointOfInterest],
    needles: &[String],
) -> Vec<&'a PointOfInterest> {
    if needles.is_empty() {
        return candidates.to_vec();
    }
    let matching: Vec<&PointOfInterest> = candidates
        .iter()
        .copied()
        .filter(|poi| needles.iter().any(|needle| poi.has_category(needle)))
        .collect();
    if matching.is_empty() {
        log::debug!(
            "no candidate matched {} relevant categories; keeping all {}",
            needles.len(),
            candidates.len()
        );
        return candidates.to_vec();
    }
    matching
}
