use geo::Coord;

use crate::PoiKey;

/// A place a traveller might visit, as handed over by the fetch layer.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Category tags are free-form provider labels such as `"museum"` or
/// `"tourism.attraction"`; matching against them is always
/// case-insensitive.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use itinerant_core::PointOfInterest;
///
/// let poi = PointOfInterest::new("Belém Tower", Coord { x: -9.2160, y: 38.6916 }, ["monument"])
///     .with_rating(4.6);
///
/// assert_eq!(poi.name, "Belém Tower");
/// assert!(poi.has_category("MONUMENT"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PointOfInterest {
    /// Provider identifier, when the provider has one. Not used for
    /// de-duplication, which relies on [`PointOfInterest::key`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Provider category tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
    /// Aggregate rating, when the provider has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f32>,
    /// Provider description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Provider image URL.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
}

impl PointOfInterest {
    /// Construct a point of interest with the given category tags.
    pub fn new<N, I, C>(name: N, location: Coord<f64>, categories: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            id: None,
            name: name.into(),
            location,
            categories: categories.into_iter().map(Into::into).collect(),
            rating: None,
            description: None,
            image_url: None,
        }
    }

    /// Attach the provider identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach a rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Identity used by the used-places registry.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use itinerant_core::PointOfInterest;
    ///
    /// let a = PointOfInterest::new("Park", Coord { x: 1.0, y: 2.0 }, ["park"]);
    /// let b = PointOfInterest::new("park ", Coord { x: 1.0, y: 2.0 }, ["garden"]);
    /// assert_eq!(a.key(), b.key());
    /// ```
    #[must_use]
    pub fn key(&self) -> PoiKey {
        PoiKey::new(&self.name, self.location)
    }

    /// Report whether any category tag contains `needle`, ignoring case.
    #[must_use]
    pub fn has_category(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.categories
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("museum", true)]
    #[case("Museum", true)]
    #[case("art", true)]
    #[case("park", false)]
    fn category_matching_is_case_insensitive_substring(#[case] needle: &str, #[case] found: bool) {
        let poi = PointOfInterest::new("Gulbenkian", Coord { x: 0.0, y: 0.0 }, ["ART_MUSEUM"]);
        assert_eq!(poi.has_category(needle), found);
    }

    #[rstest]
    fn distinct_locations_yield_distinct_keys() {
        let a = PointOfInterest::new("Cafe", Coord { x: 0.0, y: 0.0 }, ["cafe"]);
        let b = PointOfInterest::new("Cafe", Coord { x: 0.001, y: 0.0 }, ["cafe"]);
        assert_ne!(a.key(), b.key());
    }
}
