//! Candidate pools per city and the trait used to look them up.
//!
//! Pools are fetched by an outer layer (possibly concurrently) and handed to
//! the planner read-only. The planner never mutates a pool.

use std::collections::{BTreeMap, HashSet};

use crate::{PoiKey, PointOfInterest};

/// Candidate places for one city, partitioned by role.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CityPools {
    /// General sights.
    pub attractions: Vec<PointOfInterest>,
    /// Museums, galleries, heritage.
    pub culture: Vec<PointOfInterest>,
    /// Parks, beaches, viewpoints.
    pub nature: Vec<PointOfInterest>,
    /// Restaurants and cafes for the evening window.
    pub dining: Vec<PointOfInterest>,
    /// Places to stay.
    pub lodging: Vec<PointOfInterest>,
}

impl CityPools {
    /// Daytime candidates: attractions, then culture, then nature.
    ///
    /// A place listed in more than one pool appears once, at its first
    /// position.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use itinerant_core::{CityPools, PointOfInterest};
    ///
    /// let tower = PointOfInterest::new("Belém Tower", Coord { x: -9.21, y: 38.69 }, ["monument"]);
    /// let pools = CityPools {
    ///     attractions: vec![tower.clone()],
    ///     culture: vec![tower],
    ///     ..CityPools::default()
    /// };
    /// assert_eq!(pools.activities().len(), 1);
    /// ```
    #[must_use]
    pub fn activities(&self) -> Vec<&PointOfInterest> {
        let mut seen: HashSet<PoiKey> = HashSet::new();
        self.attractions
            .iter()
            .chain(&self.culture)
            .chain(&self.nature)
            .filter(|poi| seen.insert(poi.key()))
            .collect()
    }

    /// Dining candidates.
    #[must_use]
    pub fn dining(&self) -> Vec<&PointOfInterest> {
        self.dining.iter().collect()
    }

    /// Lodging candidates.
    #[must_use]
    pub fn lodging(&self) -> Vec<&PointOfInterest> {
        self.lodging.iter().collect()
    }

    /// Report whether every pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
            && self.culture.is_empty()
            && self.nature.is_empty()
            && self.dining.is_empty()
            && self.lodging.is_empty()
    }
}

/// Source of candidate pools for a city.
///
/// Returning `None` means the city is unknown to the provider; the planner
/// skips it and carries on with the remaining cities.
pub trait PoolProvider {
    /// Return the pools for `city`.
    fn pools_for(&self, city: &str) -> Option<CityPools>;
}

impl<P: PoolProvider + ?Sized> PoolProvider for &P {
    fn pools_for(&self, city: &str) -> Option<CityPools> {
        (**self).pools_for(city)
    }
}

/// In-memory pools keyed by city name.
///
/// Lookups ignore case and surrounding whitespace.
///
/// # Examples
/// ```
/// use itinerant_core::{CityPools, PoolCatalog, PoolProvider};
///
/// let catalog = PoolCatalog::new().with_city("Porto", CityPools::default());
/// assert!(catalog.pools_for(" porto ").is_some());
/// assert!(catalog.pools_for("Braga").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PoolCatalog {
    cities: BTreeMap<String, CityPools>,
}

impl PoolCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the pools for `city`.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>, pools: CityPools) -> Self {
        self.insert(city, pools);
        self
    }

    /// Add or replace the pools for `city`.
    pub fn insert(&mut self, city: impl Into<String>, pools: CityPools) {
        self.cities.insert(city.into(), pools);
    }

    /// Iterate over the city names in the catalog.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether the catalog has no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn lookup(&self, city: &str) -> Option<&CityPools> {
        let wanted = city.trim();
        self.cities.get(wanted).or_else(|| {
            let lowered = wanted.to_lowercase();
            self.cities
                .iter()
                .find(|(name, _)| name.trim().to_lowercase() == lowered)
                .map(|(_, pools)| pools)
        })
    }
}

impl PoolProvider for PoolCatalog {
    fn pools_for(&self, city: &str) -> Option<CityPools> {
        self.lookup(city).cloned()
    }
}

impl FromIterator<(String, CityPools)> for PoolCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CityPools)>>(iter: I) -> Self {
        Self {
            cities: iter.into_iter().collect(),
        }
    }
}
