//! Identity of places across a build and the registry of places already used.
//!
//! A [`PoiKey`] is derived from a point's name and coordinates so the same
//! place returned by two different pools (or two cities' providers) collapses
//! to a single identity. [`UsedPlaces`] only ever grows; it lives for one
//! itinerary build and is threaded explicitly through every selection.

use std::collections::HashSet;
use std::fmt;

use geo::Coord;

/// Decimal places kept from each coordinate when deriving a key.
const KEY_PRECISION: usize = 5;
/// `10^KEY_PRECISION`.
const KEY_SCALE: f64 = 1e5;

/// Stable identifier for a point of interest.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use itinerant_core::PoiKey;
///
/// let key = PoiKey::new(" Alfama ", Coord { x: -9.13, y: 38.71 });
/// assert_eq!(key.as_str(), "alfama@38.71000,-9.13000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoiKey(String);

impl PoiKey {
    /// Derive a key from a trimmed, lowercased name and rounded coordinates.
    #[must_use]
    pub fn new(name: &str, location: Coord<f64>) -> Self {
        Self(format!(
            "{}@{:.prec$},{:.prec$}",
            name.trim().to_lowercase(),
            rounded(location.y),
            rounded(location.x),
            prec = KEY_PRECISION
        ))
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Round to `KEY_PRECISION` places, folding `-0.0` into `0.0`.
fn rounded(value: f64) -> f64 {
    (value * KEY_SCALE).round() / KEY_SCALE + 0.0
}

impl fmt::Display for PoiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Places already scheduled during the current build.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use itinerant_core::{PoiKey, UsedPlaces};
///
/// let mut used = UsedPlaces::new();
/// let key = PoiKey::new("Rossio", Coord { x: 0.0, y: 0.0 });
/// assert!(used.insert(key.clone()));
/// assert!(!used.insert(key.clone()));
/// assert!(used.contains(&key));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedPlaces {
    keys: HashSet<PoiKey>,
}

impl UsedPlaces {
    /// Construct an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether `key` has been registered.
    #[must_use]
    pub fn contains(&self, key: &PoiKey) -> bool {
        self.keys.contains(key)
    }

    /// Register `key`, returning `true` when it was not yet present.
    pub fn insert(&mut self, key: PoiKey) -> bool {
        self.keys.insert(key)
    }

    /// Number of registered places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Report whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over registered keys in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PoiKey> {
        self.keys.iter()
    }
}

impl FromIterator<PoiKey> for UsedPlaces {
    fn from_iter<I: IntoIterator<Item = PoiKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn key_rounds_coordinates() {
        let a = PoiKey::new("Fountain", Coord { x: 1.000_001, y: 2.0 });
        let b = PoiKey::new("Fountain", Coord { x: 1.000_002, y: 2.0 });
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(-0.0)]
    #[case(-0.000_001)]
    fn keys_ignore_the_sign_of_zero(#[case] lon: f64) {
        let east = PoiKey::new("Meridian", Coord { x: 0.0, y: 51.4779 });
        let west = PoiKey::new("Meridian", Coord { x: lon, y: 51.4779 });
        assert_eq!(east, west);
        assert_eq!(west.as_str(), "meridian@51.47790,0.00000");
    }

    #[rstest]
    fn registry_grows_monotonically() {
        let mut used = UsedPlaces::new();
        assert!(used.is_empty());
        used.insert(PoiKey::new("a", Coord { x: 0.0, y: 0.0 }));
        used.insert(PoiKey::new("b", Coord { x: 0.0, y: 0.0 }));
        used.insert(PoiKey::new("a", Coord { x: 0.0, y: 0.0 }));
        assert_eq!(used.len(), 2);
    }
}
