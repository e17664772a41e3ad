//! Place categories and the travel styles that prefer them.
//!
//! Provider tags are free-form, so [`Category`] gives the engine a closed set
//! of names to reason about while matching stays substring-based. Each
//! [`TravelStyle`] maps to a fixed list of preferred categories; a style the
//! table does not know is kept verbatim and its tag passes through as a
//! category of its own.
//!
//! # Examples
//! ```
//! use itinerant_core::{Category, TravelStyle};
//!
//! assert_eq!(Category::Museum.as_str(), "museum");
//! assert!(TravelStyle::Cultural.categories().contains(&Category::Museum));
//! assert_eq!("foodie".parse::<TravelStyle>(), Ok(TravelStyle::Foodie));
//! ```

use std::fmt;
use std::str::FromStr;

/// Broad kinds of places the engine knows how to reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Museums of any kind.
    Museum,
    /// Galleries and exhibition spaces.
    Gallery,
    /// Sit-down restaurants.
    Restaurant,
    /// Cafes and coffee houses.
    Cafe,
    /// Other food venues.
    Food,
    /// Food and flea markets.
    Market,
    /// Parks and gardens.
    Park,
    /// Natural features such as viewpoints and trails.
    Natural,
    /// Beaches and waterfronts.
    Beach,
    /// Monuments and memorials.
    Monument,
    /// Architectural landmarks.
    Architecture,
    /// Historic sites.
    Historic,
    /// Cultural centres and venues.
    Culture,
    /// Theatres, shows and attractions.
    Entertainment,
    /// Bars and nightlife.
    Nightlife,
    /// Shopping streets and malls.
    Shopping,
    /// Sports and outdoor activity.
    Sport,
    /// Hotels and other lodging.
    Accommodation,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: [Self; 18] = [
        Self::Museum,
        Self::Gallery,
        Self::Restaurant,
        Self::Cafe,
        Self::Food,
        Self::Market,
        Self::Park,
        Self::Natural,
        Self::Beach,
        Self::Monument,
        Self::Architecture,
        Self::Historic,
        Self::Culture,
        Self::Entertainment,
        Self::Nightlife,
        Self::Shopping,
        Self::Sport,
        Self::Accommodation,
    ];

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Museum => "museum",
            Self::Gallery => "gallery",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Food => "food",
            Self::Market => "market",
            Self::Park => "park",
            Self::Natural => "natural",
            Self::Beach => "beach",
            Self::Monument => "monument",
            Self::Architecture => "architecture",
            Self::Historic => "historic",
            Self::Culture => "culture",
            Self::Entertainment => "entertainment",
            Self::Nightlife => "nightlife",
            Self::Shopping => "shopping",
            Self::Sport => "sport",
            Self::Accommodation => "accommodation",
        }
    }

    /// Find the first known category mentioned by `tag`.
    ///
    /// # Examples
    /// ```
    /// use itinerant_core::Category;
    ///
    /// assert_eq!(Category::detect("catering.restaurant"), Some(Category::Restaurant));
    /// assert_eq!(Category::detect("zoo"), None);
    /// ```
    #[must_use]
    pub fn detect(tag: &str) -> Option<Self> {
        let lowered = tag.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| lowered.contains(category.as_str()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Label shown for a visit, derived from its tags.
///
/// The first tag naming a known category wins; otherwise the first raw tag
/// is used, and `"attraction"` when there are no tags at all.
#[must_use]
pub fn category_label<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .find_map(|tag| Category::detect(tag.as_ref()))
        .map(|category| category.as_str().to_owned())
        .or_else(|| tags.first().map(|tag| tag.as_ref().trim().to_lowercase()))
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| "attraction".to_owned())
}

/// How a party likes to travel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum TravelStyle {
    /// A bit of everything.
    #[default]
    Balanced,
    /// Museums, history and architecture.
    Cultural,
    /// Outdoors and physical activity.
    Adventure,
    /// Slow days, parks and beaches.
    Relaxation,
    /// Restaurants, cafes and markets.
    Foodie,
    /// Parks, trails and viewpoints.
    Nature,
    /// Evenings out.
    Nightlife,
    /// Something for every age.
    Family,
    /// Shops and markets.
    Shopping,
    /// A style the table does not know; its tag is used as a category.
    Custom(String),
}

impl TravelStyle {
    /// Return the style tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Balanced => "balanced",
            Self::Cultural => "cultural",
            Self::Adventure => "adventure",
            Self::Relaxation => "relaxation",
            Self::Foodie => "foodie",
            Self::Nature => "nature",
            Self::Nightlife => "nightlife",
            Self::Family => "family",
            Self::Shopping => "shopping",
            Self::Custom(tag) => tag,
        }
    }

    /// Preferred categories for this style.
    ///
    /// Custom styles have no table entry and return an empty slice.
    #[must_use]
    pub fn categories(&self) -> &'static [Category] {
        use Category as C;
        match self {
            Self::Balanced => &[C::Museum, C::Monument, C::Park, C::Culture, C::Historic],
            Self::Cultural => &[
                C::Museum,
                C::Gallery,
                C::Monument,
                C::Historic,
                C::Architecture,
                C::Culture,
            ],
            Self::Adventure => &[C::Natural, C::Park, C::Sport, C::Beach],
            Self::Relaxation => &[C::Park, C::Beach, C::Natural, C::Cafe],
            Self::Foodie => &[C::Restaurant, C::Cafe, C::Food, C::Market],
            Self::Nature => &[C::Natural, C::Park, C::Beach],
            Self::Nightlife => &[C::Nightlife, C::Entertainment, C::Restaurant],
            Self::Family => &[C::Park, C::Museum, C::Entertainment, C::Beach],
            Self::Shopping => &[C::Shopping, C::Market],
            Self::Custom(_) => &[],
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TravelStyle {
    fn from(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "balanced" | "general" | "" => Self::Balanced,
            "cultural" | "culture" => Self::Cultural,
            "adventure" | "adventurous" => Self::Adventure,
            "relaxation" | "relaxed" => Self::Relaxation,
            "foodie" | "food" | "culinary" => Self::Foodie,
            "nature" | "outdoors" => Self::Nature,
            "nightlife" => Self::Nightlife,
            "family" => Self::Family,
            "shopping" => Self::Shopping,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl From<String> for TravelStyle {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<TravelStyle> for String {
    fn from(style: TravelStyle) -> Self {
        style.as_str().to_owned()
    }
}

impl FromStr for TravelStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
