//! How many visits fit into each window of a day.

use std::fmt;
use std::str::FromStr;

/// Density of a day's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pacing {
    /// One thing at a time.
    Relaxed,
    /// The usual pace.
    #[default]
    Moderate,
    /// Pack the day.
    Fast,
}

impl Pacing {
    /// Base visits for (morning, afternoon, evening).
    const fn base(self) -> (u32, u32, u32) {
        match self {
            Self::Relaxed => (1, 1, 1),
            Self::Moderate => (2, 2, 1),
            Self::Fast => (2, 3, 2),
        }
    }

    /// Return the pacing tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Moderate => "moderate",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "moderate" => Ok(Self::Moderate),
            "fast" => Ok(Self::Fast),
            _ => Err(format!("unknown pacing '{s}'")),
        }
    }
}

/// How active the party wants to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActivityLevel {
    /// Scale window capacity by 0.8.
    Low,
    /// Leave capacity unchanged.
    #[default]
    Medium,
    /// Scale window capacity by 1.2.
    High,
}

impl ActivityLevel {
    /// Capacity multiplier expressed in percent.
    const fn percent(self) -> u32 {
        match self {
            Self::Low => 80,
            Self::Medium => 100,
            Self::High => 120,
        }
    }

    /// Return the activity level tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown activity level '{s}'")),
        }
    }
}

/// Visit capacity of the three standard windows.
///
/// # Examples
/// ```
/// use itinerant_core::{ActivityLevel, Pacing, WindowCapacity};
///
/// let capacity = WindowCapacity::for_pace(Pacing::Fast, ActivityLevel::High);
/// assert_eq!((capacity.morning, capacity.afternoon, capacity.evening), (2, 4, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCapacity {
    /// Activities before lunch.
    pub morning: usize,
    /// Activities after lunch.
    pub afternoon: usize,
    /// Dining venues in the evening.
    pub evening: usize,
}

impl WindowCapacity {
    /// Scale the pacing table by the activity level, rounding to the
    /// nearest whole visit and never going below one.
    #[must_use]
    pub fn for_pace(pacing: Pacing, level: ActivityLevel) -> Self {
        let (morning, afternoon, evening) = pacing.base();
        let percent = level.percent();
        Self {
            morning: scaled(morning, percent),
            afternoon: scaled(afternoon, percent),
            evening: scaled(evening, percent),
        }
    }
}

fn scaled(base: u32, percent: u32) -> usize {
    let rounded = (base * percent + 50) / 100;
    usize::try_from(rounded.max(1)).unwrap_or(1)
}
