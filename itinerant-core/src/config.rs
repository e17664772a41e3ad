//! Tunables for the itinerary builder.

/// Divisor of a window's target below which the scarcity pass runs.
pub const SCARCITY_DIVISOR: usize = 2;
/// Lodging is recommended on day 1 and every Nth day after.
pub const LODGING_CADENCE: u32 = 3;

/// Configuration for [`ItineraryPlanner`](crate::ItineraryPlanner).
///
/// # Examples
/// ```
/// use itinerant_core::PlannerConfig;
///
/// let config = PlannerConfig::default().with_seed(7).with_lodging(false);
/// assert_eq!(config.seed, 7);
/// assert!(!config.include_lodging);
/// assert_eq!(config.scarcity_divisor, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PlannerConfig {
    /// A selection shorter than `target / scarcity_divisor` (at least one)
    /// triggers the scarcity pass.
    pub scarcity_divisor: usize,
    /// Days between lodging recommendations, counting from day 1.
    pub lodging_cadence: u32,
    /// Whether to add the night lodging window at all.
    pub include_lodging: bool,
    /// Offset for every day seed.
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            scarcity_divisor: SCARCITY_DIVISOR,
            lodging_cadence: LODGING_CADENCE,
            include_lodging: true,
            seed: 0,
        }
    }
}

impl PlannerConfig {
    /// Replace the scarcity divisor. Zero behaves like one.
    #[must_use]
    pub const fn with_scarcity_divisor(mut self, divisor: usize) -> Self {
        self.scarcity_divisor = divisor;
        self
    }

    /// Replace the lodging cadence. Zero limits lodging to day 1.
    #[must_use]
    pub const fn with_lodging_cadence(mut self, cadence: u32) -> Self {
        self.lodging_cadence = cadence;
        self
    }

    /// Enable or disable lodging recommendations.
    #[must_use]
    pub const fn with_lodging(mut self, include: bool) -> Self {
        self.include_lodging = include;
        self
    }

    /// Choose an alternative, still reproducible, shuffle.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Report whether `day_number` gets a lodging recommendation.
    ///
    /// # Examples
    /// ```
    /// use itinerant_core::PlannerConfig;
    ///
    /// let config = PlannerConfig::default();
    /// let days: Vec<u32> = (1..=7).filter(|day| config.is_lodging_day(*day)).collect();
    /// assert_eq!(days, vec![1, 3, 6]);
    /// ```
    #[must_use]
    pub fn is_lodging_day(&self, day_number: u32) -> bool {
        if !self.include_lodging {
            return false;
        }
        day_number == 1
            || day_number
                .checked_rem(self.lodging_cadence)
                .is_some_and(|remainder| remainder == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 9, vec![1, 3, 6, 9])]
    #[case(2, 6, vec![1, 2, 4, 6])]
    #[case(0, 5, vec![1])]
    fn lodging_days_follow_cadence(
        #[case] cadence: u32,
        #[case] days: u32,
        #[case] expected: Vec<u32>,
    ) {
        let config = PlannerConfig::default().with_lodging_cadence(cadence);
        let lodging: Vec<u32> = (1..=days).filter(|day| config.is_lodging_day(*day)).collect();
        assert_eq!(lodging, expected);
    }

    #[rstest]
    fn disabled_lodging_skips_day_one() {
        let config = PlannerConfig::default().with_lodging(false);
        assert!(!config.is_lodging_day(1));
    }
}
