//! Spending ceilings and the running budget for the day being assembled.

/// How the trip's budget amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BudgetAllocation {
    /// The amount is per person, per day.
    #[default]
    PerDay,
    /// The amount is per person for the whole trip and is spread evenly.
    TripTotal,
}

impl BudgetAllocation {
    /// Per-person daily amount for a trip of `total_days`.
    ///
    /// Trip totals are split with integer floor division; a zero-day trip
    /// keeps the whole amount.
    ///
    /// # Examples
    /// ```
    /// use itinerant_core::BudgetAllocation;
    ///
    /// assert_eq!(BudgetAllocation::PerDay.daily_per_person(100, 4), 100);
    /// assert_eq!(BudgetAllocation::TripTotal.daily_per_person(100, 3), 33);
    /// ```
    #[must_use]
    pub fn daily_per_person(self, amount: u32, total_days: u32) -> u32 {
        match self {
            Self::PerDay => amount,
            Self::TripTotal => amount.checked_div(total_days).unwrap_or(amount),
        }
    }
}

/// Ceiling for one day's visits across the whole party.
#[must_use]
pub const fn day_ceiling(daily_per_person: u32, party_size: u32) -> u32 {
    daily_per_person.saturating_mul(party_size)
}

/// Remaining spend for the day currently being assembled.
///
/// # Examples
/// ```
/// use itinerant_core::RunningBudget;
///
/// let mut budget = RunningBudget::new(50);
/// assert!(budget.can_afford(40));
/// budget.spend(40);
/// assert!(!budget.can_afford(20));
/// assert!(budget.can_afford(0));
/// budget.reset();
/// assert_eq!(budget.remaining(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningBudget {
    ceiling: u32,
    remaining: u32,
}

impl RunningBudget {
    /// Start a budget with the full ceiling available.
    #[must_use]
    pub const fn new(ceiling: u32) -> Self {
        Self {
            ceiling,
            remaining: ceiling,
        }
    }

    /// Restore the full ceiling at the start of a day.
    pub const fn reset(&mut self) {
        self.remaining = self.ceiling;
    }

    /// Daily ceiling.
    #[must_use]
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Amount still available today.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Amount spent since the last reset.
    #[must_use]
    pub const fn spent(&self) -> u32 {
        self.ceiling.saturating_sub(self.remaining)
    }

    /// Free visits are always affordable.
    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        cost == 0 || cost <= self.remaining
    }

    /// Deduct `cost`, never going below zero.
    pub const fn spend(&mut self, cost: u32) {
        self.remaining = self.remaining.saturating_sub(cost);
    }
}

/// Budget figures reported with an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BudgetBreakdown {
    /// How the requested amount was interpreted.
    pub allocation: BudgetAllocation,
    /// Per-person amount for one day.
    pub daily_per_person: u32,
    /// Party-wide ceiling for one day.
    pub daily_ceiling: u32,
    /// Party-wide ceiling for the whole trip.
    pub trip_ceiling: u32,
    /// Sum of all scheduled visits' estimated party cost.
    pub estimated_total: u32,
}
