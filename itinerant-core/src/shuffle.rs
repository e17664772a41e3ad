//! Seeded, reproducible reordering of candidate lists.
//!
//! Each swap position draws from a 32-bit linear congruential generator
//! seeded with `seed + position`, so the permutation is a pure function of the
//! input order and the seed. Nothing here reads clocks or global RNG state.

/// Multiplier of the Numerical Recipes LCG.
const LCG_MULTIPLIER: u64 = 1_664_525;
/// Increment of the Numerical Recipes LCG.
const LCG_INCREMENT: u64 = 1_013_904_223;
/// Keeps LCG output in 32 bits.
const LCG_MASK: u64 = 0xFFFF_FFFF;

/// Spacing between the seeds of consecutive days.
const DAY_SEED_STRIDE: u64 = 7_919;

/// Salt separating the activity draw from other pools on the same day.
pub const ACTIVITY_SALT: u64 = 0;
/// Salt for dining venues.
pub const DINING_SALT: u64 = 101;
/// Salt for lodging.
pub const LODGING_SALT: u64 = 211;

const fn lcg(state: u64) -> u64 {
    state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
        & LCG_MASK
}

/// Return a reproducible permutation of `items`.
///
/// Identical `(items, seed)` pairs always yield identical orders.
///
/// # Examples
/// ```
/// use itinerant_core::deterministic_shuffle;
///
/// let shuffled = deterministic_shuffle(&[0, 1, 2, 3, 4], 1);
/// assert_eq!(shuffled, vec![0, 2, 1, 4, 3]);
/// assert_eq!(shuffled, deterministic_shuffle(&[0, 1, 2, 3, 4], 1));
/// ```
#[must_use]
pub fn deterministic_shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for remaining in (1..shuffled.len()).rev() {
        let position = remaining as u64;
        let draw = lcg(seed.wrapping_add(position));
        let target = usize::try_from(draw % (position + 1)).unwrap_or(remaining);
        shuffled.swap(remaining, target);
    }
    shuffled
}

/// Seed for one pool on one day of the trip.
///
/// `trip_seed` lets callers request an alternative, still reproducible,
/// itinerary; `salt` keeps pools drawn on the same day independent.
#[must_use]
pub const fn day_seed(trip_seed: u64, day_number: u32, salt: u64) -> u64 {
    trip_seed
        .wrapping_add((day_number as u64).wrapping_mul(DAY_SEED_STRIDE))
        .wrapping_add(salt)
}
