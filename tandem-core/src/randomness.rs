//! Deterministic randomness for replayable simulation.
//!
//! This module is intentionally small. It provides:
//! - `create_seeds`: expands one seed into a fixed sequence of draws.
//! - `Limits`: a closed `[lo, hi]` interval that draws are mapped onto.
//! - `SeedCursor`: consumes the sequence one draw at a time.
//!
//! Every random quantity in a run comes from a `SeedCursor`, so a run is a pure
//! function of its configuration and seed sequence.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Expand `seed` into `n` values with the recurrence `x' = (5x) mod 1`.
///
/// ```
/// # use tandem_core::randomness::create_seeds;
/// assert_eq!(create_seeds(0.3, 3), vec![0.3, 0.5, 0.5]);
/// ```
pub fn create_seeds(seed: f64, n: usize) -> Vec<f64> {
    std::iter::successors(Some(seed), |x| Some((x * 5.0).rem_euclid(1.0)))
        .take(n)
        .collect()
}

/// A closed interval `[lo, hi]` that seed values are mapped onto.
///
/// Serialized as a two-element array, e.g. `[1.0, 2.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Limits {
    pub lo: f64,
    pub hi: f64,
}

impl Limits {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Map a value in `[0, 1)` onto the interval.
    pub fn map(&self, unit: f64) -> f64 {
        (self.hi - self.lo) * unit + self.lo
    }

    /// True when both ends are finite, non-negative and ordered.
    pub fn is_valid(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && 0.0 <= self.lo && self.lo <= self.hi
    }
}

impl From<[f64; 2]> for Limits {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<Limits> for [f64; 2] {
    fn from(limits: Limits) -> Self {
        [limits.lo, limits.hi]
    }
}

/// Read position over a finite seed sequence.
///
/// Once `index == seeds.len()` the cursor is exhausted: further draws return
/// 0.0 and leave the index where it is.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCursor {
    seeds: Vec<f64>,
    index: usize,
}

impl SeedCursor {
    pub fn new(seeds: Vec<f64>) -> Self {
        Self { seeds, index: 0 }
    }

    /// Consume one seed and map it onto `limits`.
    pub fn draw(&mut self, limits: &Limits) -> f64 {
        let Some(&seed) = self.seeds.get(self.index) else {
            debug!(
                consumed = self.index,
                "Seed sequence exhausted, degenerate draw of 0"
            );
            return 0.0;
        };
        self.index += 1;
        let value = limits.map(seed);
        trace!(index = self.index - 1, seed, value, "Draw");
        value
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.seeds.len()
    }

    /// Number of seeds consumed so far
    pub fn consumed(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.seeds.len() - self.index
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_seeds_fixed_point() {
        assert_eq!(create_seeds(0.5, 4), vec![0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_create_seeds_recurrence() {
        let seeds = create_seeds(0.3, 3);
        assert_eq!(seeds, vec![0.3, 0.5, 0.5]);

        let seeds = create_seeds(0.1, 3);
        assert_eq!(seeds[0], 0.1);
        assert_eq!(seeds[1], (0.1f64 * 5.0) % 1.0);
        assert_eq!(seeds[2], (seeds[1] * 5.0) % 1.0);
    }

    #[test]
    fn test_create_seeds_is_reproducible() {
        assert_eq!(create_seeds(0.9920, 50), create_seeds(0.9920, 50));
        assert!(create_seeds(0.9920, 0).is_empty());
    }

    #[test]
    fn test_limits_map() {
        let limits = Limits::new(1.0, 3.0);
        assert_eq!(limits.map(0.0), 1.0);
        assert_eq!(limits.map(0.5), 2.0);
        assert!(limits.is_valid());
        assert!(!Limits::new(3.0, 1.0).is_valid());
        assert!(!Limits::new(-1.0, 1.0).is_valid());
        assert!(!Limits::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_limits_serde_as_pair() {
        let limits: Limits = serde_json::from_str("[2, 5]").unwrap();
        assert_eq!(limits, Limits::new(2.0, 5.0));
        assert_eq!(serde_json::to_string(&limits).unwrap(), "[2.0,5.0]");
    }

    #[test]
    fn test_cursor_consumes_one_seed_per_draw() {
        let mut cursor = SeedCursor::new(vec![0.5, 0.25]);
        let limits = Limits::new(1.0, 2.0);

        assert_eq!(cursor.draw(&limits), 1.5);
        assert_eq!(cursor.consumed(), 1);
        assert_eq!(cursor.draw(&limits), 1.25);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_exhausted_cursor_draws_zero_without_advancing() {
        let mut cursor = SeedCursor::new(vec![0.5]);
        let limits = Limits::new(1.0, 2.0);
        cursor.draw(&limits);

        assert_eq!(cursor.draw(&limits), 0.0);
        assert_eq!(cursor.draw(&limits), 0.0);
        assert_eq!(cursor.consumed(), 1);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_empty_cursor_is_exhausted() {
        let cursor = SeedCursor::new(Vec::new());
        assert!(cursor.is_exhausted());
        assert!(cursor.is_empty());
    }
}
