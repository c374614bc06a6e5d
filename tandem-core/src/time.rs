//! Simulation time management

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// Simulation time in (abstract) seconds
///
/// SimTime represents a point on the simulation clock. Durations drawn from
/// the seed sequence are plain `f64` values, so time is kept as a float rather
/// than as integer ticks: this keeps every accumulated interval bit-identical
/// to the arithmetic `previous + duration`.
///
/// Ordering is total (`f64::total_cmp`), which lets `SimTime` key a binary heap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(f64);

impl SimTime {
    /// Create a new SimTime at time zero
    pub const fn zero() -> Self {
        SimTime(0.0)
    }

    /// Get the raw value in seconds
    pub const fn as_secs(&self) -> f64 {
        self.0
    }

    /// Elapsed time since an earlier point, in seconds
    pub fn duration_since(&self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Advance this SimTime by `secs`
    pub fn add_secs(&self, secs: f64) -> Self {
        SimTime(self.0 + secs)
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: f64) -> Self::Output {
        self.add_secs(rhs)
    }
}

impl Sub<SimTime> for SimTime {
    type Output = f64;

    fn sub(self, rhs: SimTime) -> Self::Output {
        self.duration_since(rhs)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for SimTime {
    fn default() -> Self {
        SimTime::zero()
    }
}

impl From<f64> for SimTime {
    /// Convert from seconds (as f64) to SimTime
    ///
    /// # Examples
    /// ```
    /// # use tandem_core::SimTime;
    /// let time = SimTime::from(2.5);
    /// assert_eq!(time.as_secs(), 2.5);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the input is negative, infinite, or NaN.
    fn from(secs: f64) -> Self {
        if !secs.is_finite() {
            panic!("SimTime cannot be created from non-finite value: {secs}");
        }
        if secs < 0.0 {
            panic!("SimTime cannot be negative: {secs}");
        }
        SimTime(secs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simtime_arithmetic() {
        let t1 = SimTime::from(2.5);
        let t2 = t1 + 1.5;

        assert_eq!(t2, SimTime::from(4.0));
        assert_eq!(t2 - t1, 1.5);
        assert_eq!(t1.duration_since(t2), -1.5);
    }

    #[test]
    fn test_simtime_ordering() {
        let t1 = SimTime::from(1.0);
        let t2 = SimTime::from(2.0);

        assert!(t1 < t2);
        assert!(t2 > t1);
        assert_eq!(t1.max(t2), t2);
        assert_eq!(SimTime::default(), SimTime::zero());
    }

    #[test]
    fn test_simtime_display() {
        assert_eq!(SimTime::from(2.5).to_string(), "2.5000");
    }

    #[test]
    #[should_panic(expected = "SimTime cannot be negative")]
    fn test_simtime_from_negative_f64() {
        let _ = SimTime::from(-1.0);
    }

    #[test]
    #[should_panic(expected = "SimTime cannot be created from non-finite value")]
    fn test_simtime_from_nan_f64() {
        let _ = SimTime::from(f64::NAN);
    }
}
