//! Travel-time distribution summaries.
//!
//! A `Stats` summarizes the travel times a leg (or a whole option) can take
//! across the departure-time window: extremes, mean, and how many feasible
//! combinations contributed.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{DomainError, StreetSegment};

/// Min/avg/max/count summary of travel times, in whole seconds.
///
/// # Invariants
///
/// - `num == 0` means no feasible realization; all values are then zero
/// - `min <= avg <= max` whenever `num > 0`
///
/// Sample counts saturate at `u32::MAX`. The mean is still weighted by the
/// true counts, so a saturated merge keeps a correct `avg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawStats")]
pub struct Stats {
    pub min: i32,
    pub avg: i32,
    pub max: i32,
    pub num: u32,
}

#[derive(Deserialize)]
struct RawStats {
    min: i32,
    avg: i32,
    max: i32,
    num: u32,
}

impl TryFrom<RawStats> for Stats {
    type Error = DomainError;

    fn try_from(raw: RawStats) -> Result<Self, Self::Error> {
        Stats::new(raw.min, raw.avg, raw.max, raw.num)
    }
}

/// Convert a duration to whole seconds, saturating at the `i32` range.
pub(crate) fn to_seconds(duration: Duration) -> i32 {
    let secs = duration.num_seconds();
    i32::try_from(secs).unwrap_or(if secs < 0 { i32::MIN } else { i32::MAX })
}

impl Stats {
    /// Construct a validated distribution.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `num > 0` and the values are not ordered, or if
    /// `num == 0` and any value is non-zero.
    pub fn new(min: i32, avg: i32, max: i32, num: u32) -> Result<Self, DomainError> {
        if num == 0 {
            if min != 0 || avg != 0 || max != 0 {
                return Err(DomainError::InvalidStats(
                    "empty distribution must have zero values",
                ));
            }
            return Ok(Stats::default());
        }
        if min > avg {
            return Err(DomainError::InvalidStats("min must not exceed avg"));
        }
        if avg > max {
            return Err(DomainError::InvalidStats("avg must not exceed max"));
        }
        Ok(Stats { min, avg, max, num })
    }

    /// A single deterministic sample.
    pub fn single(seconds: i32) -> Self {
        Stats {
            min: seconds,
            avg: seconds,
            max: seconds,
            num: 1,
        }
    }

    /// Summarize raw samples. No samples gives the empty distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_options::domain::Stats;
    ///
    /// let stats = Stats::from_samples([300, 600, 900]);
    /// assert_eq!((stats.min, stats.avg, stats.max, stats.num), (300, 600, 900, 3));
    ///
    /// assert!(Stats::from_samples(std::iter::empty()).is_empty());
    /// ```
    pub fn from_samples(samples: impl IntoIterator<Item = i32>) -> Self {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        let mut sum: i128 = 0;
        let mut num: u64 = 0;

        for sample in samples {
            min = min.min(sample);
            max = max.max(sample);
            sum += i128::from(sample);
            num += 1;
        }

        if num == 0 {
            return Stats::default();
        }

        Stats {
            min,
            avg: rounded_mean(sum, i128::from(num)),
            max,
            num: saturate_count(num),
        }
    }

    /// Returns true if no feasible realization contributed.
    pub fn is_empty(&self) -> bool {
        self.num == 0
    }

    /// Fold another distribution into this one.
    ///
    /// Sample counts sum, extremes widen, and the mean is weighted by
    /// sample count. Folding in an empty distribution changes nothing, and
    /// folding anything into an empty one copies it.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_options::domain::Stats;
    ///
    /// let mut stats = Stats::new(100, 200, 300, 1).unwrap();
    /// stats.add(&Stats::new(50, 500, 600, 3).unwrap());
    ///
    /// assert_eq!(stats.num, 4);
    /// assert_eq!(stats.min, 50);
    /// assert_eq!(stats.max, 600);
    /// assert_eq!(stats.avg, 425);
    /// ```
    pub fn add(&mut self, other: &Stats) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        let num = u64::from(self.num) + u64::from(other.num);
        let total = i128::from(self.avg) * i128::from(self.num)
            + i128::from(other.avg) * i128::from(other.num);

        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.avg = rounded_mean(total, i128::from(num));
        self.num = saturate_count(num);
    }

    /// Fold in a list of street legs.
    ///
    /// The legs' durations are first reduced to a distribution of their
    /// own (a single leg is one deterministic sample), which is then merged
    /// like any other. An empty list changes nothing.
    pub fn add_street(&mut self, segments: &[StreetSegment]) {
        let street = Stats::from_samples(segments.iter().map(|s| to_seconds(s.duration())));
        self.add(&street);
    }

    /// Returns the minimum as a `Duration`.
    pub fn min_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.min))
    }

    /// Returns the mean as a `Duration`.
    pub fn avg_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.avg))
    }

    /// Returns the maximum as a `Duration`.
    pub fn max_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.max))
    }
}

/// Mean of `total / num`, rounded half up. `num` must be positive.
///
/// `total` is at most `u32::MAX` samples of `i32` per side, so `2 * total`
/// stays far inside `i128`.
fn rounded_mean(total: i128, num: i128) -> i32 {
    let mean = (2 * total + num).div_euclid(2 * num);
    // The mean of i32 samples always fits in i32.
    i32::try_from(mean).unwrap_or(if mean < 0 { i32::MIN } else { i32::MAX })
}

fn saturate_count(num: u64) -> u32 {
    u32::try_from(num).unwrap_or(u32::MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a populated distribution.
    fn stats_strategy() -> impl Strategy<Value = Stats> {
        (0i32..7200, 0i32..3600, 0i32..3600, 1u32..50).prop_map(|(min, a, b, num)| {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            Stats::new(min, min + lo, min + hi, num).unwrap()
        })
    }

    fn merged(parts: &[Stats]) -> Stats {
        let mut stats = Stats::default();
        for part in parts {
            stats.add(part);
        }
        stats
    }

    proptest! {
        #[test]
        fn add_sums_num(parts in prop::collection::vec(stats_strategy(), 0..8)) {
            let stats = merged(&parts);
            let expected: u32 = parts.iter().map(|s| s.num).sum();
            prop_assert_eq!(stats.num, expected);
        }

        #[test]
        fn add_num_is_associative(
            a in stats_strategy(),
            b in stats_strategy(),
            c in stats_strategy(),
        ) {
            let mut left = a;
            left.add(&b);
            left.add(&c);

            let mut bc = b;
            bc.add(&c);
            let mut right = a;
            right.add(&bc);

            prop_assert_eq!(left.num, right.num);
            prop_assert_eq!(left.min, right.min);
            prop_assert_eq!(left.max, right.max);
        }

        #[test]
        fn add_bounds_extremes(parts in prop::collection::vec(stats_strategy(), 1..8)) {
            let stats = merged(&parts);
            for part in &parts {
                prop_assert!(stats.min <= part.min);
                prop_assert!(stats.max >= part.max);
            }
        }

        #[test]
        fn add_keeps_avg_between_extremes(parts in prop::collection::vec(stats_strategy(), 1..8)) {
            let stats = merged(&parts);
            prop_assert!(stats.min <= stats.avg);
            prop_assert!(stats.avg <= stats.max);
        }

        #[test]
        fn from_samples_matches_reference(samples in prop::collection::vec(0i32..100_000, 1..40)) {
            let stats = Stats::from_samples(samples.iter().copied());
            prop_assert_eq!(stats.min, *samples.iter().min().unwrap());
            prop_assert_eq!(stats.max, *samples.iter().max().unwrap());
            prop_assert_eq!(stats.num as usize, samples.len());
            prop_assert!(stats.min <= stats.avg && stats.avg <= stats.max);
        }
    }
}
