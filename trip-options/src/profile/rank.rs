//! Option ranking for presentation.
//!
//! Options are ordered by one scalar of their overall statistics. Ties are
//! left in input order: sorting is stable.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TripOption;

/// Which statistic to rank options by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Best case first
    Min,
    /// Typical case first
    #[default]
    Avg,
    /// Worst case first
    Max,
}

impl SortOrder {
    /// Returns the comparator for this order.
    pub fn comparator(self) -> fn(&TripOption, &TripOption) -> Ordering {
        match self {
            SortOrder::Min => compare_min,
            SortOrder::Avg => compare_avg,
            SortOrder::Max => compare_max,
        }
    }
}

/// Error returned when parsing an unknown sort order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order {0:?}: expected min, avg or max")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(SortOrder::Min),
            "avg" => Ok(SortOrder::Avg),
            "max" => Ok(SortOrder::Max),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Min => "min",
            SortOrder::Avg => "avg",
            SortOrder::Max => "max",
        })
    }
}

/// Order by minimum overall travel time.
pub fn compare_min(a: &TripOption, b: &TripOption) -> Ordering {
    a.stats().min.cmp(&b.stats().min)
}

/// Order by mean overall travel time.
pub fn compare_avg(a: &TripOption, b: &TripOption) -> Ordering {
    a.stats().avg.cmp(&b.stats().avg)
}

/// Order by maximum overall travel time.
pub fn compare_max(a: &TripOption, b: &TripOption) -> Ordering {
    a.stats().max.cmp(&b.stats().max)
}

/// Rank options best-first by `order`.
pub fn rank_options(mut options: Vec<TripOption>, order: SortOrder) -> Vec<TripOption> {
    options.sort_by(order.comparator());
    options
}

/// Drop options with a segment that nothing runs on within the window.
pub fn remove_empty_rides(options: Vec<TripOption>) -> Vec<TripOption> {
    options
        .into_iter()
        .filter(|option| !option.has_empty_rides())
        .collect()
}
