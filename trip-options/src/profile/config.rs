//! Configuration for building and presenting options.

use serde::Deserialize;

use super::SortOrder;

/// Parameters for turning candidate ride chains into ranked options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Statistic to rank options by.
    pub order: SortOrder,

    /// Maximum number of options to return.
    pub max_options: usize,

    /// Drop options with a segment that nothing runs on within the window.
    pub drop_empty_rides: bool,
}

impl ProfileConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(order: SortOrder, max_options: usize, drop_empty_rides: bool) -> Self {
        Self {
            order,
            max_options,
            drop_empty_rides,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::Avg,
            max_options: 10,
            drop_empty_rides: true,
        }
    }
}
