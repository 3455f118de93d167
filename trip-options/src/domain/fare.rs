//! Fares.
//!
//! Fare tables live outside this crate. A calculator sees the whole
//! chronological ride list at once, because a single fare may cover several
//! consecutive rides (a free transfer between two lines, for example). Fares
//! are therefore kept per option rather than per segment.

use serde::{Deserialize, Serialize};

use super::Ride;

/// A priced unit covering one or more consecutive rides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    /// Fare product, e.g. "metrorail" or "bus".
    #[serde(rename = "type")]
    pub kind: String,
    pub low: f64,
    pub peak: f64,
    pub senior: f64,
    /// Whether a transfer discount was applied.
    pub transfer_reduction: bool,
    /// Number of consecutive rides this fare pays for.
    pub ride_count: usize,
}

/// Computes fares for a chronological list of rides.
///
/// Called exactly once per option, with an empty list for options that
/// use no transit.
pub trait FareCalculator: Send + Sync {
    fn calculate_fares(&self, rides: &[Ride]) -> Vec<Fare>;
}

/// A calculator that never charges anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFares;

impl FareCalculator for NoFares {
    fn calculate_fares(&self, _rides: &[Ride]) -> Vec<Fare> {
        Vec::new()
    }
}

/// One flat fare per boarding, with a number of free transfers.
///
/// Consecutive rides share a fare until the transfer allowance runs out,
/// after which a new fare starts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatFareCalculator {
    pub kind: String,
    pub low: f64,
    pub peak: f64,
    pub senior: f64,
    pub free_transfers: usize,
}

impl FlatFareCalculator {
    pub fn new(
        kind: impl Into<String>,
        low: f64,
        peak: f64,
        senior: f64,
        free_transfers: usize,
    ) -> Self {
        Self {
            kind: kind.into(),
            low,
            peak,
            senior,
            free_transfers,
        }
    }
}

impl Default for FlatFareCalculator {
    fn default() -> Self {
        Self::new("flat", 2.0, 2.0, 1.0, 1)
    }
}

impl FareCalculator for FlatFareCalculator {
    fn calculate_fares(&self, rides: &[Ride]) -> Vec<Fare> {
        rides
            .chunks(self.free_transfers.saturating_add(1))
            .map(|group| Fare {
                kind: self.kind.clone(),
                low: self.low,
                peak: self.peak,
                senior: self.senior,
                transfer_reduction: group.len() > 1,
                ride_count: group.len(),
            })
            .collect()
    }
}
