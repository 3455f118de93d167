//! Serde types for scenario JSON.
//!
//! These mirror the file layout. They are converted to domain types
//! after validation.

use serde::Deserialize;

use crate::domain::{AccessPath, FlatFareCalculator, RouteId, RouteShort, Stats, Stop, StopId};
use crate::profile::ProfileConfig;

/// Top-level scenario file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScenario {
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub routes: Vec<RouteShort>,
    /// Flat fare rules; no fares are charged when absent.
    #[serde(default)]
    pub fares: Option<FlatFareCalculator>,
    #[serde(default)]
    pub config: ProfileConfig,
    pub options: Vec<RawOption>,
}

/// One candidate option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOption {
    #[serde(default)]
    pub access: Vec<AccessPath>,
    #[serde(default)]
    pub egress: Vec<AccessPath>,
    /// Rides of the chain, linked by `previous` indices.
    #[serde(default)]
    pub rides: Vec<RawRide>,
    /// Index of the last ride; defaults to the last listed ride.
    #[serde(default)]
    pub tail: Option<usize>,
}

/// One ride, referring to its predecessor by index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRide {
    pub from: StopId,
    pub to: StopId,
    #[serde(default)]
    pub patterns: Vec<RawPattern>,
    /// Access time in seconds.
    #[serde(default)]
    pub access_time: u32,
    /// Access distance in metres.
    #[serde(default)]
    pub access_dist: f64,
    #[serde(default)]
    pub previous: Option<usize>,
}

/// One pattern serving a ride.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPattern {
    pub route: RouteId,
    pub ride_stats: Stats,
    #[serde(default)]
    pub wait_stats: Option<Stats>,
}
