//! Access and egress street legs.
//!
//! The street router reports, for each nearby stop, how long it takes to
//! get there by each mode. Those raw candidates are turned into immutable
//! `StreetSegment`s for presentation and statistics.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::StopId;

/// Non-transit mode used on a street leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetMode {
    Walk,
    Bicycle,
    Car,
    BikeRental,
}

/// A raw access or egress candidate from the street router.
///
/// Reaching `stop` takes `duration` by `mode` over `distance` metres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessPath {
    pub stop: StopId,
    pub mode: StreetMode,
    #[serde(with = "super::seconds")]
    pub duration: Duration,
    pub distance: f64,
}

impl AccessPath {
    pub fn new(stop: StopId, mode: StreetMode, duration: Duration, distance: f64) -> Self {
        Self {
            stop,
            mode,
            duration,
            distance,
        }
    }
}

/// One access or egress leg of an option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreetSegment {
    stop: StopId,
    mode: StreetMode,
    #[serde(rename = "time", serialize_with = "super::seconds::serialize")]
    duration: Duration,
    distance: f64,
}

impl StreetSegment {
    /// Create a street leg.
    pub fn new(stop: StopId, mode: StreetMode, duration: Duration, distance: f64) -> Self {
        Self {
            stop,
            mode,
            duration,
            distance,
        }
    }

    /// Reduce raw candidates to street legs, one per candidate, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_options::domain::{AccessPath, StopId, StreetMode, StreetSegment};
    /// use chrono::Duration;
    ///
    /// let stop = StopId::parse("S1").unwrap();
    /// let paths = vec![
    ///     AccessPath::new(stop.clone(), StreetMode::Walk, Duration::minutes(7), 560.0),
    ///     AccessPath::new(stop, StreetMode::Bicycle, Duration::minutes(3), 610.0),
    /// ];
    ///
    /// let segments = StreetSegment::list(&paths);
    /// assert_eq!(segments.len(), 2);
    /// assert_eq!(segments[1].mode(), StreetMode::Bicycle);
    /// ```
    pub fn list(paths: &[AccessPath]) -> Vec<StreetSegment> {
        paths.iter().map(StreetSegment::from).collect()
    }

    /// Returns the stop this leg reaches (or leaves from, for egress).
    pub fn stop(&self) -> &StopId {
        &self.stop
    }

    /// Returns the street mode.
    pub fn mode(&self) -> StreetMode {
        self.mode
    }

    /// Returns the travel time.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the distance in metres.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl From<&AccessPath> for StreetSegment {
    fn from(path: &AccessPath) -> Self {
        StreetSegment::new(path.stop.clone(), path.mode, path.duration, path.distance)
    }
}
