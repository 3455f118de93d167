//! Presentable transit segments.

use serde::Serialize;
use tracing::warn;

use crate::domain::{Ride, RouteLookup, RouteShort, Stats, StopId, to_seconds};

/// One ride of an option, with the statistics shown to a rider.
///
/// Built one-to-one from a `Ride` and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    from: StopId,
    to: StopId,
    from_name: String,
    to_name: String,
    routes: Vec<RouteShort>,
    walk_time: Stats,
    walk_dist: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_stats: Option<Stats>,
    ride_stats: Stats,
}

impl Segment {
    /// Build a segment from a ride, resolving route names through `routes`.
    ///
    /// Routes the lookup does not know are shown by their id.
    pub fn new(ride: &Ride, routes: &dyn RouteLookup) -> Self {
        let routes = ride
            .route_ids()
            .into_iter()
            .map(|id| {
                routes.route(id).unwrap_or_else(|| {
                    warn!(route = %id, "unknown route, using id as name");
                    RouteShort::unnamed(id.clone())
                })
            })
            .collect();

        Segment {
            from: ride.from().id.clone(),
            to: ride.to().id.clone(),
            from_name: ride.from().name.clone(),
            to_name: ride.to().name.clone(),
            routes,
            walk_time: Stats::single(to_seconds(ride.access_time)),
            walk_dist: ride.access_dist,
            wait_stats: ride.wait_stats(),
            ride_stats: ride.ride_stats(),
        }
    }

    /// Returns the boarding stop.
    pub fn from(&self) -> &StopId {
        &self.from
    }

    /// Returns the alighting stop.
    pub fn to(&self) -> &StopId {
        &self.to
    }

    /// Returns the boarding stop name.
    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    /// Returns the alighting stop name.
    pub fn to_name(&self) -> &str {
        &self.to_name
    }

    /// Returns the routes serving this segment.
    pub fn routes(&self) -> &[RouteShort] {
        &self.routes
    }

    /// Returns the time to reach the boarding stop.
    pub fn walk_time(&self) -> &Stats {
        &self.walk_time
    }

    /// Returns the distance to reach the boarding stop, in metres.
    pub fn walk_dist(&self) -> f64 {
        self.walk_dist
    }

    /// Returns the wait before boarding, if known.
    pub fn wait_stats(&self) -> Option<&Stats> {
        self.wait_stats.as_ref()
    }

    /// Returns the in-vehicle time.
    pub fn ride_stats(&self) -> &Stats {
        &self.ride_stats
    }

    /// Route display names joined with `/`, e.g. `"S2/S9"`.
    pub fn route_label(&self) -> String {
        self.routes
            .iter()
            .map(RouteShort::display_name)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Returns true if nothing runs on this segment within the window.
    ///
    /// An absent wait distribution does not count as empty.
    pub fn is_empty(&self) -> bool {
        self.ride_stats.is_empty() || self.wait_stats.is_some_and(|w| w.is_empty())
    }
}
