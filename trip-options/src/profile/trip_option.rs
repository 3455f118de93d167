//! Trip options.
//!
//! A `TripOption` is one candidate trip: access legs, a chain of transit
//! segments, egress legs, plus the travel-time statistics, fares and
//! summary text derived from them. Options are built once and never
//! modified; callers keep many of them and rank or filter the collection.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    AccessPath, Fare, FareCalculator, Ride, RouteLookup, Stats, StreetSegment, chronological,
};

use super::Segment;

/// Summary used for options that take no transit.
pub const NON_TRANSIT_SUMMARY: &str = "Non-transit options";

/// One complete candidate trip with its statistics.
#[derive(Debug, Clone, Serialize)]
pub struct TripOption {
    access: Vec<StreetSegment>,
    egress: Vec<StreetSegment>,
    transit: Vec<Segment>,
    stats: Stats,
    fares: Vec<Fare>,
    summary: String,
    #[serde(skip)]
    rides: Vec<Ride>,
}

impl TripOption {
    /// Build an option from the last ride of a chain and street candidates.
    ///
    /// Overall statistics fold in the access legs, the egress legs, then
    /// for each segment its walk, its wait (only when known) and its ride.
    /// The first ride's access is not counted twice: it is already covered
    /// by the access legs. `fares` is consulted exactly once with the full
    /// chronological ride list.
    ///
    /// An option with only access legs still reports `num == 1`; this is a
    /// known approximation rather than a feasibility count.
    pub fn new(
        tail: Option<&Arc<Ride>>,
        access_paths: &[AccessPath],
        egress_paths: &[AccessPath],
        fares: &dyn FareCalculator,
        routes: &dyn RouteLookup,
    ) -> Self {
        let access = StreetSegment::list(access_paths);
        let egress = StreetSegment::list(egress_paths);

        let mut stats = Stats::default();
        stats.add_street(&access);
        stats.add_street(&egress);

        let rides = chronological(tail);
        let mut transit = Vec::with_capacity(rides.len());
        for ride in &rides {
            let segment = Segment::new(ride, routes);
            stats.add(segment.walk_time());
            if let Some(wait) = segment.wait_stats() {
                stats.add(wait);
            }
            stats.add(segment.ride_stats());
            transit.push(segment);
        }

        let fares = fares.calculate_fares(&rides);
        let summary = generate_summary(&transit);

        debug!(
            segments = transit.len(),
            min = stats.min,
            avg = stats.avg,
            max = stats.max,
            num = stats.num,
            fares = fares.len(),
            summary = %summary,
            "built trip option"
        );

        TripOption {
            access,
            egress,
            transit,
            stats,
            fares,
            summary,
            rides,
        }
    }

    /// Returns the access legs.
    pub fn access(&self) -> &[StreetSegment] {
        &self.access
    }

    /// Returns the egress legs.
    pub fn egress(&self) -> &[StreetSegment] {
        &self.egress
    }

    /// Returns the transit segments in boarding order. Empty for
    /// street-only options.
    pub fn transit(&self) -> &[Segment] {
        &self.transit
    }

    /// Returns the rides behind the transit segments, one per segment.
    ///
    /// The first ride's access time and distance are zero.
    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Returns the overall statistics.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the fares. They are not linked to segments, since one fare
    /// may cover several rides.
    pub fn fares(&self) -> &[Fare] {
        &self.fares
    }

    /// Returns the summary text.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns true if this option uses transit.
    pub fn is_transit(&self) -> bool {
        !self.transit.is_empty()
    }

    /// Returns true if any segment has nothing running within the window.
    ///
    /// A segment without wait data does not count as empty. Street-only
    /// options are never empty.
    pub fn has_empty_rides(&self) -> bool {
        self.transit.iter().any(Segment::is_empty)
    }
}

/// Make a human-readable summary of a list of segments.
///
/// # Examples
///
/// ```
/// use trip_options::profile::generate_summary;
///
/// assert_eq!(generate_summary(&[]), "Non-transit options");
/// ```
pub fn generate_summary(transit: &[Segment]) -> String {
    if transit.is_empty() {
        return NON_TRANSIT_SUMMARY.to_string();
    }

    let routes: Vec<String> = transit.iter().map(Segment::route_label).collect();
    // The last alighting stop is the destination, not a via point.
    let vias: Vec<&str> = transit[..transit.len() - 1]
        .iter()
        .map(Segment::to_name)
        .collect();

    let mut summary = format!("routes {}", routes.join(", "));
    if !vias.is_empty() {
        summary.push_str(" via ");
        summary.push_str(&vias.join(", "));
    }
    summary
}
