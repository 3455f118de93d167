//! Building many options at once.
//!
//! Each candidate ride chain becomes an option independently of the
//! others, so candidates are built in parallel. The fare calculator and
//! route lookup are shared read-only.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{AccessPath, FareCalculator, Ride, RouteLookup};

use super::config::ProfileConfig;
use super::rank::{rank_options, remove_empty_rides};
use super::TripOption;

/// Inputs for one candidate option.
#[derive(Debug, Clone)]
pub struct OptionRequest {
    /// Last ride of the chain, absent for street-only options.
    pub tail: Option<Arc<Ride>>,

    /// Street candidates from the origin to boarding stops.
    pub access: Vec<AccessPath>,

    /// Street candidates from alighting stops to the destination.
    pub egress: Vec<AccessPath>,
}

impl OptionRequest {
    /// Create a new request.
    pub fn new(tail: Option<Arc<Ride>>, access: Vec<AccessPath>, egress: Vec<AccessPath>) -> Self {
        Self {
            tail,
            access,
            egress,
        }
    }

    /// Build the option for this request.
    pub fn build(&self, fares: &dyn FareCalculator, routes: &dyn RouteLookup) -> TripOption {
        TripOption::new(self.tail.as_ref(), &self.access, &self.egress, fares, routes)
    }
}

/// Build, filter and rank options for a set of candidates.
///
/// Unrealizable options are dropped when `config.drop_empty_rides` is set.
/// At most `config.max_options` are returned, best first.
pub fn build_options(
    requests: &[OptionRequest],
    fares: &dyn FareCalculator,
    routes: &dyn RouteLookup,
    config: &ProfileConfig,
) -> Vec<TripOption> {
    let built: Vec<TripOption> = requests
        .par_iter()
        .map(|request| request.build(fares, routes))
        .collect();
    let candidates = built.len();

    let kept = if config.drop_empty_rides {
        remove_empty_rides(built)
    } else {
        built
    };
    let dropped = candidates - kept.len();

    let mut ranked = rank_options(kept, config.order);
    ranked.truncate(config.max_options);

    debug!(
        candidates,
        dropped,
        returned = ranked.len(),
        order = %config.order,
        "built profile options"
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoFares, PatternRide, RouteId, RouteIndex, Stats, Stop, StopId, StreetMode};
    use crate::profile::SortOrder;
    use chrono::Duration;

    fn walk(mins: i64) -> AccessPath {
        AccessPath::new(
            StopId::parse("S0").unwrap(),
            StreetMode::Walk,
            Duration::minutes(mins),
            0.0,
        )
    }

    fn transit(ride_secs: Option<i32>) -> Option<Arc<Ride>> {
        let patterns = match ride_secs {
            Some(secs) => vec![PatternRide::new(
                RouteId::parse("R").unwrap(),
                Stats::single(secs),
                None,
            )],
            None => vec![],
        };
        let ride = Ride::first(
            Stop::new(StopId::parse("S0").unwrap(), "Origin"),
            Stop::new(StopId::parse("S1").unwrap(), "Destination"),
            patterns,
            Duration::zero(),
            0.0,
        )
        .unwrap();
        Some(Arc::new(ride))
    }

    fn requests() -> Vec<OptionRequest> {
        vec![
            OptionRequest::new(transit(Some(1800)), vec![walk(5)], vec![]),
            OptionRequest::new(transit(None), vec![walk(5)], vec![]),
            OptionRequest::new(None, vec![walk(40)], vec![]),
            OptionRequest::new(transit(Some(600)), vec![walk(5)], vec![]),
        ]
    }

    #[test]
    fn drops_empty_and_ranks() {
        let options = build_options(
            &requests(),
            &NoFares,
            &RouteIndex::new(),
            &ProfileConfig::default(),
        );

        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|o| !o.has_empty_rides()));
        for window in options.windows(2) {
            assert!(window[0].stats().avg <= window[1].stats().avg);
        }
    }

    #[test]
    fn keeps_empty_when_configured() {
        let config = ProfileConfig::new(SortOrder::Min, 10, false);

        let options = build_options(&requests(), &NoFares, &RouteIndex::new(), &config);

        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| o.has_empty_rides()).count(), 1);
    }

    #[test]
    fn truncates_to_max_options() {
        let config = ProfileConfig::new(SortOrder::Avg, 1, true);

        let options = build_options(&requests(), &NoFares, &RouteIndex::new(), &config);

        assert_eq!(options.len(), 1);
        assert!(options[0].is_transit());
    }

    #[test]
    fn no_requests() {
        let options = build_options(&[], &NoFares, &RouteIndex::new(), &ProfileConfig::default());
        assert!(options.is_empty());
    }
}
