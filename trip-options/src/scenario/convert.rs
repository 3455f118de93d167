//! Validation and conversion of scenario files.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use crate::domain::{
    FareCalculator, FlatFareCalculator, NoFares, PatternRide, Ride, RouteIndex, Stop, StopId,
};
use crate::profile::{OptionRequest, ProfileConfig, TripOption, build_options};

use super::error::ScenarioError;
use super::types::{RawOption, RawScenario};

/// A validated scenario, ready to build options from.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub routes: RouteIndex,
    pub requests: Vec<OptionRequest>,
    pub fares: Option<FlatFareCalculator>,
    pub config: ProfileConfig,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Parse and validate a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the JSON is malformed, a ride refers to an unknown
    /// stop, a ride's `previous` is not an earlier ride, the tail is out of
    /// bounds, or a ride fails validation.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let raw: RawScenario = serde_json::from_str(json)?;

        let stops: HashMap<StopId, Stop> = raw
            .stops
            .into_iter()
            .map(|stop| (stop.id.clone(), stop))
            .collect();

        let requests = raw
            .options
            .into_iter()
            .enumerate()
            .map(|(idx, option)| convert_option(idx, option, &stops))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            stops = stops.len(),
            routes = raw.routes.len(),
            options = requests.len(),
            "loaded scenario"
        );

        Ok(Scenario {
            routes: raw.routes.into_iter().collect(),
            requests,
            fares: raw.fares,
            config: raw.config,
        })
    }

    /// Build, filter and rank the scenario's options with its own config.
    pub fn build(&self) -> Vec<TripOption> {
        build_options(&self.requests, self.fare_calculator(), &self.routes, &self.config)
    }

    /// Returns the fare rules, or a calculator that charges nothing.
    pub fn fare_calculator(&self) -> &dyn FareCalculator {
        match &self.fares {
            Some(flat) => flat as &dyn FareCalculator,
            None => &NoFares,
        }
    }
}

/// Link one option's rides into a chain and return its request.
fn convert_option(
    option_idx: usize,
    raw: RawOption,
    stops: &HashMap<StopId, Stop>,
) -> Result<OptionRequest, ScenarioError> {
    let lookup = |id: &StopId| {
        stops
            .get(id)
            .cloned()
            .ok_or_else(|| ScenarioError::UnknownStop {
                option: option_idx,
                stop: id.to_string(),
            })
    };

    let mut linked: Vec<Arc<Ride>> = Vec::with_capacity(raw.rides.len());
    for (ride_idx, ride) in raw.rides.into_iter().enumerate() {
        let from = lookup(&ride.from)?;
        let to = lookup(&ride.to)?;
        let patterns = ride
            .patterns
            .into_iter()
            .map(|p| PatternRide::new(p.route, p.ride_stats, p.wait_stats))
            .collect();
        let access_time = Duration::seconds(i64::from(ride.access_time));

        let built = match ride.previous {
            None => Ride::first(from, to, patterns, access_time, ride.access_dist),
            Some(prev) => {
                // Only earlier rides exist yet, which also rules out cycles.
                let previous = linked.get(prev).cloned().ok_or(ScenarioError::InvalidPrevious {
                    option: option_idx,
                    ride: ride_idx,
                    previous: prev,
                })?;
                Ride::then(previous, from, to, patterns, access_time, ride.access_dist)
            }
        }
        .map_err(|source| ScenarioError::Domain {
            option: option_idx,
            source,
        })?;

        linked.push(Arc::new(built));
    }

    let tail = match raw.tail {
        Some(tail) => Some(linked.get(tail).cloned().ok_or(ScenarioError::InvalidTail {
            option: option_idx,
            tail,
        })?),
        None => linked.last().cloned(),
    };

    Ok(OptionRequest::new(tail, raw.access, raw.egress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SortOrder;
    use std::io::Write;

    const SCENARIO: &str = r#"{
        "stops": [
            {"id": "S0", "name": "Dupont Circle"},
            {"id": "S1", "name": "Metro Center"},
            {"id": "S2", "name": "L'Enfant Plaza"}
        ],
        "routes": [
            {"id": "RED", "longName": "Red"},
            {"id": "BLUE", "longName": "Blue"},
            {"id": "ORANGE", "longName": "Orange"}
        ],
        "fares": {"kind": "metrorail", "low": 2.25, "peak": 2.9, "senior": 1.1, "freeTransfers": 1},
        "config": {"order": "min"},
        "options": [
            {
                "access": [{"stop": "S0", "mode": "walk", "duration": 300, "distance": 400}],
                "egress": [{"stop": "S2", "mode": "walk", "duration": 120, "distance": 150}],
                "rides": [
                    {
                        "from": "S0", "to": "S1", "accessTime": 300, "accessDist": 400,
                        "patterns": [{"route": "RED", "rideStats": {"min": 240, "avg": 270, "max": 300, "num": 4}}]
                    },
                    {
                        "from": "S1", "to": "S2", "previous": 0,
                        "patterns": [
                            {"route": "BLUE", "rideStats": {"min": 180, "avg": 180, "max": 180, "num": 2},
                             "waitStats": {"min": 60, "avg": 300, "max": 540, "num": 2}},
                            {"route": "ORANGE", "rideStats": {"min": 180, "avg": 180, "max": 180, "num": 2}}
                        ]
                    }
                ]
            },
            {
                "access": [{"stop": "S0", "mode": "bicycle", "duration": 900, "distance": 3000}]
            }
        ]
    }"#;

    #[test]
    fn parse_scenario() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();

        assert_eq!(scenario.routes.len(), 3);
        assert_eq!(scenario.requests.len(), 2);
        assert_eq!(scenario.config.order, SortOrder::Min);
        assert!(scenario.requests[1].tail.is_none());

        let tail = scenario.requests[0].tail.as_ref().unwrap();
        assert_eq!(tail.from().name, "Metro Center");
        assert_eq!(tail.previous().unwrap().from().name, "Dupont Circle");
    }

    #[test]
    fn build_scenario_options() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();

        let options = scenario.build();

        assert_eq!(options.len(), 2);
        let transit = options.iter().find(|o| o.is_transit()).unwrap();
        assert_eq!(transit.summary(), "routes Red, Blue/Orange via Metro Center");
        assert_eq!(transit.fares().len(), 1);
        assert_eq!(transit.fares()[0].ride_count, 2);
        assert_eq!(transit.rides()[0].access_time, Duration::zero());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();

        let scenario = Scenario::load(file.path()).unwrap();

        assert_eq!(scenario.requests.len(), 2);
    }

    #[test]
    fn load_sample_scenario() {
        let scenario = Scenario::load("data/scenario.json").unwrap();

        let options = scenario.build();

        // The option whose last ride has no trips in the window is dropped.
        assert_eq!(scenario.requests.len(), 4);
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|o| !o.has_empty_rides()));
        assert!(options.iter().any(|o| o.summary() == "routes Red, Green via Gallery Place"));
        assert!(options.iter().any(|o| o.summary() == "Non-transit options"));
    }

    #[test]
    fn load_missing_file() {
        let result = Scenario::load("does/not/exist.json");
        assert!(matches!(result, Err(ScenarioError::Io(_))));
    }

    #[test]
    fn unknown_stop() {
        let json = r#"{"stops": [], "options": [{"rides": [{"from": "A", "to": "B"}]}]}"#;
        let result = Scenario::from_json(json);
        assert!(matches!(
            result,
            Err(ScenarioError::UnknownStop { option: 0, .. })
        ));
    }

    #[test]
    fn previous_must_be_earlier() {
        let json = r#"{
            "stops": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
            "options": [{"rides": [{"from": "A", "to": "B", "previous": 0}]}]
        }"#;
        let result = Scenario::from_json(json);
        assert!(matches!(
            result,
            Err(ScenarioError::InvalidPrevious {
                ride: 0,
                previous: 0,
                ..
            })
        ));
    }

    #[test]
    fn tail_out_of_bounds() {
        let json = r#"{
            "stops": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
            "options": [{"rides": [{"from": "A", "to": "B"}], "tail": 3}]
        }"#;
        let result = Scenario::from_json(json);
        assert!(matches!(
            result,
            Err(ScenarioError::InvalidTail { tail: 3, .. })
        ));
    }

    #[test]
    fn degenerate_ride() {
        let json = r#"{
            "stops": [{"id": "A", "name": "A"}],
            "options": [{"rides": [{"from": "A", "to": "A"}]}]
        }"#;
        let result = Scenario::from_json(json);
        assert!(matches!(result, Err(ScenarioError::Domain { .. })));
    }

    #[test]
    fn invalid_stats_rejected() {
        let json = r#"{
            "stops": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
            "options": [{"rides": [{"from": "A", "to": "B",
                "patterns": [{"route": "R", "rideStats": {"min": 9, "avg": 1, "max": 5, "num": 1}}]}]}]
        }"#;
        let result = Scenario::from_json(json);
        assert!(matches!(result, Err(ScenarioError::Json(_))));
    }

    #[test]
    fn no_fares_by_default() {
        let json = r#"{
            "stops": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
            "options": [{"rides": [{"from": "A", "to": "B",
                "patterns": [{"route": "R", "rideStats": {"min": 60, "avg": 60, "max": 60, "num": 1}}]}]}]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();

        let options = scenario.build();

        assert!(options[0].fares().is_empty());
        assert_eq!(options[0].summary(), "routes R");
    }
}
