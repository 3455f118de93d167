//! Transit rides and ride-chain reconstruction.
//!
//! The search engine links the rides of a candidate option backwards: each
//! ride points at the one before it, and the option is handed over by its
//! last ride. Rides are shared through `Arc`, so the chain is read here but
//! never written to; reconstruction produces an owned, chronological copy.

use std::sync::Arc;

use chrono::Duration;
use tracing::trace;

use super::{DomainError, RouteId, Stats, Stop};

/// One pattern that can serve a ride within the departure-time window.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRide {
    pub route: RouteId,
    /// In-vehicle travel times over the window.
    pub ride_stats: Stats,
    /// Wait before boarding, absent when the pattern has no headway data.
    pub wait_stats: Option<Stats>,
}

impl PatternRide {
    pub fn new(route: RouteId, ride_stats: Stats, wait_stats: Option<Stats>) -> Self {
        Self {
            route,
            ride_stats,
            wait_stats,
        }
    }
}

/// A transit hop from boarding to alighting.
///
/// # Invariants
///
/// - Boarding and alighting stops differ
#[derive(Debug, Clone)]
pub struct Ride {
    from: Stop,
    to: Stop,
    patterns: Vec<PatternRide>,
    /// Street time to reach `from`.
    pub access_time: Duration,
    /// Street distance to reach `from`, in metres.
    pub access_dist: f64,
    previous: Option<Arc<Ride>>,
}

impl Ride {
    /// Start a chain with its first ride.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `from` and `to` are the same stop.
    pub fn first(
        from: Stop,
        to: Stop,
        patterns: Vec<PatternRide>,
        access_time: Duration,
        access_dist: f64,
    ) -> Result<Self, DomainError> {
        if from.id == to.id {
            return Err(DomainError::DegenerateRide(from.id));
        }
        Ok(Ride {
            from,
            to,
            patterns,
            access_time,
            access_dist,
            previous: None,
        })
    }

    /// Extend a chain: a ride boarded after alighting `previous`.
    ///
    /// `access_time` and `access_dist` describe the transfer walk from the
    /// previous alighting stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use chrono::Duration;
    /// use trip_options::domain::{Ride, Stop, StopId, chronological};
    ///
    /// let stop = |id: &str| Stop::new(StopId::parse(id).unwrap(), id);
    ///
    /// let first = Arc::new(
    ///     Ride::first(stop("A"), stop("B"), vec![], Duration::minutes(4), 300.0).unwrap(),
    /// );
    /// let tail = Arc::new(
    ///     Ride::then(first, stop("C"), stop("D"), vec![], Duration::minutes(2), 120.0).unwrap(),
    /// );
    ///
    /// let rides = chronological(Some(&tail));
    /// assert_eq!(rides[0].from().name, "A");
    /// assert_eq!(rides[1].from().name, "C");
    /// assert_eq!(rides[0].access_time, Duration::zero());
    /// ```
    pub fn then(
        previous: Arc<Ride>,
        from: Stop,
        to: Stop,
        patterns: Vec<PatternRide>,
        access_time: Duration,
        access_dist: f64,
    ) -> Result<Self, DomainError> {
        let mut ride = Ride::first(from, to, patterns, access_time, access_dist)?;
        ride.previous = Some(previous);
        Ok(ride)
    }

    /// Returns the boarding stop.
    pub fn from(&self) -> &Stop {
        &self.from
    }

    /// Returns the alighting stop.
    pub fn to(&self) -> &Stop {
        &self.to
    }

    /// Returns the patterns serving this ride.
    pub fn patterns(&self) -> &[PatternRide] {
        &self.patterns
    }

    /// Returns the ride before this one, if any.
    pub fn previous(&self) -> Option<&Arc<Ride>> {
        self.previous.as_ref()
    }

    /// Returns the distinct routes serving this ride, in first-seen order.
    pub fn route_ids(&self) -> Vec<&RouteId> {
        let mut routes: Vec<&RouteId> = Vec::with_capacity(self.patterns.len());
        for pattern in &self.patterns {
            if !routes.contains(&&pattern.route) {
                routes.push(&pattern.route);
            }
        }
        routes
    }

    /// In-vehicle time across all patterns.
    ///
    /// Empty when no pattern runs within the window.
    pub fn ride_stats(&self) -> Stats {
        let mut stats = Stats::default();
        for pattern in &self.patterns {
            stats.add(&pattern.ride_stats);
        }
        stats
    }

    /// Wait time across the patterns that have headway data.
    ///
    /// `None` when no pattern has any, which is not the same as an
    /// empty distribution.
    pub fn wait_stats(&self) -> Option<Stats> {
        let mut waits = self.patterns.iter().filter_map(|p| p.wait_stats.as_ref());
        let mut stats = *waits.next()?;
        for wait in waits {
            stats.add(wait);
        }
        Some(stats)
    }
}

/// Reconstruct a chain in boarding order, starting from its last ride.
///
/// Returns owned copies with the backward links detached. The first ride's
/// access time and distance are zeroed: the option counts access once
/// through its own street legs. Applying this to an already-corrected chain
/// gives the same result. An absent tail gives an empty list.
pub fn chronological(tail: Option<&Arc<Ride>>) -> Vec<Ride> {
    let mut rides = Vec::new();
    let mut current = tail;
    while let Some(ride) = current {
        let mut copy = Ride::clone(ride);
        copy.previous = None;
        rides.push(copy);
        current = ride.previous.as_ref();
    }
    rides.reverse();

    if let Some(first) = rides.first_mut() {
        first.access_time = Duration::zero();
        first.access_dist = 0.0;
    }

    trace!(rides = rides.len(), "reconstructed ride chain");
    rides
}
