//! Domain types for trip options.
//!
//! Value types that the search engine hands over (rides, street access
//! candidates, route and stop reference data) and the statistics used to
//! summarize them. Validated types enforce their invariants at
//! construction time.

mod error;
mod fare;
mod ride;
mod route;
mod seconds;
mod stats;
mod stop;
mod street;

pub use error::DomainError;
pub use fare::{Fare, FareCalculator, FlatFareCalculator, NoFares};
pub use ride::{PatternRide, Ride, chronological};
pub use route::{RouteId, RouteIndex, RouteIndexBuilder, RouteLookup, RouteShort};
pub use stats::Stats;
pub(crate) use stats::to_seconds;
pub use stop::{InvalidId, Stop, StopId};
pub use street::{AccessPath, StreetMode, StreetSegment};
