//! Scenario fixtures.
//!
//! A scenario is a JSON description of what a profile search would hand
//! over: stop and route reference data plus, for each candidate option,
//! access and egress street candidates and a backward-linked ride chain.
//! Useful for development and demos without a search engine.

mod convert;
mod error;
mod types;

pub use convert::Scenario;
pub use error::ScenarioError;
pub use types::{RawOption, RawPattern, RawRide, RawScenario};
