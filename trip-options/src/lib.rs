//! Trip option summaries for profile routing.
//!
//! Turns a chain of transit rides plus access and egress street legs into
//! a presentable, rankable option: travel-time statistics per leg and
//! overall, fares, and a short text summary.

pub mod domain;
pub mod profile;
pub mod scenario;
