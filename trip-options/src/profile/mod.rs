//! Trip options for profile routing.
//!
//! A profile search finds ride sequences that work across a departure-time
//! window. This module turns each sequence, with its access and egress
//! street legs, into a `TripOption` summarizing every leg's travel-time
//! distribution, then ranks and filters the options for presentation.

mod build;
mod config;
mod rank;
mod segment;
mod trip_option;

pub use build::{OptionRequest, build_options};
pub use config::ProfileConfig;
pub use rank::{
    ParseSortOrderError, SortOrder, compare_avg, compare_max, compare_min, rank_options,
    remove_empty_rides,
};
pub use segment::Segment;
pub use trip_option::{NON_TRANSIT_SUMMARY, TripOption, generate_summary};
