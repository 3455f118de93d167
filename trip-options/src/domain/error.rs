//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! Building an option never fails; absence is represented structurally.

use super::StopId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Statistics violate `min <= avg <= max`, or an empty distribution
    /// carries values
    #[error("invalid stats: {0}")]
    InvalidStats(&'static str),

    /// A ride boards and alights at the same stop
    #[error("ride boards and alights at the same stop {0}")]
    DegenerateRide(StopId),
}
