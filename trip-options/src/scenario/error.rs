//! Scenario loading errors.

use crate::domain::DomainError;

/// Errors that can occur when loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Reading the file failed
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON is malformed or has invalid values
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A ride refers to a stop missing from the stop list
    #[error("option {option}: unknown stop {stop}")]
    UnknownStop { option: usize, stop: String },

    /// A ride's predecessor is not an earlier ride of the same option
    #[error("option {option}: ride {ride} has invalid previous ride {previous}")]
    InvalidPrevious {
        option: usize,
        ride: usize,
        previous: usize,
    },

    /// The tail index is out of bounds
    #[error("option {option}: tail {tail} is out of bounds")]
    InvalidTail { option: usize, tail: usize },

    /// A ride failed domain validation
    #[error("option {option}: {source}")]
    Domain {
        option: usize,
        #[source]
        source: DomainError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    #[test]
    fn error_display() {
        let err = ScenarioError::UnknownStop {
            option: 2,
            stop: "S9".into(),
        };
        assert_eq!(err.to_string(), "option 2: unknown stop S9");

        let err = ScenarioError::InvalidPrevious {
            option: 0,
            ride: 1,
            previous: 1,
        };
        assert_eq!(
            err.to_string(),
            "option 0: ride 1 has invalid previous ride 1"
        );

        let err = ScenarioError::InvalidTail { option: 1, tail: 7 };
        assert_eq!(err.to_string(), "option 1: tail 7 is out of bounds");

        let err = ScenarioError::Domain {
            option: 0,
            source: DomainError::DegenerateRide(StopId::parse("S1").unwrap()),
        };
        assert_eq!(
            err.to_string(),
            "option 0: ride boards and alights at the same stop S1"
        );
    }
}
