//! Serde support for durations stored as whole seconds.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Duration, D::Error> {
    let secs = i64::deserialize(deserializer)?;
    if secs < 0 {
        return Err(serde::de::Error::custom("duration must not be negative"));
    }
    Duration::try_seconds(secs).ok_or_else(|| serde::de::Error::custom("duration out of range"))
}
