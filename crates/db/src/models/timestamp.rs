//! Request timestamps.
//!
//! Columns are `TIMESTAMPTZ`. Clients may send RFC 3339 values with an
//! offset, or bare date-times such as `2025-01-01T00:00:00`, which are read
//! as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use residuos_core::types::Timestamp;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Zoned(DateTime<Utc>),
    Naive(NaiveDateTime),
}

/// `deserialize_with` target for `Option<Timestamp>` fields.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<TimestampRepr>::deserialize(deserializer)?;
    Ok(repr.map(|repr| match repr {
        TimestampRepr::Zoned(ts) => ts,
        TimestampRepr::Naive(naive) => naive.and_utc(),
    }))
}
