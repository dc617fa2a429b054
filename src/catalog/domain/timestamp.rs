//! Lenient parsing of caller-supplied creation timestamps.

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use serde::{Deserialize, Deserializer, de};

/// Parses an ISO 8601 timestamp, reading values without an offset as UTC.
///
/// # Errors
///
/// Returns the naive parse error when the text is neither an offset-carrying
/// nor a naive date-time.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, ParseError> {
    text.parse::<DateTime<Utc>>()
        .or_else(|_| text.parse::<NaiveDateTime>().map(|naive| naive.and_utc()))
}

/// Deserializes an optional `created_at` field through [`parse_timestamp`].
pub(super) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| parse_timestamp(&text).map_err(de::Error::custom))
        .transpose()
}
