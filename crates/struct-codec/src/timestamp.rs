//! Timestamps carried as raw-passthrough strings.
//!
//! The codec never interprets timestamps; callers convert at the point of
//! use. The wire profile is RFC 3339 (`2023-01-01T00:00:00Z`, optional
//! fractional seconds and offset).

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::value::{json_type_name, Raw};

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("timestamp must be a JSON string, found {found}")]
    NotAString { found: &'static str },
    #[error("invalid timestamp `{text}`: {source}")]
    Parse {
        text: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("cannot format timestamp: {0}")]
    Format(#[from] time::error::Format),
}

pub fn parse_timestamp(raw: &Raw) -> Result<OffsetDateTime, TimestampError> {
    let text = raw.as_str().ok_or_else(|| TimestampError::NotAString {
        found: json_type_name(raw.as_value()),
    })?;
    OffsetDateTime::parse(text, &Rfc3339).map_err(|source| TimestampError::Parse {
        text: text.to_string(),
        source,
    })
}

/// Renders `at` as an RFC 3339 raw string.
///
/// Fails for instants RFC 3339 cannot express, such as offsets with a
/// seconds component.
pub fn format_timestamp(at: OffsetDateTime) -> Result<Raw, TimestampError> {
    Ok(Raw::from(at.format(&Rfc3339)?))
}
