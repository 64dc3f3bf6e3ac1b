// Copyright (c) 2025 - Cowboy AI, Inc.
//! ISO-8601 Date Codecs
//!
//! ProfitBricks reports timestamps as ISO-8601 text in UTC with millisecond
//! precision, e.g. `2014-12-04T07:09:23.138Z`. Parsing never drops
//! sub-second precision.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date decoding error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateCodecError {
    #[error("Invalid ISO-8601 timestamp '{text}': {message}")]
    Format { text: String, message: String },
}

/// Converts between timestamp text and `DateTime<Utc>`
pub trait DateCodec: Send + Sync {
    /// Parse timestamp text into a UTC instant
    fn to_date(&self, text: &str) -> Result<DateTime<Utc>, DateCodecError>;

    /// Render a UTC instant as timestamp text
    fn format(&self, date: &DateTime<Utc>) -> String;
}

/// ISO-8601 with millisecond precision (`2014-12-04T07:09:23.138Z`)
///
/// Parsing keeps every fractional digit, but formatting truncates to
/// milliseconds: `07:09:23.138456Z` renders as `07:09:23.138Z`. Text only
/// round-trips unchanged when it is millisecond precision or coarser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso8601DateCodec;

/// ISO-8601 with whole seconds (`2014-12-04T07:09:23Z`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso8601SecondsDateCodec;

impl DateCodec for Iso8601DateCodec {
    fn to_date(&self, text: &str) -> Result<DateTime<Utc>, DateCodecError> {
        parse_iso8601(text)
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl DateCodec for Iso8601SecondsDateCodec {
    fn to_date(&self, text: &str) -> Result<DateTime<Utc>, DateCodecError> {
        parse_iso8601(text)
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Timestamp format selector used by parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    #[default]
    Iso8601,
    Iso8601Seconds,
}

static ISO8601: Iso8601DateCodec = Iso8601DateCodec;
static ISO8601_SECONDS: Iso8601SecondsDateCodec = Iso8601SecondsDateCodec;

impl DateFormat {
    /// Codec implementing this format
    pub fn codec(&self) -> &'static dyn DateCodec {
        match self {
            Self::Iso8601 => &ISO8601,
            Self::Iso8601Seconds => &ISO8601_SECONDS,
        }
    }
}

/// Parse RFC 3339 text, falling back to offset-less text interpreted as UTC
fn parse_iso8601(text: &str) -> Result<DateTime<Utc>, DateCodecError> {
    let text = text.trim();

    match DateTime::parse_from_rfc3339(text) {
        Ok(date) => Ok(date.with_timezone(&Utc)),
        Err(err) => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|_| DateCodecError::Format {
                text: text.to_string(),
                message: err.to_string(),
            }),
    }
}
