// Copyright (c) 2025 - Cowboy AI, Inc.
//! Element text decoders
//!
//! Callers skip empty text before decoding, so an empty element leaves the
//! field at its default. Non-empty text that does not fit the target type is
//! an error naming the element.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::date::DateCodec;
use crate::errors::{ParseError, ParseResult};

pub(crate) fn decode_bool(element: &str, text: &str) -> ParseResult<bool> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::invalid_value(element, text, "expected 'true' or 'false'"))
    }
}

pub(crate) fn decode_i32(element: &str, text: &str) -> ParseResult<i32> {
    text.parse::<i32>()
        .map_err(|e| ParseError::invalid_value(element, text, e))
}

/// Decode a finite float; `NaN` and infinities are rejected
pub(crate) fn decode_f32(element: &str, text: &str) -> ParseResult<f32> {
    let value = text
        .parse::<f32>()
        .map_err(|e| ParseError::invalid_value(element, text, e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::invalid_value(element, text, "expected a finite number"))
    }
}

pub(crate) fn decode_date(
    element: &str,
    text: &str,
    codec: &dyn DateCodec,
) -> ParseResult<DateTime<Utc>> {
    codec
        .to_date(text)
        .map_err(|e| ParseError::invalid_value(element, text, e))
}

/// Decode a lenient enumeration, logging values this client does not know
pub(crate) fn decode_enum<T: PartialEq>(
    element: &str,
    text: &str,
    parse: fn(&str) -> T,
    unrecognized: T,
) -> T {
    let value = parse(text);
    if value == unrecognized {
        warn!(element, value = text, "Unrecognized enumeration value");
    }
    value
}
