// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the ISO-8601 codecs

use cim_infrastructure_profitbricks::DateFormat;
use proptest::prelude::*;

fn timestamp_parts() -> impl Strategy<Value = (i32, u32, u32, u32, u32, u32, u32)> {
    (
        1970i32..2100,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
}

proptest! {
    /// Millisecond text survives parse → format unchanged
    #[test]
    fn prop_millisecond_round_trip((y, mo, d, h, mi, s, ms) in timestamp_parts()) {
        let text = format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}.{ms:03}Z");
        let codec = DateFormat::Iso8601.codec();

        let date = codec.to_date(&text).unwrap();
        prop_assert_eq!(date.timestamp_subsec_millis(), ms);
        prop_assert_eq!(codec.format(&date), text);
    }

    /// The seconds codec parses the same instant but renders whole seconds
    #[test]
    fn prop_seconds_codec_truncates_only_on_format((y, mo, d, h, mi, s, ms) in timestamp_parts()) {
        let text = format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}.{ms:03}Z");
        let millis = DateFormat::Iso8601.codec();
        let seconds = DateFormat::Iso8601Seconds.codec();

        let date = seconds.to_date(&text).unwrap();
        prop_assert_eq!(date, millis.to_date(&text).unwrap());
        prop_assert_eq!(
            seconds.format(&date),
            format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}Z")
        );
    }
}
