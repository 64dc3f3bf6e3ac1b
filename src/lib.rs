// Copyright (c) 2025 - Cowboy AI, Inc.
//! ProfitBricks provider adapter for the Composable Information Machine
//!
//! Maps ProfitBricks XML responses onto immutable domain objects: typed
//! value objects built through builders, ISO-8601 date codecs, and streaming
//! response parsers.

pub mod config;
pub mod date;
pub mod domain;
pub mod errors;
pub mod parser;

// Re-export commonly used types
pub use config::ParserConfig;
pub use date::{DateCodec, DateCodecError, DateFormat, Iso8601DateCodec, Iso8601SecondsDateCodec};
pub use domain::{
    AvailabilityZone, BusType, DomainError, Firewall, Nic, OsType, ProvisioningState, Server,
    ServerStatus, Storage,
};
pub use errors::{ParseError, ParseResult};
pub use parser::{DocumentParser, ServerInfoResponseParser, ServerListResponseParser};
