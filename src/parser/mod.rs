// Copyright (c) 2025 - Cowboy AI, Inc.
//! Response Parsers - Provider XML → Domain Objects
//!
//! Each provider response shape gets one [`DocumentParser`] implementation,
//! selected statically by the caller:
//!
//! ```text
//! bytes ──quick_xml──> element events ──ResponseHandler──> builders ──build()──> Server
//! ```
//!
//! Parsers hold only immutable configuration. Every call creates a fresh
//! [`ResponseHandler`], so one parser value can be shared between threads
//! while each document gets its own builder state.
//!
//! # Example
//!
//! ```rust
//! use cim_infrastructure_profitbricks::parser::{DocumentParser, ServerInfoResponseParser};
//!
//! let xml = "<return><serverId>srv-1</serverId><cores>4</cores></return>";
//! let server = ServerInfoResponseParser::new().parse_str(xml).unwrap();
//! assert_eq!(server.cores(), 4);
//! ```

mod decode;
pub mod sax;
pub mod server;

use std::io::BufRead;

use crate::errors::ParseResult;

pub use sax::{parse_with, ResponseHandler};
pub use server::{ServerInfoResponseParser, ServerListResponseParser, ServerRecordHandler};

/// Parses one provider document into a typed value
pub trait DocumentParser<T> {
    /// Parse a complete document from a buffered reader
    fn parse_reader<R: BufRead>(&self, input: R) -> ParseResult<T>;

    fn parse_str(&self, xml: &str) -> ParseResult<T> {
        self.parse_reader(xml.as_bytes())
    }

    fn parse_bytes(&self, xml: &[u8]) -> ParseResult<T> {
        self.parse_reader(xml)
    }
}
