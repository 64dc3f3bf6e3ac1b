// Copyright (c) 2025 - Cowboy AI, Inc.
//! Streaming SAX-style driver over `quick_xml`
//!
//! Turns the raw event stream into three callbacks on a [`ResponseHandler`]:
//! element start, element end with the element's accumulated text, and a
//! final `finish` that consumes the handler. Element names are passed as
//! local names, so namespace prefixes (`ns2:getServerResponse`) are stripped.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;
use tracing::trace;

use crate::errors::{ParseError, ParseResult};

/// Receives element events for one document
///
/// `finish` takes `self`, so a handler cannot be reused for a second
/// document.
pub trait ResponseHandler {
    /// Value produced once the document has been consumed
    type Output;

    fn start_element(&mut self, name: &str) -> ParseResult<()>;

    /// `text` is the element's own character data, trimmed
    fn end_element(&mut self, name: &str, text: &str) -> ParseResult<()>;

    fn finish(self) -> ParseResult<Self::Output>;
}

/// Drive `handler` over every event in `input`
///
/// Malformed XML and mismatched end tags surface as [`ParseError::Xml`];
/// a stream that ends inside an open element surfaces as
/// [`ParseError::UnexpectedEof`].
pub fn parse_with<R, H>(input: R, mut handler: H) -> ParseResult<H::Output>
where
    R: BufRead,
    H: ResponseHandler,
{
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut open: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = std::str::from_utf8(e.local_name().into_inner())?;
                text.clear();
                open.push(name.to_string());
                handler.start_element(name)?;
            }
            Event::Empty(e) => {
                let name = std::str::from_utf8(e.local_name().into_inner())?;
                text.clear();
                handler.start_element(name)?;
                handler.end_element(name, "")?;
            }
            Event::End(e) => {
                let name = std::str::from_utf8(e.local_name().into_inner())?;
                handler.end_element(name, text.trim())?;
                text.clear();
                open.pop();
            }
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(std::str::from_utf8(&*e)?),
            Event::Eof => break,
            other => trace!(event = ?other, "Skipping XML event"),
        }
        buf.clear();
    }

    if let Some(element) = open.pop() {
        return Err(ParseError::UnexpectedEof(element));
    }

    handler.finish()
}
