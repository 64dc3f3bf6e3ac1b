// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for response parsing

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur while turning a provider response into domain objects
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not well-formed XML, or the stream failed
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element name could not be decoded as UTF-8
    #[error("Element name is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Element text could not be decoded into the field's type
    #[error("Invalid value for element '{element}': '{value}' ({message})")]
    InvalidValue {
        element: String,
        value: String,
        message: String,
    },

    /// A required field was absent when the record was finalized
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// The document contained no record element
    #[error("Missing required element: {0}")]
    MissingElement(String),

    /// The stream ended while an element was still open
    #[error("Unexpected end of document inside element: {0}")]
    UnexpectedEof(String),
}

impl ParseError {
    pub(crate) fn invalid_value(
        element: impl Into<String>,
        value: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        ParseError::InvalidValue {
            element: element.into(),
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Name of the element whose text failed to decode, if any
    pub fn element(&self) -> Option<&str> {
        match self {
            ParseError::InvalidValue { element, .. } => Some(element),
            _ => None,
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
