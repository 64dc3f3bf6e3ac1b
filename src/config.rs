// Copyright (c) 2025 - Cowboy AI, Inc.
//! Parser configuration

use serde::{Deserialize, Serialize};

use crate::date::{DateCodec, DateFormat};

/// Configuration shared by the ProfitBricks response parsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Local name of the element wrapping one server record
    #[serde(default = "default_record_element")]
    pub record_element: String,

    /// Timestamp format used for `creationTime` and `lastModificationTime`
    #[serde(default)]
    pub date_format: DateFormat,
}

fn default_record_element() -> String {
    "return".to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            record_element: default_record_element(),
            date_format: DateFormat::default(),
        }
    }
}

impl ParserConfig {
    pub fn with_record_element(mut self, name: impl Into<String>) -> Self {
        self.record_element = name.into();
        self
    }

    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = format;
        self
    }

    pub(crate) fn date_codec(&self) -> &'static dyn DateCodec {
        self.date_format.codec()
    }
}
