//! Configuration types for parsing and chunking.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`MsnConfig`] - Messenger Plus! HTML log settings
//! - [`ChunkConfig`] - how a document's turns are split into output files
//!
//! # Example
//!
//! ```rust
//! use msnpack::config::{InputEncoding, MsnConfig};
//! use msnpack::parsers::MsnParser;
//!
//! let config = MsnConfig::new("me@example.com")
//!     .with_encoding(InputEncoding::Utf8);
//!
//! let parser = MsnParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MsnpackError, Result};
use crate::parsing::MonthTable;

/// Byte encoding of the input logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// UTF-16 little-endian, what Messenger Plus! writes.
    #[default]
    Utf16Le,
    Utf8,
}

impl InputEncoding {
    pub fn name(self) -> &'static str {
        match self {
            InputEncoding::Utf16Le => "UTF-16LE",
            InputEncoding::Utf8 => "UTF-8",
        }
    }

    /// Decodes raw file bytes. A leading byte-order mark is dropped.
    ///
    /// ```
    /// use msnpack::config::InputEncoding;
    ///
    /// let bytes = [0xFF, 0xFE, b'h', 0, b'i', 0];
    /// assert_eq!(InputEncoding::Utf16Le.decode(&bytes).unwrap(), "hi");
    /// ```
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            InputEncoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(MsnpackError::encoding(
                        self.name(),
                        format!("odd number of bytes ({})", bytes.len()),
                        None,
                    ));
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                let text: String = char::decode_utf16(units)
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|e| MsnpackError::encoding(self.name(), e.to_string(), None))?;
                Ok(text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text))
            }
            InputEncoding::Utf8 => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| MsnpackError::encoding(self.name(), e.to_string(), None))?;
                Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
            }
        }
    }
}

impl std::fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for Messenger Plus! HTML log parsing.
///
/// # Example
///
/// ```rust
/// use msnpack::config::MsnConfig;
/// use msnpack::parsing::MonthTable;
///
/// let config = MsnConfig::new("me@example.com")
///     .with_months(MonthTable::English)
///     .with_skip_status_rows(true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsnConfig {
    /// Identifier whose messages are labeled as own (compared ignoring case)
    pub self_identifier: String,

    /// Month names used in session headings (default: French)
    pub months: MonthTable,

    /// Input byte encoding (default: UTF-16LE)
    pub encoding: InputEncoding,

    /// Skip `tr.msgplus` status rows (default: true)
    pub skip_status_rows: bool,
}

impl Default for MsnConfig {
    fn default() -> Self {
        Self {
            self_identifier: String::new(),
            months: MonthTable::default(),
            encoding: InputEncoding::default(),
            skip_status_rows: true,
        }
    }
}

impl MsnConfig {
    /// Creates a configuration for the given self identifier.
    pub fn new(self_identifier: impl Into<String>) -> Self {
        Self {
            self_identifier: self_identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_months(mut self, months: MonthTable) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: InputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_skip_status_rows(mut self, skip: bool) -> Self {
        self.skip_status_rows = skip;
        self
    }
}

/// Configuration for splitting a document's turns into output files.
///
/// Documents longer than `max_len` are split into consecutive chunks of at
/// most `max_len` turns; any chunk (or unsplit document) shorter than
/// `min_len` is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Maximum turns per output file (default: 40)
    pub max_len: usize,

    /// Minimum turns for a file to be written (default: 3)
    pub min_len: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_len: 40,
            min_len: 3,
        }
    }
}

impl ChunkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum chunk length. Zero is treated as one.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len.max(1);
        self
    }

    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }
}
