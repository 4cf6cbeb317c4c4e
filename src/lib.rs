//! # msnpack
//!
//! Turn Messenger Plus! HTML chat logs into conversation-turn JSON for
//! fine-tuning chat models.
//!
//! ## Overview
//!
//! Each log holds one or more sessions. For every session msnpack:
//! - reads the session date from its heading (French month names by default)
//! - builds a lookup table of the participants listed in the header
//! - attributes every message to a participant by fuzzy name matching
//! - labels the message `gpt` when it comes from your own identifier and
//!   `human` otherwise
//!
//! Links, ping requests and blank messages are dropped, and each document's
//! turns are written as `{"conversations": [...]}` files of at most 40 turns.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msnpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new(MsnConfig::new("me@example.com"));
//!
//!     // One file
//!     let report = converter.convert_file("logs/alice.html", "out")?;
//!     println!("{} files", report.outputs.len());
//!
//!     // A whole folder
//!     let batch = converter.convert_folder("logs", "out")?;
//!     println!("{} documents failed", batch.failed.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - the [`Parser`](parser::Parser) trait
//! - [`parsers`] - [`MsnParser`](parsers::MsnParser)
//! - [`parsing`] - name normalization, participant maps, heading dates
//! - [`config`] - [`MsnConfig`](config::MsnConfig), [`ChunkConfig`](config::ChunkConfig)
//! - [`core`] - filtering, chunking and the JSON writer
//! - [`convert`] - document and folder pipeline
//! - [`error`] - [`MsnpackError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{MsnpackError, Result};
pub use message::{Message, Speaker};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use msnpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, Speaker};

    pub use crate::error::{MsnpackError, Result};

    pub use crate::parser::Parser;
    pub use crate::parsers::MsnParser;

    pub use crate::config::{ChunkConfig, InputEncoding, MsnConfig};
    pub use crate::parsing::MonthTable;

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{Conversation, OutputConfig, Session, Turn};
    pub use crate::core::output::{to_json, write_conversation};
    pub use crate::core::processor::{ProcessingStats, build_conversations, chunk_turns};

    pub use crate::convert::{BatchReport, Converter, DocumentReport};
}
