//! Parser trait for chat logs.
//!
//! A parser turns one log document into its [`Session`]s, with every message
//! already attributed. The batch converter only talks to this trait, so a
//! new log format plugs in by implementing it.
//!
//! # Example
//!
//! ```rust,no_run
//! use msnpack::config::MsnConfig;
//! use msnpack::parser::Parser;
//! use msnpack::parsers::MsnParser;
//! use std::path::Path;
//!
//! let parser = MsnParser::with_config(MsnConfig::new("me@example.com"));
//! let sessions = parser.parse(Path::new("data/raw_data/alice.html"))?;
//!
//! for session in &sessions {
//!     println!("{}: {} messages", session.date_label(), session.messages.len());
//! }
//! # Ok::<(), msnpack::MsnpackError>(())
//! ```

use std::path::Path;

use crate::core::models::Session;
use crate::error::Result;

/// Parses chat log documents into sessions.
pub trait Parser {
    /// Human-readable name of the log format.
    fn name(&self) -> &'static str;

    /// Reads and parses the file at `path`.
    ///
    /// Errors are fatal for this document only.
    fn parse(&self, path: &Path) -> Result<Vec<Session>>;

    /// Parses already-decoded document text.
    fn parse_str(&self, content: &str) -> Result<Vec<Session>>;
}
