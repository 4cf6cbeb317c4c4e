//! Chat log parsers.
//!
//! - [`MsnParser`] - Messenger Plus! HTML logs
//!
//! Every parser implements [`Parser`](crate::parser::Parser).
//!
//! # Example
//!
//! ```rust,no_run
//! use msnpack::config::MsnConfig;
//! use msnpack::parser::Parser;
//! use msnpack::parsers::MsnParser;
//!
//! let parser = MsnParser::with_config(MsnConfig::new("me@example.com"));
//! let sessions = parser.parse("logs/alice.html".as_ref())?;
//! # Ok::<(), msnpack::MsnpackError>(())
//! ```

pub mod msn;

pub use msn::MsnParser;
