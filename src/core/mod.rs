//! Core processing logic for msnpack.
//!
//! This module contains:
//! - [`models`] - Sessions, turns, conversations and output settings
//! - [`filter`] - Noise filtering (links, pings, blank messages)
//! - [`processor`] - Chunking and statistics
//! - [`output`] - JSON writer
//!
//! # Quick Start
//!
//! ```rust
//! use msnpack::core::{
//!     Conversation, FilterConfig, OutputConfig,
//!     apply_filters, build_conversations, to_json,
//! };
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{Conversation, OutputConfig, Session, Turn};
pub use output::{to_json, write_conversation};
pub use processor::{ProcessingStats, build_conversations, chunk_turns};

// Re-export Message from the crate root
pub use crate::Message;
