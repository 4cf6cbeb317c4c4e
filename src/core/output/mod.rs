//! Output writers.
//!
//! - [`write_conversation`] / [`to_json`] - one `{"conversations": [...]}`
//!   object per file, the ShareGPT layout used for chat fine-tuning
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> msnpack::Result<()> {
//! use msnpack::core::models::{Conversation, OutputConfig, Turn};
//! use msnpack::core::output::{to_json, write_conversation};
//! use msnpack::Speaker;
//!
//! let conversation = Conversation::new(vec![
//!     Turn::new(Speaker::Other, "salut !"),
//!     Turn::new(Speaker::Own, "hello"),
//! ]);
//!
//! write_conversation(&conversation, "alice.json", &OutputConfig::new())?;
//!
//! // Or get a string
//! let json = to_json(&conversation, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, write_conversation};
