//! Core data models: sessions, conversation turns and output settings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::message::{Message, Speaker};
use crate::parsing::{ParticipantMap, format_session_date};

/// One continuous chat period found in a log.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Date from the session heading, `None` if it could not be parsed.
    pub date: Option<NaiveDate>,
    /// Roster lookup table built from the session header.
    pub participants: ParticipantMap,
    /// Attributed messages, in document order.
    pub messages: Vec<Message>,
}

impl Session {
    /// `yy.mm.dd`, or `UNKNOWN_DATE`.
    pub fn date_label(&self) -> String {
        format_session_date(self.date)
    }
}

/// A message reduced to what the training format needs.
///
/// ```
/// use msnpack::core::models::Turn;
/// use msnpack::Speaker;
///
/// let turn = Turn::new(Speaker::Own, "salut");
/// let json = serde_json::to_string(&turn)?;
/// assert_eq!(json, r#"{"from":"gpt","value":"salut"}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub from: Speaker,
    pub value: String,
}

impl Turn {
    pub fn new(from: Speaker, value: impl Into<String>) -> Self {
        Self {
            from,
            value: value.into(),
        }
    }
}

impl From<Message> for Turn {
    fn from(msg: Message) -> Self {
        Self {
            from: msg.speaker,
            value: msg.content,
        }
    }
}

impl From<&Message> for Turn {
    fn from(msg: &Message) -> Self {
        Self {
            from: msg.speaker,
            value: msg.content.clone(),
        }
    }
}

/// A bounded run of turns written as one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversations: Vec<Turn>,

    /// Index of the first turn within the document, `None` when the
    /// document was not split.
    #[serde(skip)]
    pub offset: Option<usize>,
}

impl Conversation {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self {
            conversations: turns,
            offset: None,
        }
    }

    #[must_use]
    pub fn at_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Output file name for a document stem: `stem.json`, or
    /// `stem<offset>.json` for a chunk of a split document.
    pub fn file_name(&self, stem: &str) -> String {
        match self.offset {
            Some(offset) => format!("{stem}{offset}.json"),
            None => format!("{stem}.json"),
        }
    }
}

/// Configuration for output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces per indentation level in the written JSON (default: 4)
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
