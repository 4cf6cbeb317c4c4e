//! Attributed chat message type.
//!
//! A [`Message`] is one row of a Messenger Plus! session after its sender has
//! been resolved against the session roster. The [`Speaker`] tells whether
//! the row was written by the caller's own identity or by someone else.
//!
//! # Examples
//!
//! ```
//! use msnpack::{Message, Speaker};
//!
//! let msg = Message::new("09.05.01, 20:15:00", "Jane D.", "salut !")
//!     .with_identifier("jane.doe@example.com")
//!     .with_speaker(Speaker::Own);
//!
//! assert!(msg.is_own());
//! assert_eq!(msg.identifier(), Some("jane.doe@example.com"));
//! ```

use serde::{Deserialize, Serialize};

/// Who wrote a message, relative to the self identifier.
///
/// Serializes to the ShareGPT role names: `gpt` for [`Speaker::Own`],
/// `human` for [`Speaker::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Speaker {
    /// Written by the self identifier.
    #[serde(rename = "gpt")]
    Own,

    /// Written by any other participant, or by an unresolved sender.
    #[default]
    #[serde(rename = "human")]
    Other,
}

impl Speaker {
    /// Decides the speaker from a resolved identifier.
    ///
    /// Only a resolved identifier equal to `self_identifier` (ignoring case)
    /// yields [`Speaker::Own`].
    ///
    /// ```
    /// use msnpack::Speaker;
    ///
    /// assert_eq!(Speaker::resolve(Some("Me@Example.com"), "me@example.com"), Speaker::Own);
    /// assert_eq!(Speaker::resolve(None, "me@example.com"), Speaker::Other);
    /// ```
    pub fn resolve(identifier: Option<&str>, self_identifier: &str) -> Self {
        match identifier {
            Some(id) if id.to_lowercase() == self_identifier.to_lowercase() => Speaker::Own,
            _ => Speaker::Other,
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::Own => write!(f, "self"),
            Speaker::Other => write!(f, "other"),
        }
    }
}

/// A message extracted from a session and attributed to a speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// `yy.mm.dd, hh:mm:ss`, or `UNKNOWN_DATE, hh:mm:ss` when the session
    /// heading had no usable date.
    pub timestamp: String,

    /// Sender label as it appeared next to the message, markup stripped.
    pub sender: String,

    /// Plain-text content, text nodes joined with single spaces.
    pub content: String,

    /// Canonical identifier the sender resolved to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub identifier: Option<String>,

    #[serde(default)]
    pub speaker: Speaker,
}

impl Message {
    /// Creates an unattributed message.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            content: content.into(),
            identifier: None,
            speaker: Speaker::Other,
        }
    }

    /// Sets the resolved canonical identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the speaker.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speaker = speaker;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Returns `true` if the message was written by the self identifier.
    pub fn is_own(&self) -> bool {
        self.speaker == Speaker::Own
    }
}
