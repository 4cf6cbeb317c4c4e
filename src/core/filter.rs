//! Drop messages that carry no conversational content.
//!
//! This module provides [`FilterConfig`] for defining what counts as noise
//! and [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Empty | [`with_skip_empty`](FilterConfig::with_skip_empty) | Blank or whitespace-only content |
//! | Prefix | [`with_noise_prefix`](FilterConfig::with_noise_prefix) | Content starting with a noise prefix |
//!
//! By default links (`http://`, `https://`) and MSN ping requests
//! (`ping? [request]`) are treated as noise.
//!
//! # Examples
//!
//! ```
//! use msnpack::core::filter::{FilterConfig, apply_filters};
//! use msnpack::Message;
//!
//! let messages = vec![
//!     Message::new("09.05.01, 20:15:00", "Bob", "https://example.com"),
//!     Message::new("09.05.01, 20:15:10", "Bob", "t'as vu ça ?"),
//!     Message::new("09.05.01, 20:15:20", "Bob", "   "),
//! ];
//!
//! let filtered = apply_filters(messages, &FilterConfig::new());
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "t'as vu ça ?");
//! ```
//!
//! # Behavior Notes
//!
//! - Prefixes are compared against the trimmed, lower-cased content
//! - Message order is preserved

use tracing::trace;

use crate::Message;

const DEFAULT_NOISE_PREFIXES: &[&str] = &["http://", "https://", "ping? [request]"];

/// Configuration for the noise filter.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Lower-case prefixes marking a message as noise.
    pub noise_prefixes: Vec<String>,

    /// Drop messages whose content is empty after trimming (default: true).
    pub skip_empty: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            noise_prefixes: DEFAULT_NOISE_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            skip_empty: true,
        }
    }
}

impl FilterConfig {
    /// Creates the default filter: links, ping requests and blank messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a noise prefix (matched case-insensitively).
    #[must_use]
    pub fn with_noise_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.noise_prefixes.push(prefix.into().to_lowercase());
        self
    }

    #[must_use]
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Returns `true` if the content should be dropped.
    pub fn is_noise(&self, content: &str) -> bool {
        let normalized = content.trim().to_lowercase();
        if self.skip_empty && normalized.is_empty() {
            return true;
        }
        self.noise_prefixes
            .iter()
            .any(|prefix| normalized.starts_with(prefix.as_str()))
    }

    /// Returns `true` if the message passes the filter.
    pub fn matches(&self, msg: &Message) -> bool {
        !self.is_noise(&msg.content)
    }
}

/// Keeps the messages that pass the filter, in order.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    messages
        .into_iter()
        .filter(|msg| {
            let keep = config.matches(msg);
            if !keep {
                trace!(content = %msg.content, "Dropped noise message");
            }
            keep
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(content: &str) -> Message {
        Message::new("09.05.01, 20:15:00", "Bob", content)
    }

    #[test]
    fn test_links_are_noise() {
        let config = FilterConfig::new();
        assert!(config.is_noise("https://example.com"));
        assert!(config.is_noise("  HTTP://EXAMPLE.COM/page "));
        assert!(!config.is_noise("see https://example.com"));
    }

    #[test]
    fn test_ping_request_is_noise() {
        let config = FilterConfig::new();
        assert!(config.is_noise("PING? [request]"));
        assert!(config.is_noise("ping? [request] 1234"));
        assert!(!config.is_noise("ping?"));
    }

    #[test]
    fn test_empty_is_noise_by_default() {
        assert!(FilterConfig::new().is_noise(""));
        assert!(FilterConfig::new().is_noise(" \n\t"));
        assert!(!FilterConfig::new().with_skip_empty(false).is_noise(""));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let config = FilterConfig {
            noise_prefixes: Vec::new(),
            skip_empty: false,
        };
        let messages = vec![msg(""), msg("https://x.y"), msg("hello")];
        assert_eq!(apply_filters(messages, &config).len(), 3);
    }

    #[test]
    fn test_custom_prefix() {
        let config = FilterConfig::new().with_noise_prefix("[Auto-Reply]");
        assert!(config.is_noise("[auto-reply] je suis absent"));
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let messages = vec![
            msg("one"),
            msg("https://example.com"),
            msg("two"),
            msg("ping? [request]"),
            msg("three"),
        ];
        let filtered = apply_filters(messages, &FilterConfig::new());
        let contents: Vec<&str> = filtered.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }
}
