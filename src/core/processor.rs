//! Turn a document's messages into bounded conversations.

use crate::Message;
use crate::config::ChunkConfig;

use super::models::{Conversation, Turn};

/// Splits turns into the conversations written for one document.
///
/// A document with at most `max_len` turns stays whole; a longer one is cut
/// into consecutive chunks of `max_len`, each remembering its offset. Any
/// conversation with fewer than `min_len` turns is dropped.
///
/// # Example
///
/// ```
/// use msnpack::config::ChunkConfig;
/// use msnpack::core::models::Turn;
/// use msnpack::core::processor::chunk_turns;
/// use msnpack::Speaker;
///
/// let turns: Vec<Turn> = (0..85).map(|i| Turn::new(Speaker::Other, i.to_string())).collect();
/// let chunks = chunk_turns(turns, &ChunkConfig::default());
///
/// let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, vec![40, 40, 5]);
/// assert_eq!(chunks[2].offset, Some(80));
/// ```
pub fn chunk_turns(turns: Vec<Turn>, config: &ChunkConfig) -> Vec<Conversation> {
    let max_len = config.max_len.max(1);

    if turns.len() <= max_len {
        if turns.is_empty() || turns.len() < config.min_len {
            return Vec::new();
        }
        return vec![Conversation::new(turns)];
    }

    let mut chunks = Vec::new();
    let mut turns = turns.into_iter();
    let mut offset = 0;
    loop {
        let chunk: Vec<Turn> = turns.by_ref().take(max_len).collect();
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        if len >= config.min_len {
            chunks.push(Conversation::new(chunk).at_offset(offset));
        }
        offset += len;
    }
    chunks
}

/// Reduces messages to turns and chunks them.
pub fn build_conversations(messages: &[Message], config: &ChunkConfig) -> Vec<Conversation> {
    chunk_turns(messages.iter().map(Turn::from).collect(), config)
}

/// Counts for one converted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub sessions: usize,
    /// Messages extracted from all sessions.
    pub parsed: usize,
    /// Messages left after the noise filter.
    pub retained: usize,
    pub files_written: usize,
    /// Turns that ended up in no file (short chunks).
    pub dropped_turns: usize,
}

impl ProcessingStats {
    /// Percentage of parsed messages removed by the noise filter.
    pub fn noise_ratio(&self) -> f64 {
        if self.parsed == 0 {
            return 0.0;
        }
        (1.0 - (self.retained as f64 / self.parsed as f64)) * 100.0
    }
}
