//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::models::{Conversation, OutputConfig};
use crate::error::Result;

/// Writes one conversation to a JSON file.
///
/// # Format
/// ```json
/// {
///     "conversations": [
///         {
///             "from": "human",
///             "value": "salut !"
///         },
///         {
///             "from": "gpt",
///             "value": "ça va ?"
///         }
///     ]
/// }
/// ```
pub fn write_conversation(
    conversation: &Conversation,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json_bytes(conversation, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(&json)?;
    Ok(())
}

/// Converts a conversation to an indented JSON string.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn to_json(conversation: &Conversation, config: &OutputConfig) -> Result<String> {
    let buf = to_json_bytes(conversation, config)?;
    String::from_utf8(buf).map_err(|e| serde_json::Error::custom(e).into())
}

fn to_json_bytes(conversation: &Conversation, config: &OutputConfig) -> Result<Vec<u8>> {
    let indent = " ".repeat(config.indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    conversation.serialize(&mut serializer)?;
    Ok(buf)
}
