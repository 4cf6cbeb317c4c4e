//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`Encoding`] - input encoding option
//! - [`Months`] - month-name locale option

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ChunkConfig, InputEncoding, MsnConfig};
use crate::parsing::MonthTable;

/// Convert Messenger Plus! HTML logs into conversation JSON for LLM
/// fine-tuning. Messages from SELF_IDENTIFIER become `gpt` turns.
#[derive(Parser, Debug, Clone)]
#[command(name = "msnpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    msnpack me@hotmail.com
    msnpack me@hotmail.com --input logs --output dataset
    msnpack me@hotmail.com --encoding utf8 --months english
    msnpack me@hotmail.com --chunk-size 20 -vv")]
pub struct Args {
    /// Your own identifier (usually your MSN email address)
    pub self_identifier: String,

    /// Folder containing the .html logs
    #[arg(short, long, default_value = "data/raw_data", value_name = "DIR")]
    pub input: PathBuf,

    /// Folder receiving the .json files (created if missing)
    #[arg(short, long, default_value = "data/preprocessed", value_name = "DIR")]
    pub output: PathBuf,

    /// Byte encoding of the logs
    #[arg(short, long, value_enum, default_value = "utf16le")]
    pub encoding: Encoding,

    /// Language of the month names in session headings
    #[arg(short, long, value_enum, default_value = "french")]
    pub months: Months,

    /// Maximum turns per output file
    #[arg(long, default_value_t = 40, value_name = "N")]
    pub chunk_size: usize,

    /// Minimum turns for a file to be written
    #[arg(long, default_value_t = 3, value_name = "N")]
    pub min_chunk: usize,

    /// Keep messages with empty content
    #[arg(long)]
    pub keep_empty: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration for these arguments.
    pub fn msn_config(&self) -> MsnConfig {
        MsnConfig::new(self.self_identifier.clone())
            .with_encoding(self.encoding.into())
            .with_months(self.months.into())
    }

    /// Chunking configuration for these arguments.
    pub fn chunk_config(&self) -> ChunkConfig {
        ChunkConfig::new()
            .with_max_len(self.chunk_size)
            .with_min_len(self.min_chunk)
    }
}

/// Input encoding option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Encoding {
    /// UTF-16 little-endian (what Messenger Plus! writes)
    #[default]
    #[value(name = "utf16le", alias = "utf-16le")]
    Utf16Le,

    /// UTF-8
    #[value(name = "utf8", alias = "utf-8")]
    Utf8,
}

impl From<Encoding> for InputEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf16Le => InputEncoding::Utf16Le,
            Encoding::Utf8 => InputEncoding::Utf8,
        }
    }
}

/// Month-name locale option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Months {
    #[default]
    #[value(alias = "fr")]
    French,

    #[value(alias = "en")]
    English,
}

impl From<Months> for MonthTable {
    fn from(months: Months) -> Self {
        match months {
            Months::French => MonthTable::French,
            Months::English => MonthTable::English,
        }
    }
}
