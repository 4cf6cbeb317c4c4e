//! Document and folder conversion.
//!
//! [`Converter`] runs the whole pipeline for one log: parse sessions, filter
//! noise, chunk the turns and write one JSON file per chunk. A failing
//! document never stops a folder run; it is logged and counted.
//!
//! # Example
//!
//! ```rust,no_run
//! use msnpack::config::MsnConfig;
//! use msnpack::convert::Converter;
//!
//! let converter = Converter::new(MsnConfig::new("me@example.com"));
//! let report = converter.convert_folder("data/raw_data", "data/preprocessed")?;
//! println!("{} files written", report.files_written());
//! # Ok::<(), msnpack::MsnpackError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::{ChunkConfig, MsnConfig};
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::models::OutputConfig;
use crate::core::output::write_conversation;
use crate::core::processor::{ProcessingStats, build_conversations};
use crate::error::Result;
use crate::parser::Parser;
use crate::parsers::MsnParser;

/// Extension of the log files picked up from the input folder.
pub const INPUT_EXTENSION: &str = "html";

/// Outcome of converting one document.
#[derive(Debug, Clone, Default)]
pub struct DocumentReport {
    pub input: PathBuf,
    pub outputs: Vec<PathBuf>,
    pub stats: ProcessingStats,
}

/// Outcome of converting a folder.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<DocumentReport>,
    /// Documents skipped because of an error, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn files_written(&self) -> usize {
        self.converted.iter().map(|r| r.outputs.len()).sum()
    }

    pub fn messages_retained(&self) -> usize {
        self.converted.iter().map(|r| r.stats.retained).sum()
    }

    pub fn documents_seen(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Stats summed over every converted document.
    pub fn totals(&self) -> ProcessingStats {
        self.converted
            .iter()
            .fold(ProcessingStats::default(), |acc, r| ProcessingStats {
                sessions: acc.sessions + r.stats.sessions,
                parsed: acc.parsed + r.stats.parsed,
                retained: acc.retained + r.stats.retained,
                files_written: acc.files_written + r.stats.files_written,
                dropped_turns: acc.dropped_turns + r.stats.dropped_turns,
            })
    }
}

/// Converts chat logs into conversation files.
pub struct Converter {
    parser: Box<dyn Parser>,
    filter: FilterConfig,
    chunking: ChunkConfig,
    output: OutputConfig,
}

impl Converter {
    /// Creates a converter for Messenger Plus! logs with default filter,
    /// chunking and output settings.
    pub fn new(config: MsnConfig) -> Self {
        Self::with_parser(Box::new(MsnParser::with_config(config)))
    }

    /// Creates a converter around any parser.
    pub fn with_parser(parser: Box<dyn Parser>) -> Self {
        Self {
            parser,
            filter: FilterConfig::default(),
            chunking: ChunkConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_chunking(mut self, chunking: ChunkConfig) -> Self {
        self.chunking = chunking;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Converts one log into `output_dir/<stem>[offset].json` files.
    ///
    /// The output directory must already exist. If any file fails to write,
    /// the files already written for this log are removed before the error
    /// is returned.
    pub fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<DocumentReport> {
        let input = input.as_ref();
        let output_dir = output_dir.as_ref();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(file = %input.display(), parser = self.parser.name(), "Processing file");
        let sessions = self.parser.parse(input)?;
        debug!(file = %input.display(), sessions = sessions.len(), "Found sessions");

        let mut stats = ProcessingStats {
            sessions: sessions.len(),
            ..ProcessingStats::default()
        };

        let mut messages = Vec::new();
        for (idx, session) in sessions.into_iter().enumerate() {
            stats.parsed += session.messages.len();
            let kept = apply_filters(session.messages, &self.filter);
            if !kept.is_empty() {
                debug!(
                    session = idx + 1,
                    added = kept.len(),
                    total = messages.len() + kept.len(),
                    "Session messages added"
                );
            }
            messages.extend(kept);
        }
        stats.retained = messages.len();

        let conversations = build_conversations(&messages, &self.chunking);
        let written_turns: usize = conversations.iter().map(|c| c.len()).sum();
        stats.dropped_turns = messages.len() - written_turns;
        if stats.dropped_turns > 0 {
            debug!(
                file = %input.display(),
                dropped = stats.dropped_turns,
                min_len = self.chunking.min_len,
                "Skipped conversations too short to keep"
            );
        }

        let mut outputs = Vec::with_capacity(conversations.len());
        for conversation in &conversations {
            let path = output_dir.join(conversation.file_name(&stem));
            if let Err(e) = write_conversation(conversation, &path, &self.output) {
                discard_outputs(&outputs);
                return Err(e);
            }
            info!(file = %path.display(), messages = conversation.len(), "Saved");
            outputs.push(path);
        }
        stats.files_written = outputs.len();

        Ok(DocumentReport {
            input: input.to_path_buf(),
            outputs,
            stats,
        })
    }

    /// Converts every `.html` file directly inside `input_dir`.
    ///
    /// `output_dir` is created if missing. Only an unreadable input folder or
    /// an uncreatable output folder fails the whole run.
    pub fn convert_folder(
        &self,
        input_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<BatchReport> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
            info!(dir = %output_dir.display(), "Created output folder");
        }

        let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_log_file(path))
            .collect();
        inputs.sort();

        if inputs.is_empty() {
            warn!(
                dir = %input_dir.display(),
                "No .html files found; make sure the logs are in this folder and end in .html"
            );
        }

        let mut report = BatchReport::default();
        for input in inputs {
            info!(file = %input.display(), "Processing");
            match self.convert_file(&input, output_dir) {
                Ok(doc) => report.converted.push(doc),
                Err(e) => {
                    error!(file = %input.display(), error = %e, "Skipping document");
                    report.failed.push((input, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}

fn discard_outputs(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!(file = %path.display(), "Removed partial output"),
            Err(e) => warn!(file = %path.display(), error = %e, "Could not remove partial output"),
        }
    }
}

fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(&format!(".{INPUT_EXTENSION}")))
}
