//! Unified error types for msnpack.
//!
//! This module provides a single [`MsnpackError`] enum that covers every
//! failure the library can report. Errors are scoped to one document: the
//! batch converter logs them and moves on to the next file.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for msnpack operations.
///
/// # Example
///
/// ```rust
/// use msnpack::error::Result;
/// use msnpack::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, MsnpackError>;

/// The error type for all msnpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MsnpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file or directory doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes could not be decoded with the expected encoding.
    ///
    /// Messenger Plus! writes its logs as UTF-16 little-endian; a file with
    /// an odd byte count or unpaired surrogates ends up here.
    #[error("Cannot decode {encoding} input{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Encoding {
        /// The encoding that was expected
        encoding: &'static str,
        /// What went wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// JSON serialization error while writing conversations.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl MsnpackError {
    /// Creates a decoding error for the given encoding name.
    pub fn encoding(
        encoding: &'static str,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        MsnpackError::Encoding {
            encoding,
            message: message.into(),
            path,
        }
    }

    /// Attaches a file path to errors that carry one.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            MsnpackError::Encoding {
                encoding, message, ..
            } => MsnpackError::Encoding {
                encoding,
                message,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, MsnpackError::Io(_))
    }

    /// Returns `true` if this is a decoding error.
    pub fn is_encoding(&self) -> bool {
        matches!(self, MsnpackError::Encoding { .. })
    }

    /// Returns `true` if this is a JSON serialization error.
    pub fn is_json(&self) -> bool {
        matches!(self, MsnpackError::Json(_))
    }
}
