//! # Errors
//!
//! Error kinds surfaced while collecting, rendering, and writing a note.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure while producing a note.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Malformed user input, such as a `--keyvalue` argument without a colon.
    #[error("invalid format: {message}")]
    Format { message: String },

    /// Unknown, unreadable, or invalid template, or a placeholder with no value.
    #[error("template error: {message}")]
    Template { message: String },

    /// File open, read, or write failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl NoteError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for note operations.
pub type Result<T> = std::result::Result<T, NoteError>;
