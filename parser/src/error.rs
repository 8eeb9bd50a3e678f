//! Error types for parsing and export

use std::path::PathBuf;
use thiserror::Error;

/// Parsing and export errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown tag at line {line}: {text}")]
    UnknownTag { line: usize, text: String },

    #[error("Field line before any module header at line {line}: {text}")]
    FieldBeforeModule { line: usize, text: String },

    #[error("Duplicate module at line {line}: {name}")]
    DuplicateModule { line: usize, name: String },

    #[error("Invalid pattern '{pattern}' in module '{module}': {reason}")]
    InvalidPattern {
        module: String,
        pattern: String,
        reason: String,
    },
}

impl ParseError {
    /// Input line number for errors raised while parsing
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnknownTag { line, .. }
            | ParseError::FieldBeforeModule { line, .. }
            | ParseError::DuplicateModule { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
