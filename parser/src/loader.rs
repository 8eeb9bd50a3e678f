//! File loading and output writing

use crate::parser::feed_lines;
use crate::{MaintainersParser, ParseError, Result};
use model::{DuplicatePolicy, Modules};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Loads a MAINTAINERS file from disk
pub struct MaintainersLoader {
    /// File to read
    path: PathBuf,
    /// Handling of repeated module headers
    policy: DuplicatePolicy,
}

impl MaintainersLoader {
    /// Create a loader for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: DuplicatePolicy::default(),
        }
    }

    /// Set the duplicate module policy
    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the input path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    pub fn load(&self) -> Result<Modules> {
        let file = File::open(&self.path).map_err(|source| ParseError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut parser = MaintainersParser::with_policy(self.policy);
        feed_lines(&mut parser, BufReader::new(file), |source| ParseError::Read {
            path: self.path.clone(),
            source,
        })?;

        let lines = parser.lines_read();
        let modules = parser.finish();
        tracing::info!(
            path = %self.path.display(),
            lines,
            modules = modules.len(),
            "parsed maintainers file"
        );
        Ok(modules)
    }
}

/// Write `content` to `path`, replacing any existing file
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let to_error = |source: std::io::Error| ParseError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
