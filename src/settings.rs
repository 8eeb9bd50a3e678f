//! Settings file
//!
//! Optional TOML file holding defaults for the command line:
//!
//! ```toml
//! input = "/usr/src/linux/MAINTAINERS"
//! on_duplicate = "merge"
//!
//! [output]
//! json = "maintainers.json"
//! mail_index = "mails.txt"
//! mail_format = "grouped"
//! csv = "maintainers.csv"
//! ```

use anyhow::{Context, Result};
use model::DuplicatePolicy;
use parser::MailIndexFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// MAINTAINERS file to read
    pub input: Option<PathBuf>,
    /// Handling of repeated module headers
    pub on_duplicate: Option<DuplicatePolicy>,
    /// Output files
    pub output: OutputSettings,
}

/// Output file settings for `convert`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub json: Option<PathBuf>,
    pub mail_index: Option<PathBuf>,
    pub mail_format: Option<MailIndexFormat>,
    pub csv: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
