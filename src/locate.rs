//! MAINTAINERS file detection
//!
//! Finds the file to parse when no path is given on the command line.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the input file
pub const INPUT_ENV: &str = "MAINTAINERS_FILE";

/// Standard locations for the MAINTAINERS file (in search order)
pub const STANDARD_LOCATIONS: &[&str] = &[
    "MAINTAINERS",                // Kernel checkout in the current directory
    "/usr/src/linux/MAINTAINERS", // Installed kernel sources
];

/// Detect the MAINTAINERS file path
///
/// Searches in order:
/// 1. User-specified path (`--file` or `MAINTAINERS_FILE`)
/// 2. `input` from the settings file
/// 3. ./MAINTAINERS
/// 4. /usr/src/linux/MAINTAINERS
///
/// An explicitly given path must be valid; standard locations are skipped
/// when missing.
pub fn detect_maintainers_path(
    custom_path: Option<&Path>,
    configured_path: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = custom_path.or(configured_path) {
        return validate_maintainers_file(path);
    }

    for location in STANDARD_LOCATIONS {
        let path = Path::new(location);
        if path.is_file() {
            let path = validate_maintainers_file(path)?;
            tracing::debug!(path = %path.display(), "found MAINTAINERS file");
            return Ok(path);
        }
    }

    bail!(
        "Could not find a MAINTAINERS file.\n\
        \n\
        Searched locations:\n{}\n\
        \n\
        Please either:\n\
        1. Run from the top of a kernel source tree\n\
        2. Set the {} environment variable\n\
        3. Use --file to specify the location",
        STANDARD_LOCATIONS
            .iter()
            .map(|p| format!("  - {}", p))
            .collect::<Vec<_>>()
            .join("\n"),
        INPUT_ENV
    )
}

/// Validate that a path names a readable regular file
pub fn validate_maintainers_file(path: &Path) -> Result<PathBuf> {
    let canonical_path = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve MAINTAINERS path: {}", path.display()))?;

    if !canonical_path.is_file() {
        bail!(
            "MAINTAINERS path is not a file: {}",
            canonical_path.display()
        );
    }

    Ok(canonical_path)
}
