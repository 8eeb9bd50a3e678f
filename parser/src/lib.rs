//! MAINTAINERS file parsing and export
//!
//! This crate turns a kernel-style `MAINTAINERS` file into a
//! [`Modules`](model::Modules) collection and renders that
//! collection in the formats downstream tooling consumes.
//!
//! # Overview
//!
//! - [`parser`]: line classification and tag dispatch
//! - [`loader`]: reading files and writing outputs
//! - [`export`]: JSON, CSV and mail index renderers
//! - [`matcher`]: path lookup over `F:` / `X:` / `N:` patterns
//! - [`error`]: error types
//!
//! # Quick Start
//!
//! ```rust
//! use maintainers_parser::{export, parse_str};
//!
//! let input = "\
//! Maintainers List
//! ----------------
//!
//! FOO SUBSYSTEM
//! M:\tJohn Doe <jd@example.com>
//! S:\tMaintained
//! F:\tdrivers/foo/
//! ";
//!
//! let modules = parse_str(input).unwrap();
//! let record = modules.get("FOO SUBSYSTEM").unwrap();
//! assert_eq!(record.mails, vec!["John Doe <jd@example.com>"]);
//!
//! let json = export::to_json(&modules).unwrap();
//! assert!(json.contains("\"mails\""));
//! ```

pub mod error;
pub mod export;
pub mod loader;
pub mod matcher;
pub mod parser;

pub use error::{ParseError, Result};
pub use export::MailIndexFormat;
pub use loader::{write_output, MaintainersLoader};
pub use matcher::{MatcherSet, ModuleMatcher};
pub use parser::{parse_reader, parse_str, parse_str_with, MaintainersParser, SECTION_MARKER};

pub use model;
