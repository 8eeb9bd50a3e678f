//! Renderers for a parsed module collection
//!
//! All functions here are pure: they read a [`Modules`] collection and
//! return text. Output order always follows collection order.

use crate::{ParseError, Result};
use model::{Maintainer, Modules, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the mail reverse index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailIndexFormat {
    /// `module<TAB>mail`, one line per pair
    Flat,
    /// `mail<TAB>"module1\nmodule2"`, one line per mail
    #[default]
    Grouped,
    /// Module name followed by its tab-indented mails, blank line between modules
    Sections,
}

impl fmt::Display for MailIndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailIndexFormat::Flat => write!(f, "flat"),
            MailIndexFormat::Grouped => write!(f, "grouped"),
            MailIndexFormat::Sections => write!(f, "sections"),
        }
    }
}

/// Serialize the collection as tab-indented JSON
pub fn to_json(modules: &Modules) -> Result<String> {
    to_tab_json(modules)
}

/// Serialize one record with the same layout as [`to_json`]
pub fn record_to_json(record: &Maintainer) -> Result<String> {
    to_tab_json(record)
}

fn to_tab_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|e| ParseError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Read a collection back from JSON produced by [`to_json`]
pub fn from_json(text: &str) -> Result<Modules> {
    Ok(serde_json::from_str(text)?)
}

/// Render the CSV summary, one row per module
pub fn to_csv(modules: &Modules) -> String {
    let mut output = String::from("Module");
    for tag in Tag::ALL {
        output.push(',');
        output.push_str(tag.column_name());
    }
    output.push('\n');

    for (name, record) in modules {
        output.push_str(&csv_cell(name));
        for tag in Tag::ALL {
            output.push(',');
            output.push_str(&csv_cell(&record.field(tag).joined()));
        }
        output.push('\n');
    }

    output
}

/// Quote a cell when it holds a separator, a quote or a line break
fn csv_cell(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the mail reverse index in the requested layout
pub fn mail_index(modules: &Modules, format: MailIndexFormat) -> String {
    match format {
        MailIndexFormat::Flat => mail_index_flat(modules),
        MailIndexFormat::Grouped => mail_index_grouped(modules),
        MailIndexFormat::Sections => mail_index_sections(modules),
    }
}

fn mail_index_flat(modules: &Modules) -> String {
    let mut output = String::new();
    for (name, record) in modules {
        for mail in &record.mails {
            output.push_str(&format!("{}\t{}\n", name, mail));
        }
    }
    output
}

// Quotes inside module names are dropped, not escaped; two names differing
// only in quotes render the same.
fn mail_index_grouped(modules: &Modules) -> String {
    let mut output = String::new();
    for (mail, names) in modules.mail_index() {
        let joined = names.join("\n").replace('"', "");
        output.push_str(&format!("{}\t\"{}\"\n", mail, joined));
    }
    output
}

fn mail_index_sections(modules: &Modules) -> String {
    let mut output = String::new();
    for (name, record) in modules {
        output.push_str(name);
        output.push('\n');
        for mail in &record.mails {
            output.push_str(&format!("\t{}\n", mail));
        }
        output.push('\n');
    }
    output
}
