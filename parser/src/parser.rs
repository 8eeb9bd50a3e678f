//! Line parser for MAINTAINERS files
//!
//! The file starts with a free-form preamble that ends at the line beginning
//! with [`SECTION_MARKER`]. After it, every section is a module header line
//! followed by `X:` field lines:
//!
//! ```text
//! FOO SUBSYSTEM
//! M:	John Doe <jd@example.com>
//! L:	foo@vger.kernel.org
//! S:	Maintained
//! F:	drivers/foo/
//! ```

use crate::{ParseError, Result};
use model::{DuplicatePolicy, Maintainer, Modules, Tag};
use std::borrow::Cow;
use std::io::BufRead;

/// Lines before the one starting with this text are skipped
pub const SECTION_MARKER: &str = "Maintainers List";

/// Classification of a line after the section marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank or decorative line
    Ignored,
    /// Starts a new module; holds the untouched line
    Header(&'a str),
    /// `X: content` line; holds the trimmed line
    Field(&'a str),
}

/// Classify one line of the section body.
///
/// Blank lines and lines not starting with an ASCII letter or digit are
/// ignored. A line whose second character is `:` is a field line, anything
/// else is a module header.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Ignored;
    }

    let bytes = line.as_bytes();
    if !bytes[0].is_ascii_alphanumeric() {
        return LineKind::Ignored;
    }

    if bytes.get(1) == Some(&b':') {
        LineKind::Field(line.trim())
    } else {
        LineKind::Header(line)
    }
}

/// Split a trimmed field line into its tag and normalized content.
///
/// Returns `None` when the first two characters are not a known `X:` tag.
pub fn parse_field(text: &str) -> Option<(Tag, String)> {
    let mut chars = text.chars();
    let tag = Tag::from_letter(chars.next()?)?;
    if chars.next() != Some(':') {
        return None;
    }

    // Tag letters and ':' are ASCII, so byte 2 is a char boundary
    Some((tag, normalize(&text[2..])))
}

/// Trim surrounding whitespace and turn tabs into single spaces
pub fn normalize(content: &str) -> String {
    content.trim().replace('\t', " ")
}

/// Incremental parser state
///
/// Feed lines in order with [`parse_line`](Self::parse_line) and collect the
/// result with [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct MaintainersParser {
    policy: DuplicatePolicy,
    started: bool,
    line: usize,
    current: Option<String>,
    modules: Modules,
}

impl MaintainersParser {
    /// Create a parser that overwrites duplicate modules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit duplicate module policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Whether the section marker has been seen
    pub fn started(&self) -> bool {
        self.started
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Name of the module receiving field lines
    pub fn current_module(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Consume one line, without its line terminator
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        self.line += 1;

        if !self.started {
            if line.starts_with(SECTION_MARKER) {
                tracing::debug!(line = self.line, "found section marker");
                self.started = true;
            }
            return Ok(());
        }

        match classify(line) {
            LineKind::Ignored => Ok(()),
            LineKind::Header(name) => self.start_module(name),
            LineKind::Field(text) => self.apply_field(text),
        }
    }

    /// Finish parsing and return the collected modules
    pub fn finish(self) -> Modules {
        if !self.started {
            tracing::warn!(
                "no '{}' marker found in {} lines, nothing parsed",
                SECTION_MARKER,
                self.line
            );
        }
        self.modules
    }

    fn start_module(&mut self, name: &str) -> Result<()> {
        if self.modules.contains(name) {
            match self.policy {
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(line = self.line, module = name, "duplicate module replaces earlier entry");
                    self.modules.insert(name, Maintainer::new());
                }
                DuplicatePolicy::Merge => {
                    tracing::debug!(line = self.line, module = name, "merging duplicate module");
                }
                DuplicatePolicy::Error => {
                    return Err(ParseError::DuplicateModule {
                        line: self.line,
                        name: name.to_string(),
                    });
                }
            }
        } else {
            tracing::trace!(line = self.line, module = name, "module");
            self.modules.insert(name, Maintainer::new());
        }

        self.current = Some(name.to_string());
        Ok(())
    }

    fn apply_field(&mut self, text: &str) -> Result<()> {
        let record = match self.current.as_deref() {
            Some(name) => self.modules.get_mut(name),
            None => None,
        };
        let Some(record) = record else {
            return Err(ParseError::FieldBeforeModule {
                line: self.line,
                text: text.to_string(),
            });
        };

        let Some((tag, value)) = parse_field(text) else {
            return Err(ParseError::UnknownTag {
                line: self.line,
                text: text.to_string(),
            });
        };

        record.apply(tag, value);
        Ok(())
    }
}

/// Parse MAINTAINERS content, overwriting duplicate modules
pub fn parse_str(content: &str) -> Result<Modules> {
    parse_str_with(content, DuplicatePolicy::default())
}

/// Parse MAINTAINERS content with an explicit duplicate policy
pub fn parse_str_with(content: &str, policy: DuplicatePolicy) -> Result<Modules> {
    let mut parser = MaintainersParser::with_policy(policy);
    for line in content.lines() {
        parser.parse_line(line)?;
    }
    Ok(parser.finish())
}

/// Parse MAINTAINERS content from a buffered reader
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn parse_reader<R: BufRead>(reader: R, policy: DuplicatePolicy) -> Result<Modules> {
    let mut parser = MaintainersParser::with_policy(policy);
    feed_lines(&mut parser, reader, ParseError::Io)?;
    Ok(parser.finish())
}

/// Feed every line of `reader` to `parser`, decoding each line lossily.
/// `io_error` wraps read failures.
pub(crate) fn feed_lines<R, F>(parser: &mut MaintainersParser, mut reader: R, io_error: F) -> Result<()>
where
    R: BufRead,
    F: Fn(std::io::Error) -> ParseError,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(&io_error)? == 0 {
            return Ok(());
        }

        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            tracing::warn!(line = parser.lines_read() + 1, "invalid UTF-8 replaced");
        }
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);
        parser.parse_line(line)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Ignored);
        assert_eq!(classify(" \t "), LineKind::Ignored);
        assert_eq!(classify("---"), LineKind::Ignored);
        assert_eq!(classify("\tM: indented"), LineKind::Ignored);
        assert_eq!(classify("3C59X NETWORK DRIVER"), LineKind::Header("3C59X NETWORK DRIVER"));
        assert_eq!(classify("M:\tA <a@b.c>  "), LineKind::Field("M:\tA <a@b.c>"));
        assert_eq!(classify("X"), LineKind::Header("X"));
    }

    #[test]
    fn test_reader_replaces_invalid_utf8() {
        let input: &[u8] = b"Maintainers List\r\nFOO DRIVER\r\nM:\tJos\xe9 <j@example.com>\r\nS:\tMaintained";
        let modules = parse_reader(input, DuplicatePolicy::default()).unwrap();

        let record = modules.get("FOO DRIVER").unwrap();
        assert_eq!(record.mails, vec!["Jos\u{FFFD} <j@example.com>"]);
        assert_eq!(record.status.as_deref(), Some("Maintained"));
    }

    #[test]
    fn test_header_keeps_trailing_whitespace() {
        assert_eq!(classify("FOO DRIVER "), LineKind::Header("FOO DRIVER "));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("M:\tJohn Doe <jd@example.com>"),
            Some((Tag::Mail, "John Doe <jd@example.com>".to_string()))
        );
        assert_eq!(
            parse_field("K:\t\\b(foo|bar)\\b"),
            Some((Tag::ContentRegex, "\\b(foo|bar)\\b".to_string()))
        );
        assert_eq!(parse_field("Z: something"), None);
        assert_eq!(parse_field("m: lower"), None);
    }

    #[test]
    fn test_parse_field_keeps_later_colons() {
        assert_eq!(
            parse_field("W:\thttps://example.org/a:b"),
            Some((Tag::Web, "https://example.org/a:b".to_string()))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("\tgit\tgit://example.org/x.git  "), "git git://example.org/x.git");
        let once = normalize(" a\tb\t\tc ");
        assert_eq!(once, "a b  c");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_preamble_is_skipped() {
        let mut parser = MaintainersParser::new();
        parser.parse_line("List of maintainers").unwrap();
        parser.parse_line("M: not a field yet").unwrap();
        parser.parse_line("FOO").unwrap();
        assert!(!parser.started());
        assert!(parser.current_module().is_none());

        parser.parse_line("Maintainers List (try to look for most precise areas first)").unwrap();
        assert!(parser.started());
        parser.parse_line("FOO").unwrap();
        assert_eq!(parser.current_module(), Some("FOO"));
        assert_eq!(parser.lines_read(), 5);
    }

    #[test]
    fn test_field_before_module() {
        let mut parser = MaintainersParser::new();
        parser.parse_line(SECTION_MARKER).unwrap();
        let err = parser.parse_line("M:\tA <a@example.com>").unwrap_err();
        assert!(matches!(err, ParseError::FieldBeforeModule { line: 2, .. }));
    }
}
