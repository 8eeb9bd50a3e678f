//! Path lookup over module file patterns
//!
//! Follows the rules in the MAINTAINERS legend:
//!
//! - `F:` and `X:` patterns ending in `/` cover everything below that
//!   directory; a pattern naming a directory without the slash does too.
//! - Otherwise `*`, `?` and `[..]` are shell wildcards that do not cross `/`.
//! - `X:` exclusions are checked before `F:` matches.
//! - `N:` patterns are regular expressions searched anywhere in the path.

use crate::{ParseError, Result};
use glob::{MatchOptions, Pattern};
use model::{Maintainer, Modules};
use regex::Regex;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled `F:` or `X:` pattern
#[derive(Debug, Clone)]
enum FilePattern {
    /// Directory with trailing slash
    Prefix(String),
    /// No wildcards: the exact file or a directory of that name
    Literal(String),
    Glob(Pattern),
}

impl FilePattern {
    fn compile(pattern: &str) -> std::result::Result<Self, glob::PatternError> {
        let wildcard = pattern.contains(&['*', '?', '['][..]);
        if !wildcard {
            return Ok(if pattern.ends_with('/') {
                FilePattern::Prefix(pattern.to_string())
            } else {
                FilePattern::Literal(pattern.to_string())
            });
        }

        if pattern.ends_with('/') {
            Ok(FilePattern::Glob(Pattern::new(&format!("{}**", pattern))?))
        } else {
            Ok(FilePattern::Glob(Pattern::new(pattern)?))
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            FilePattern::Prefix(dir) => path.starts_with(dir.as_str()),
            FilePattern::Literal(name) => match path.strip_prefix(name.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
            FilePattern::Glob(glob) => glob.matches_with(path, GLOB_OPTIONS),
        }
    }
}

/// File matcher for one module
#[derive(Debug, Clone)]
pub struct ModuleMatcher {
    files: Vec<FilePattern>,
    excluded: Vec<FilePattern>,
    regexes: Vec<Regex>,
}

impl ModuleMatcher {
    /// Compile the `F:`, `X:` and `N:` patterns of `record`
    pub fn compile(module: &str, record: &Maintainer) -> Result<Self> {
        let invalid = |pattern: &str, reason: String| ParseError::InvalidPattern {
            module: module.to_string(),
            pattern: pattern.to_string(),
            reason,
        };

        let compile_globs = |patterns: &[String]| -> Result<Vec<FilePattern>> {
            patterns
                .iter()
                .map(|p| FilePattern::compile(p).map_err(|e| invalid(p.as_str(), e.to_string())))
                .collect()
        };

        let files = compile_globs(&record.files)?;
        let excluded = compile_globs(&record.excluded)?;
        let regexes = record
            .file_regex
            .iter()
            .map(|p| Regex::new(p).map_err(|e| invalid(p.as_str(), e.to_string())))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            files,
            excluded,
            regexes,
        })
    }

    /// Whether this module maintains `path`
    pub fn matches(&self, path: &str) -> bool {
        let path = normalize_path(path);

        if self.excluded.iter().any(|p| p.matches(path)) {
            return false;
        }

        self.files.iter().any(|p| p.matches(path)) || self.regexes.iter().any(|r| r.is_match(path))
    }
}

/// Strip a leading `./` or `/` so paths compare against repository-relative patterns
fn normalize_path(path: &str) -> &str {
    let path = path.strip_prefix("./").unwrap_or(path);
    path.trim_start_matches('/')
}

/// Matchers for every module that has file patterns
pub struct MatcherSet<'a> {
    entries: Vec<(&'a str, ModuleMatcher)>,
}

impl<'a> MatcherSet<'a> {
    /// Compile matchers for a whole collection
    pub fn compile(modules: &'a Modules) -> Result<Self> {
        let mut entries = Vec::new();
        for (name, record) in modules {
            if record.has_file_patterns() {
                entries.push((name.as_str(), ModuleMatcher::compile(name, record)?));
            }
        }
        tracing::debug!(matchers = entries.len(), "compiled file matchers");
        Ok(Self { entries })
    }

    /// Names of modules maintaining `path`, in collection order
    pub fn lookup(&self, path: &str) -> Vec<&'a str> {
        self.entries
            .iter()
            .filter(|(_, matcher)| matcher.matches(path))
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Tag;

    fn matcher(lines: &[(Tag, &str)]) -> ModuleMatcher {
        let mut record = Maintainer::new();
        for (tag, value) in lines {
            record.apply(*tag, *value);
        }
        ModuleMatcher::compile("TEST", &record).unwrap()
    }

    #[test]
    fn test_directory_prefix() {
        let m = matcher(&[(Tag::File, "drivers/net/")]);
        assert!(m.matches("drivers/net/foo/bar.c"));
        assert!(m.matches("./drivers/net/Kconfig"));
        assert!(!m.matches("drivers/network.c"));
    }

    #[test]
    fn test_literal_file_and_directory() {
        let m = matcher(&[(Tag::File, "include/linux/netdevice.h"), (Tag::File, "net/core")]);
        assert!(m.matches("include/linux/netdevice.h"));
        assert!(!m.matches("include/linux/netdevice.h.orig"));
        assert!(m.matches("net/core/dev.c"));
        assert!(!m.matches("net/corex/dev.c"));
    }

    #[test]
    fn test_glob_does_not_cross_directories() {
        let m = matcher(&[(Tag::File, "drivers/net/ethernet/*/mlx*")]);
        assert!(m.matches("drivers/net/ethernet/mellanox/mlx5"));
        assert!(!m.matches("drivers/net/ethernet/mellanox/sub/mlx5"));

        let top = matcher(&[(Tag::File, "*")]);
        assert!(top.matches("Makefile"));
        assert!(!top.matches("kernel/fork.c"));
    }

    #[test]
    fn test_wildcard_directory() {
        let m = matcher(&[(Tag::File, "*/")]);
        assert!(m.matches("kernel/fork.c"));
        assert!(m.matches("drivers/net/dummy.c"));
    }

    #[test]
    fn test_exclusion_wins() {
        let m = matcher(&[(Tag::File, "drivers/net/"), (Tag::Excluded, "drivers/net/wireless/")]);
        assert!(m.matches("drivers/net/dummy.c"));
        assert!(!m.matches("drivers/net/wireless/ath/main.c"));
    }

    #[test]
    fn test_file_regex() {
        let m = matcher(&[(Tag::FileRegex, "[^a-z]tegra")]);
        assert!(m.matches("drivers/clk/clk-tegra.c"));
        assert!(!m.matches("drivers/clk/integral.c"));
    }

    #[test]
    fn test_invalid_pattern() {
        let mut record = Maintainer::new();
        record.apply(Tag::FileRegex, "(unclosed");
        let err = ModuleMatcher::compile("BROKEN", &record).unwrap_err();
        assert!(matches!(err, ParseError::InvalidPattern { ref module, .. } if module == "BROKEN"));
    }

    #[test]
    fn test_matcher_set() {
        let mut modules = Modules::new();
        let mut net = Maintainer::new();
        net.apply(Tag::File, "net/");
        let mut rest = Maintainer::new();
        rest.apply(Tag::File, "*");
        rest.apply(Tag::File, "*/");
        modules.insert("NETWORKING", net);
        modules.insert("NO PATTERNS", Maintainer::new());
        modules.insert("THE REST", rest);

        let set = MatcherSet::compile(&modules).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.lookup("net/ipv4/tcp.c"), vec!["NETWORKING", "THE REST"]);
        assert_eq!(set.lookup("README"), vec!["THE REST"]);
    }
}
