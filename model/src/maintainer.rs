//! A single maintained module
//!
//! One [`Maintainer`] is built per section of the MAINTAINERS file. List
//! fields keep every line in input order, single fields keep the last value.

use crate::Tag;
use serde::{Deserialize, Serialize};

/// Metadata attached to one module section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    /// M: maintainer contacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mails: Vec<String>,
    /// R: designated reviewers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    /// L: relevant mailing lists
    #[serde(rename = "relevantMails", default, skip_serializing_if = "Vec::is_empty")]
    pub relevant_mails: Vec<String>,
    /// S: status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// W: web pages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webs: Vec<String>,
    /// Q: patchwork site
    #[serde(rename = "patchWork", default, skip_serializing_if = "Option::is_none")]
    pub patch_work: Option<String>,
    /// B: bug reporting URIs
    #[serde(rename = "bugsURLs", default, skip_serializing_if = "Vec::is_empty")]
    pub bugs_urls: Vec<String>,
    /// C: chat URI
    #[serde(rename = "chatURL", default, skip_serializing_if = "Option::is_none")]
    pub chat_url: Option<String>,
    /// P: subsystem profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// T: SCM trees
    #[serde(rename = "scmTree", default, skip_serializing_if = "Vec::is_empty")]
    pub scm_tree: Vec<String>,
    /// F: file glob patterns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// X: excluded file glob patterns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<String>,
    /// N: file regex patterns
    #[serde(rename = "fileRegex", default, skip_serializing_if = "Vec::is_empty")]
    pub file_regex: Vec<String>,
    /// K: content regex patterns
    #[serde(rename = "contentRegex", default, skip_serializing_if = "Vec::is_empty")]
    pub content_regex: Vec<String>,
}

/// Read-only view of the field selected by a [`Tag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    List(&'a [String]),
    Single(Option<&'a str>),
}

impl<'a> FieldRef<'a> {
    /// Values of the field, empty when unset
    pub fn values(self) -> Vec<&'a str> {
        match self {
            FieldRef::List(items) => items.iter().map(String::as_str).collect(),
            FieldRef::Single(value) => value.into_iter().collect(),
        }
    }

    /// Values joined with `"; "`, as used by the CSV summary
    pub fn joined(self) -> String {
        self.values().join("; ")
    }

    pub fn is_empty(self) -> bool {
        match self {
            FieldRef::List(items) => items.is_empty(),
            FieldRef::Single(value) => value.is_none(),
        }
    }
}

enum FieldMut<'a> {
    List(&'a mut Vec<String>),
    Single(&'a mut Option<String>),
}

impl Maintainer {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `tag`: list fields append, single fields overwrite
    pub fn apply(&mut self, tag: Tag, value: impl Into<String>) {
        match self.field_mut(tag) {
            FieldMut::List(items) => items.push(value.into()),
            FieldMut::Single(slot) => *slot = Some(value.into()),
        }
    }

    /// Borrow the field selected by `tag`
    pub fn field(&self, tag: Tag) -> FieldRef<'_> {
        match tag {
            Tag::Mail => FieldRef::List(&self.mails),
            Tag::Reviewer => FieldRef::List(&self.reviewers),
            Tag::List => FieldRef::List(&self.relevant_mails),
            Tag::Status => FieldRef::Single(self.status.as_deref()),
            Tag::Web => FieldRef::List(&self.webs),
            Tag::Patchwork => FieldRef::Single(self.patch_work.as_deref()),
            Tag::Bugs => FieldRef::List(&self.bugs_urls),
            Tag::Chat => FieldRef::Single(self.chat_url.as_deref()),
            Tag::Profile => FieldRef::Single(self.profile.as_deref()),
            Tag::Tree => FieldRef::List(&self.scm_tree),
            Tag::File => FieldRef::List(&self.files),
            Tag::Excluded => FieldRef::List(&self.excluded),
            Tag::FileRegex => FieldRef::List(&self.file_regex),
            Tag::ContentRegex => FieldRef::List(&self.content_regex),
        }
    }

    fn field_mut(&mut self, tag: Tag) -> FieldMut<'_> {
        match tag {
            Tag::Mail => FieldMut::List(&mut self.mails),
            Tag::Reviewer => FieldMut::List(&mut self.reviewers),
            Tag::List => FieldMut::List(&mut self.relevant_mails),
            Tag::Status => FieldMut::Single(&mut self.status),
            Tag::Web => FieldMut::List(&mut self.webs),
            Tag::Patchwork => FieldMut::Single(&mut self.patch_work),
            Tag::Bugs => FieldMut::List(&mut self.bugs_urls),
            Tag::Chat => FieldMut::Single(&mut self.chat_url),
            Tag::Profile => FieldMut::Single(&mut self.profile),
            Tag::Tree => FieldMut::List(&mut self.scm_tree),
            Tag::File => FieldMut::List(&mut self.files),
            Tag::Excluded => FieldMut::List(&mut self.excluded),
            Tag::FileRegex => FieldMut::List(&mut self.file_regex),
            Tag::ContentRegex => FieldMut::List(&mut self.content_regex),
        }
    }

    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        Tag::ALL.into_iter().all(|tag| self.field(tag).is_empty())
    }

    /// Whether any `F:`, `X:` or `N:` pattern is present
    pub fn has_file_patterns(&self) -> bool {
        !(self.files.is_empty() && self.excluded.is_empty() && self.file_regex.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_fields_append_in_order() {
        let mut record = Maintainer::new();
        record.apply(Tag::File, "drivers/net/");
        record.apply(Tag::File, "include/net/");
        record.apply(Tag::Mail, "A <a@example.com>");

        assert_eq!(record.files, vec!["drivers/net/", "include/net/"]);
        assert_eq!(record.mails, vec!["A <a@example.com>"]);
    }

    #[test]
    fn test_single_fields_last_value_wins() {
        let mut record = Maintainer::new();
        record.apply(Tag::Status, "Maintained");
        record.apply(Tag::Status, "Orphan");
        assert_eq!(record.status.as_deref(), Some("Orphan"));
    }

    #[test]
    fn test_every_tag_reaches_its_field() {
        for tag in Tag::ALL {
            let mut record = Maintainer::new();
            record.apply(tag, "value");
            assert_eq!(record.field(tag).values(), vec!["value"], "tag {}", tag);
            for other in Tag::ALL.into_iter().filter(|t| *t != tag) {
                assert!(record.field(other).is_empty(), "{} leaked into {}", tag, other);
            }
        }
    }

    #[test]
    fn test_is_empty() {
        let mut record = Maintainer::new();
        assert!(record.is_empty());
        record.apply(Tag::Chat, "irc://irc.oftc.net/linux");
        assert!(!record.is_empty());
    }

    #[test]
    fn test_joined() {
        let mut record = Maintainer::new();
        record.apply(Tag::List, "netdev@vger.kernel.org");
        record.apply(Tag::List, "linux-kernel@vger.kernel.org");
        assert_eq!(
            record.field(Tag::List).joined(),
            "netdev@vger.kernel.org; linux-kernel@vger.kernel.org"
        );
        assert_eq!(record.field(Tag::Status).joined(), "");
    }

    #[test]
    fn test_json_field_names() {
        let mut record = Maintainer::new();
        record.apply(Tag::Bugs, "https://bugzilla.kernel.org");
        record.apply(Tag::Chat, "irc://irc.libera.chat/net");
        record.apply(Tag::Tree, "git git://example.org/net.git");

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["bugsURLs", "chatURL", "scmTree"]);

        for tag in [Tag::Bugs, Tag::Chat, Tag::Tree] {
            assert!(object.contains_key(tag.field_name()));
        }
    }

    #[test]
    fn test_absent_fields_deserialize_empty() {
        let record: Maintainer = serde_json::from_str(r#"{"status": "Supported"}"#).unwrap();
        assert!(record.mails.is_empty());
        assert_eq!(record.status.as_deref(), Some("Supported"));
    }
}
