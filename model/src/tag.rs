//! Field tags
//!
//! Every field line in a MAINTAINERS section starts with one upper-case
//! letter followed by a colon. The letter selects the record field.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a letter does not name a known tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown maintainers tag: {0:?}")]
pub struct UnknownTag(pub String);

/// A MAINTAINERS field tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `M:` maintainer mail
    Mail,
    /// `R:` designated reviewer
    Reviewer,
    /// `L:` relevant mailing list
    List,
    /// `S:` status
    Status,
    /// `W:` web page
    Web,
    /// `Q:` patchwork instance
    Patchwork,
    /// `B:` bug reporting URI
    Bugs,
    /// `C:` chat URI
    Chat,
    /// `P:` subsystem profile
    Profile,
    /// `T:` SCM tree
    Tree,
    /// `F:` file pattern
    File,
    /// `X:` excluded file pattern
    Excluded,
    /// `N:` file regex
    FileRegex,
    /// `K:` content regex
    ContentRegex,
}

impl Tag {
    /// All tags, in record field order
    pub const ALL: [Tag; 14] = [
        Tag::Mail,
        Tag::Reviewer,
        Tag::List,
        Tag::Status,
        Tag::Web,
        Tag::Patchwork,
        Tag::Bugs,
        Tag::Chat,
        Tag::Profile,
        Tag::Tree,
        Tag::File,
        Tag::Excluded,
        Tag::FileRegex,
        Tag::ContentRegex,
    ];

    /// The tag letter as it appears in the file
    pub fn letter(self) -> char {
        match self {
            Tag::Mail => 'M',
            Tag::Reviewer => 'R',
            Tag::List => 'L',
            Tag::Status => 'S',
            Tag::Web => 'W',
            Tag::Patchwork => 'Q',
            Tag::Bugs => 'B',
            Tag::Chat => 'C',
            Tag::Profile => 'P',
            Tag::Tree => 'T',
            Tag::File => 'F',
            Tag::Excluded => 'X',
            Tag::FileRegex => 'N',
            Tag::ContentRegex => 'K',
        }
    }

    /// Look up a tag by its letter. Lower-case letters are not tags.
    pub fn from_letter(letter: char) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.letter() == letter)
    }

    /// Whether repeated lines accumulate (`true`) or overwrite (`false`)
    pub fn is_list(self) -> bool {
        !matches!(
            self,
            Tag::Status | Tag::Patchwork | Tag::Chat | Tag::Profile
        )
    }

    /// Key used for this field in the JSON export
    pub fn field_name(self) -> &'static str {
        match self {
            Tag::Mail => "mails",
            Tag::Reviewer => "reviewers",
            Tag::List => "relevantMails",
            Tag::Status => "status",
            Tag::Web => "webs",
            Tag::Patchwork => "patchWork",
            Tag::Bugs => "bugsURLs",
            Tag::Chat => "chatURL",
            Tag::Profile => "profile",
            Tag::Tree => "scmTree",
            Tag::File => "files",
            Tag::Excluded => "excluded",
            Tag::FileRegex => "fileRegex",
            Tag::ContentRegex => "contentRegex",
        }
    }

    /// Column title used in the CSV summary
    pub fn column_name(self) -> &'static str {
        match self {
            Tag::Mail => "Mails",
            Tag::Reviewer => "Reviewers",
            Tag::List => "RelevantMails",
            Tag::Status => "Status",
            Tag::Web => "Webs",
            Tag::Patchwork => "PatchWork",
            Tag::Bugs => "BugsURLs",
            Tag::Chat => "ChatURL",
            Tag::Profile => "Profile",
            Tag::Tree => "SCMTree",
            Tag::File => "Files",
            Tag::Excluded => "Excluded",
            Tag::FileRegex => "FileRegex",
            Tag::ContentRegex => "ContentRegex",
        }
    }

    /// Short description from the MAINTAINERS legend
    pub fn description(self) -> &'static str {
        match self {
            Tag::Mail => "Mail patches to: FullName <address@domain>",
            Tag::Reviewer => "Designated reviewer, CC on patches",
            Tag::List => "Mailing list that is relevant to this area",
            Tag::Status => "Status of the area (Supported, Maintained, Odd Fixes, ...)",
            Tag::Web => "Web page with status/info",
            Tag::Patchwork => "Patchwork web based patch tracking system site",
            Tag::Bugs => "URI for where to file bugs",
            Tag::Chat => "URI for chat protocol, server and channel",
            Tag::Profile => "Subsystem profile document",
            Tag::Tree => "SCM tree type and location",
            Tag::File => "Files and directories wildcard patterns",
            Tag::Excluded => "Excluded files and directories, same rules as F:",
            Tag::FileRegex => "Files and directories regex patterns",
            Tag::ContentRegex => "Content regex pattern matched in a patch or file",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.letter())
    }
}

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Accepts either the bare letter (`"M"`) or the prefix form (`"M:"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letter = s.strip_suffix(':').unwrap_or(s);
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Tag::from_letter(c).ok_or_else(|| UnknownTag(s.to_string())),
            _ => Err(UnknownTag(s.to_string())),
        }
    }
}
