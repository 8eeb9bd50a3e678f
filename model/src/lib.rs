//! Maintainers data model
//!
//! Typed records for the entries of a kernel-style `MAINTAINERS` file.
//!
//! - [`tag`]: the single-letter field tags (`M:`, `R:`, `F:`, ...)
//! - [`maintainer`]: one record per maintained module
//! - [`modules`]: the ordered module name -> record collection
//!
//! ```rust
//! use maintainers_model::{Maintainer, Modules, Tag};
//!
//! let mut record = Maintainer::new();
//! record.apply(Tag::Mail, "Jane Doe <jane@example.com>");
//! record.apply(Tag::Status, "Maintained");
//!
//! let mut modules = Modules::new();
//! modules.insert("FOO DRIVER", record);
//! assert_eq!(modules.len(), 1);
//! ```

pub mod maintainer;
pub mod modules;
pub mod tag;

pub use maintainer::{FieldRef, Maintainer};
pub use modules::{DuplicatePolicy, Modules};
pub use tag::{Tag, UnknownTag};
