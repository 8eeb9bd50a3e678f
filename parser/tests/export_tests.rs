//! Tests for the JSON, CSV and mail index renderers

use maintainers_parser::export::{self, MailIndexFormat};
use maintainers_parser::model::Modules;
use maintainers_parser::MaintainersLoader;
use std::collections::HashSet;
use std::path::PathBuf;

fn load_fixture() -> Modules {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/MAINTAINERS");
    MaintainersLoader::new(path).load().unwrap()
}

mod json {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let modules = load_fixture();
        let json = export::to_json(&modules).unwrap();
        let back = export::from_json(&json).unwrap();

        assert_eq!(back, modules);
        assert_eq!(
            back.names().collect::<Vec<_>>(),
            modules.names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_field_names() {
        let json = export::to_json(&load_fixture()).unwrap();
        for key in [
            "\"mails\"",
            "\"reviewers\"",
            "\"relevantMails\"",
            "\"status\"",
            "\"webs\"",
            "\"patchWork\"",
            "\"bugsURLs\"",
            "\"chatURL\"",
            "\"profile\"",
            "\"scmTree\"",
            "\"files\"",
            "\"excluded\"",
            "\"fileRegex\"",
            "\"contentRegex\"",
        ] {
            assert!(json.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(export::from_json("{\"FOO\": {\"mails\": 3}}").is_err());
    }
}

mod mail_index {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grouped_has_one_line_per_mail() {
        let modules = load_fixture();
        let distinct: HashSet<&str> = modules
            .iter()
            .flat_map(|(_, record)| record.mails.iter().map(String::as_str))
            .collect();

        let grouped = export::mail_index(&modules, MailIndexFormat::Grouped);
        let entries: Vec<&str> = grouped
            .split("\"\n")
            .filter(|entry| !entry.is_empty())
            .collect();
        assert_eq!(entries.len(), distinct.len());

        for entry in entries {
            let (mail, names) = entry.split_once("\t\"").unwrap();
            let citing = modules
                .iter()
                .filter(|(_, record)| record.mails.iter().any(|m| m == mail))
                .count();
            assert_eq!(names.split('\n').count(), citing, "{}", mail);
        }
    }

    #[test]
    fn test_flat_pairs() {
        let modules = load_fixture();
        let flat = export::mail_index(&modules, MailIndexFormat::Flat);
        let total: usize = modules.iter().map(|(_, record)| record.mails.len()).sum();

        assert_eq!(flat.lines().count(), total);
        assert!(flat.contains("THE REST\tLinus Torvalds <torvalds@linux-foundation.org>\n"));
    }

    #[test]
    fn test_sections_layout() {
        let sections = export::mail_index(&load_fixture(), MailIndexFormat::Sections);
        assert!(sections.starts_with(
            "3C59X NETWORK DRIVER\n\tSteffen Klassert <klassert@kernel.org>\n\n"
        ));
    }

    #[test]
    fn test_default_format_is_grouped() {
        assert_eq!(MailIndexFormat::default(), MailIndexFormat::Grouped);
        assert_eq!(MailIndexFormat::Sections.to_string(), "sections");
    }
}

mod csv {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_row_per_module() {
        let modules = load_fixture();
        let csv = export::to_csv(&modules);
        assert_eq!(csv.lines().count(), modules.len() + 1);
        assert!(csv.contains("\nTHE REST,Linus Torvalds <torvalds@linux-foundation.org>,,"));
    }
}
