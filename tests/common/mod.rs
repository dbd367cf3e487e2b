#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("xmls")
        .join(name)
}

/// Read an XML fixture as text
pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Build one entry element with the given child elements
pub fn entry(id: &str, status: &str, children: &[(&str, &str)]) -> String {
    let body: String = children
        .iter()
        .map(|(tag, text)| format!("<{tag}>{text}</{tag}>"))
        .collect();

    format!(r#"<TimeOffRequest ID="{id}" Status="{status}">{body}</TimeOffRequest>"#)
}

/// Wrap entries in the export root element
pub fn export(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><DataService>{}</DataService>"#,
        entries.concat()
    )
}

/// An entry with just the mandatory SubmittedDate plus `children`
pub fn minimal_entry(id: &str, children: &[(&str, &str)]) -> String {
    let mut all = vec![("SubmittedDate", "2019-01-28")];
    all.extend_from_slice(children);
    entry(id, "Pending", &all)
}
