use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

use teammaker_integrations::IntegrationError;
use teammaker_integrations::purely_hr::{XmlInput, load_export, load_export_file, parse};

mod common;

#[test]
fn test_load_export_file_reads_raw_bytes() {
    let input = load_export_file(common::fixture_path("timeoffs.xml"), 1024 * 1024).unwrap();

    assert!(matches!(input, XmlInput::RawBytes(_)));
    assert_eq!(parse(input).unwrap().len(), 2);
}

#[test]
fn test_load_export_file_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(common::export(&[common::minimal_entry("9", &[])]).as_bytes())
        .unwrap();

    let input = load_export_file(file.path(), 1024).unwrap();
    let requests = parse(input).unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, "9");
}

#[test]
fn test_load_export_file_missing() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_export_file(dir.path().join("missing.xml"), 1024).unwrap_err();

    assert!(matches!(err, IntegrationError::Io(_)), "got {:?}", err);
}

#[test]
fn test_load_export_at_limit() {
    let input = load_export(Cursor::new(vec![b'x'; 16]), 16).unwrap();

    assert_eq!(input.len(), 16);
}

#[test]
fn test_load_export_over_limit() {
    let err = load_export(Cursor::new(vec![b'x'; 17]), 16).unwrap_err();

    assert!(
        matches!(err, IntegrationError::InputTooLarge { limit: 16 }),
        "got {:?}",
        err
    );
    assert!(!err.is_invalid_xml());
}
