//! Integration tests for the full search pipeline.

use keytrail::document::parser::parse_json;
use keytrail::render::{write_report, RenderOptions};
use keytrail::search::{
    collapse_families, count_paths, find_paths, partition_paths, SearchSpec,
};

fn run_search(json: &str, raw_spec: &str) -> keytrail::search::Partition {
    let doc = parse_json(json).unwrap();
    let spec = SearchSpec::parse(raw_spec).unwrap();
    partition_paths(count_paths(find_paths(&doc, &spec)))
}

#[test]
fn test_repeated_array_fields_become_common() {
    let json = r#"{
        "users": [
            {"name": "Alice", "email": "a@example.com"},
            {"name": "Bob", "email": "b@example.com"},
            {"name": "Carol"}
        ],
        "name": "directory"
    }"#;

    let partition = run_search(json, "name");

    assert_eq!(partition.common.len(), 1);
    let (path, count) = &partition.common[0];
    assert_eq!(path.to_string(), "users.*.name");
    assert_eq!(*count, 3);

    assert_eq!(partition.unique.len(), 1);
    assert_eq!(partition.unique[0].0.to_string(), "name");

    assert_eq!(partition.total_matches(), 4);
}

#[test]
fn test_every_occurrence_is_discovered_once() {
    let json = r#"{
        "id": 1,
        "nested": {"id": 2, "deeper": {"id": 3}},
        "list": [{"id": 4}]
    }"#;

    let partition = run_search(json, "id");

    // Four distinct structural locations, each discovered exactly once.
    assert_eq!(partition.common.len(), 0);
    let unique: Vec<String> = partition
        .unique
        .iter()
        .map(|(p, _)| p.to_string())
        .collect();
    assert_eq!(
        unique,
        vec!["id", "nested.id", "nested.deeper.id", "list.*.id"]
    );
}

#[test]
fn test_regex_spec_end_to_end() {
    let json = r#"{
        "address1": "12 Elm St",
        "address2": "Apt 4",
        "name": "Alice"
    }"#;

    let partition = run_search(json, "/^addr.*/");

    let found: Vec<String> = partition
        .unique
        .iter()
        .map(|(p, _)| p.to_string())
        .collect();
    assert_eq!(found, vec!["address1", "address2"]);
    assert!(partition.common.is_empty());
}

#[test]
fn test_common_family_collapses_through_pipeline() {
    // Two recurring families under the same parent: one numeric, one not.
    let json = r#"{
        "records": [
            {"field_1_value": 1, "field_2_value": 2, "title": "a"},
            {"field_1_value": 3, "field_2_value": 4, "title": "b"}
        ]
    }"#;

    let mut partition = run_search(json, "/^field_.*/");
    assert_eq!(partition.common.len(), 2);

    partition.common = collapse_families(partition.common);
    assert_eq!(partition.common.len(), 1);
    let (path, count) = &partition.common[0];
    assert_eq!(path.to_string(), "records.*.field_{1-2}_value");
    assert_eq!(*count, 4);
}

#[test]
fn test_malformed_spec_reported_before_traversal() {
    let err = SearchSpec::parse("/[bad/").unwrap_err();
    assert!(err.to_string().contains("Invalid search pattern"));
}

#[test]
fn test_rendered_report_shape() {
    let json = r#"{
        "items": [{"sku": "a"}, {"sku": "b"}],
        "sku": "root"
    }"#;

    let partition = run_search(json, "sku");

    let mut buf = Vec::new();
    write_report(&mut buf, "sku", &partition, &RenderOptions::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(
        text,
        "\nResults for key: sku\n-------------------------------\n\
         Common paths:\n\t\titems.*.sku\n\n\
         Unique or specific paths (with their indices):\nsku\n"
    );
}

#[test]
fn test_document_roots_other_than_objects() {
    // Top-level array: records sit behind a leading wildcard.
    let partition = run_search(r#"[{"k": 1}, {"k": 2}]"#, "k");
    assert_eq!(partition.common.len(), 1);
    assert_eq!(partition.common[0].0.to_string(), "*.k");
    assert_eq!(partition.common[0].1, 2);

    // Scalar root: nothing to find.
    let partition = run_search("42", "k");
    assert!(partition.is_empty());
}
