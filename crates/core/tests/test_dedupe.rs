//! Tests for the cross-repo merge pass

use ripple_core::{dedupe, CrossRepoImpact, RelationKind};
use std::collections::BTreeSet;

fn record(source: &str, target_repo: &str, relation: RelationKind, targets: &[&str]) -> CrossRepoImpact {
    CrossRepoImpact {
        source_repo: "api".to_string(),
        source_component: source.to_string(),
        target_repo: target_repo.to_string(),
        target_components: targets.iter().map(|s| s.to_string()).collect(),
        relation,
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_merge_is_set_union() {
    let raw = vec![
        record("Q", "web", RelationKind::GraphqlSchema, &["A", "B"]),
        record("Q", "web", RelationKind::GraphqlSchema, &["B", "C"]),
    ];
    let merged = dedupe(&raw);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].target_components, set(&["A", "B", "C"]));
}

#[test]
fn test_key_includes_every_field() {
    let raw = vec![
        record("Q", "web", RelationKind::GraphqlSchema, &["A"]),
        record("Q", "web", RelationKind::ApiCall, &["A"]),
        record("Q", "mobile", RelationKind::GraphqlSchema, &["A"]),
        record("R", "web", RelationKind::GraphqlSchema, &["A"]),
    ];
    assert_eq!(dedupe(&raw).len(), 4);
}

#[test]
fn test_first_seen_order() {
    let raw = vec![
        record("B", "web", RelationKind::Sqs, &["x"]),
        record("A", "web", RelationKind::Sqs, &["y"]),
        record("B", "web", RelationKind::Sqs, &["z"]),
    ];
    let merged = dedupe(&raw);
    let sources: Vec<&str> = merged.iter().map(|r| r.source_component.as_str()).collect();
    assert_eq!(sources, vec!["B", "A"]);
    assert_eq!(merged[0].target_components, set(&["x", "z"]));
}

#[test]
fn test_idempotent() {
    let raw = vec![
        record("Q", "web", RelationKind::GraphqlSchema, &["A", "B"]),
        record("P", "web", RelationKind::GraphqlSchema, &["A"]),
        record("Q", "web", RelationKind::GraphqlSchema, &["C"]),
    ];
    let once = dedupe(&raw);
    let twice = dedupe(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_input_is_not_modified() {
    let raw = vec![
        record("Q", "web", RelationKind::GraphqlSchema, &["A"]),
        record("Q", "web", RelationKind::GraphqlSchema, &["B"]),
    ];
    let _ = dedupe(&raw);
    assert_eq!(raw[0].target_components, set(&["A"]));
}

#[test]
fn test_empty_input() {
    assert!(dedupe(&[]).is_empty());
}
