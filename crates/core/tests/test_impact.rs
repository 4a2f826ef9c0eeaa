//! Tests for impact items and within-repo merging

use ripple_core::{merge_impacts, ImpactItem, Reason, ReasonType, RepoImpacts};

fn reason(kind: ReasonType, source: &str, description: &str) -> Reason {
    Reason::new(kind, source, description)
}

#[test]
fn test_add_reason_dedupes_by_type_and_source() {
    let mut item = ImpactItem::new("UserList", "web", "src/UserList.tsx");
    item.add_reason(reason(ReasonType::Direct, "src/UserList.tsx", "edited"));
    item.add_reason(reason(ReasonType::Direct, "src/UserList.tsx", "edited again"));
    item.add_reason(reason(ReasonType::Style, "src/UserList.tsx", "css"));
    item.add_reason(reason(ReasonType::Direct, "src/api.ts", "dependency edited"));

    assert_eq!(item.reasons.len(), 3);
    assert_eq!(item.reasons[0].description, "edited");
}

#[test]
fn test_merge_impacts_unions_reasons() {
    let items = vec![
        ImpactItem::new("User", "api", "src/user.ts")
            .with_reason(reason(ReasonType::Direct, "src/user.ts", "edited")),
        ImpactItem::new("Order", "api", "src/order.ts")
            .with_reason(reason(ReasonType::Direct, "src/order.ts", "edited")),
        ImpactItem::new("User", "api", "src/user.ts")
            .with_line(12)
            .with_reason(reason(ReasonType::Schema, "schema.graphql", "type changed"))
            .with_reason(reason(ReasonType::Direct, "src/user.ts", "edited")),
    ];

    let merged = merge_impacts(items);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].component, "User");
    assert_eq!(merged[0].line, Some(12));
    assert_eq!(merged[0].reasons.len(), 2);
    assert!(merged[0].has_reason(ReasonType::Schema));
    assert_eq!(merged[1].component, "Order");
}

#[test]
fn test_same_component_different_file_is_distinct() {
    let items = vec![
        ImpactItem::new("index", "web", "src/a/index.ts"),
        ImpactItem::new("index", "web", "src/b/index.ts"),
    ];
    assert_eq!(merge_impacts(items).len(), 2);
}

#[test]
fn test_merge_dedupes_reasons_within_one_item() {
    let mut item = ImpactItem::new("User", "api", "src/user.ts");
    item.reasons = vec![
        reason(ReasonType::Direct, "src/user.ts", "one"),
        reason(ReasonType::Direct, "src/user.ts", "two"),
    ];
    let merged = merge_impacts(vec![item]);
    assert_eq!(merged[0].reasons.len(), 1);
}

#[test]
fn test_is_breaking() {
    let schema = ImpactItem::new("User", "api", "schema.graphql")
        .with_reason(reason(ReasonType::Schema, "schema.graphql", "field added"));
    let described = ImpactItem::new("Handler", "api", "handler.go").with_reason(reason(
        ReasonType::Direct,
        "handler.go",
        "file handler.go removed (Breaking)",
    ));
    let plain = ImpactItem::new("Button", "web", "Button.tsx")
        .with_reason(reason(ReasonType::Direct, "Button.tsx", "edited"));

    assert!(schema.is_breaking());
    assert!(described.is_breaking());
    assert!(!plain.is_breaking());
}

#[test]
fn test_json_field_names() {
    let mut item = ImpactItem::new("UserList", "web", "src/UserList.tsx")
        .with_line(3)
        .with_reason(reason(ReasonType::Template, "src/UserList.html", "markup"));
    item.test_hints = Some(vec!["render the empty state".to_string()]);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["testHints"][0], "render the empty state");
    assert_eq!(json["reasons"][0]["type"], "template");
    assert_eq!(json["line"], 3);
}

#[test]
fn test_parse_external_analyzer_output() {
    let json = r#"[
        {"component": "getUsers", "file": "schema.graphql",
         "reasons": [{"type": "schema", "source": "schema.graphql", "description": "query changed"}]},
        {"component": "main", "repo": "lambda", "file": "cmd/main.go", "line": 7}
    ]"#;
    let items: Vec<ImpactItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].repo, "");
    assert_eq!(items[0].reasons[0].kind, ReasonType::Schema);
    assert!(items[1].reasons.is_empty());
    assert!(items[1].test_hints.is_none());
}

#[test]
fn test_repo_impacts_is_empty() {
    assert!(RepoImpacts::new("web", vec![]).is_empty());
    assert!(!RepoImpacts::new("web", vec![ImpactItem::new("A", "web", "a.ts")]).is_empty());
}
