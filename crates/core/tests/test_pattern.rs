//! Tests for glob-to-regex translation

use ripple_core::pattern::{compile_patterns, glob_to_regex, matches};
use ripple_core::{GlobPattern, GlobSyntax};

#[test]
fn test_double_star_crosses_separators() {
    assert!(matches("src/queries/getUsers.graphql", "**/*.graphql"));
    assert!(matches("a/b/c/d.graphql", "**/*.graphql"));
}

#[test]
fn test_single_star_stays_in_segment() {
    assert!(!matches("src/queries/getUsers.graphql", "*.graphql"));
    assert!(matches("schema.graphql", "*.graphql"));
    assert!(matches("src/user.ts", "src/*.ts"));
    assert!(!matches("src/models/user.ts", "src/*.ts"));
}

#[test]
fn test_question_mark_is_one_character() {
    assert!(matches("v1.json", "v?.json"));
    assert!(!matches("v10.json", "v?.json"));
    assert!(!matches("v.json", "v?.json"));
}

#[test]
fn test_whole_path_must_match() {
    assert!(!matches("src/schema.graphql.bak", "**/*.graphql"));
    assert!(!matches("prefix/src/user.ts", "src/*.ts"));
}

#[test]
fn test_lax_dot_matches_any_character() {
    // Literals are not escaped in lax mode
    assert!(matches("schemaXgraphql", "schema.graphql"));
    let strict = GlobPattern::with_syntax("schema.graphql", GlobSyntax::Strict).unwrap();
    assert!(!strict.matches("schemaXgraphql"));
    assert!(strict.matches("schema.graphql"));
}

#[test]
fn test_translation() {
    assert_eq!(glob_to_regex("**/*.gql", GlobSyntax::Lax), "^(?:.*/[^/]*.gql)$");
    assert_eq!(glob_to_regex("a?b", GlobSyntax::Lax), "^(?:a.b)$");
    assert_eq!(glob_to_regex("a.b", GlobSyntax::Strict), r"^(?:a\.b)$");
}

#[test]
fn test_lax_alternation_stays_anchored() {
    assert!(!matches("a/b/x.gql", "x|*.gql"));
    assert!(!matches("zzz/src/a.ts", "x|src/*.ts"));
    assert!(!matches("src/a.ts.bak", "src/*.ts|x"));
    assert!(!matches("unrelated/path/x.gql", "**/*.graphql|*.gql"));

    assert!(matches("x.gql", "x|*.gql"));
    assert!(matches("src/a.ts", "x|src/*.ts"));
    assert!(matches("src/queries/q.graphql", "**/*.graphql|*.gql"));
}

#[test]
fn test_lax_group_cannot_be_closed_early() {
    assert!(GlobPattern::new("a)|(b").is_err());
    assert!(!matches("zzz/b", "a)|(.*b"));
}

#[test]
fn test_invalid_lax_pattern_never_matches() {
    assert!(GlobPattern::new("src/(unclosed").is_err());
    assert!(!matches("src/(unclosed", "src/(unclosed"));

    let strict = GlobPattern::with_syntax("src/(unclosed", GlobSyntax::Strict).unwrap();
    assert!(strict.matches("src/(unclosed"));
}

#[test]
fn test_compile_patterns_drops_invalid() {
    let patterns = vec!["**/*.graphql".to_string(), "[".to_string()];
    let compiled = compile_patterns(&patterns, GlobSyntax::Lax);
    assert_eq!(compiled.len(), 1);
    assert_eq!(compiled[0].as_str(), "**/*.graphql");
}
