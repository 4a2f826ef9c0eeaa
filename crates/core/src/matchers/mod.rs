//! Per-relation matchers
//!
//! Each relation kind has one matcher with two predicates: a *trigger* check
//! applied to the source repository's impacts, and a *consumer* check applied
//! to the target repository's impacts. A correlation is only emitted when both
//! sides have at least one hit.

pub mod api_call;
pub mod graphql;
pub mod npm_package;
pub mod shared_types;
pub mod sqs;

use crate::impact::{ImpactItem, RepoImpacts};
use crate::pattern::{compile_patterns, GlobPattern, GlobSyntax};
use crate::relation::{CrossRepoImpact, RelationConfig, RelationKind};
use std::collections::{BTreeSet, HashMap};

pub use api_call::ApiCallMatcher;
pub use graphql::GraphqlSchemaMatcher;
pub use npm_package::NpmPackageMatcher;
pub use shared_types::SharedTypesMatcher;
pub use sqs::SqsMatcher;

/// Trait for relation-kind heuristics
pub trait RelationMatcher: Send + Sync {
    /// Relation kind this matcher handles
    fn kind(&self) -> RelationKind;

    /// Whether a source-repo impact shows the relation's mechanism was touched
    fn is_trigger(&self, impact: &ImpactItem) -> bool;

    /// Whether a target-repo impact depends on the relation's mechanism
    fn is_consumer(&self, impact: &ImpactItem) -> bool;

    /// Correlate two repositories using lax glob patterns.
    fn match_impacts(
        &self,
        source: &RepoImpacts,
        target: &RepoImpacts,
        relation: &RelationConfig,
    ) -> Vec<CrossRepoImpact> {
        self.match_with_syntax(source, target, relation, GlobSyntax::Lax)
    }

    /// Correlate two repositories.
    ///
    /// Emits one raw record per triggering source impact, each carrying the
    /// full consumer set. Records are not merged here.
    fn match_with_syntax(
        &self,
        source: &RepoImpacts,
        target: &RepoImpacts,
        relation: &RelationConfig,
        syntax: GlobSyntax,
    ) -> Vec<CrossRepoImpact> {
        let triggers: Vec<&ImpactItem> = source
            .impacts
            .iter()
            .filter(|i| self.is_trigger(i))
            .collect();
        if triggers.is_empty() {
            return Vec::new();
        }

        let patterns = compile_patterns(&relation.patterns, syntax);
        let consumers = consumer_components(self, &target.impacts, &patterns);
        if consumers.is_empty() {
            return Vec::new();
        }

        triggers
            .into_iter()
            .map(|impact| CrossRepoImpact {
                source_repo: source.repo.clone(),
                source_component: impact.component.clone(),
                target_repo: target.repo.clone(),
                target_components: consumers.clone(),
                relation: relation.via.clone(),
            })
            .collect()
    }
}

/// Components in `impacts` that pass the consumer predicate or match a pattern
fn consumer_components<M: RelationMatcher + ?Sized>(
    matcher: &M,
    impacts: &[ImpactItem],
    patterns: &[GlobPattern],
) -> BTreeSet<String> {
    impacts
        .iter()
        .filter(|i| matcher.is_consumer(i) || patterns.iter().any(|p| p.matches(&i.file)))
        .map(|i| i.component.clone())
        .collect()
}

/// Maps each relation kind to the matcher that handles it
pub struct MatcherRegistry {
    matchers: HashMap<RelationKind, Box<dyn RelationMatcher>>,
}

impl MatcherRegistry {
    /// Registry with the five built-in matchers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(GraphqlSchemaMatcher));
        registry.register(Box::new(SqsMatcher));
        registry.register(Box::new(SharedTypesMatcher));
        registry.register(Box::new(ApiCallMatcher));
        registry.register(Box::new(NpmPackageMatcher));
        registry
    }

    pub fn empty() -> Self {
        Self {
            matchers: HashMap::new(),
        }
    }

    /// Add a matcher, replacing any existing one for the same kind
    pub fn register(&mut self, matcher: Box<dyn RelationMatcher>) {
        self.matchers.insert(matcher.kind(), matcher);
    }

    pub fn get(&self, kind: &RelationKind) -> Option<&dyn RelationMatcher> {
        self.matchers.get(kind).map(|m| &**m)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub(crate) fn is_graphql_file(file: &str) -> bool {
    file.ends_with(".graphql") || file.ends_with(".gql")
}
