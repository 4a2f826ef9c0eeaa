//! Cross-repository impact correlation
//!
//! The correlator walks the declared relations in order, looks up the impacts
//! of the two repositories each relation names, and hands them to the matcher
//! registered for the relation's kind. Raw records from every relation are
//! merged by [`dedupe`] before being returned.

use crate::impact::RepoImpacts;
use crate::matchers::MatcherRegistry;
use crate::merge::dedupe;
use crate::pattern::GlobSyntax;
use crate::relation::{CrossRepoImpact, RelationConfig};
use tracing::{debug, warn};

/// Correlates per-repo impacts across declared relations
pub struct CrossRepoCorrelator {
    registry: MatcherRegistry,
    glob_syntax: GlobSyntax,
}

impl CrossRepoCorrelator {
    /// Correlator with all built-in matchers and lax glob patterns
    pub fn new() -> Self {
        Self::with_registry(MatcherRegistry::new())
    }

    pub fn with_registry(registry: MatcherRegistry) -> Self {
        Self {
            registry,
            glob_syntax: GlobSyntax::default(),
        }
    }

    /// Select how relation `patterns` are translated
    pub fn glob_syntax(mut self, syntax: GlobSyntax) -> Self {
        self.glob_syntax = syntax;
        self
    }

    /// Correlate impacts across every relation and return merged records.
    ///
    /// Relations naming a repository absent from `repo_impacts`, or whose kind
    /// has no registered matcher, contribute nothing.
    pub fn analyze(
        &self,
        relations: &[RelationConfig],
        repo_impacts: &[RepoImpacts],
    ) -> Vec<CrossRepoImpact> {
        let mut raw = Vec::new();

        for relation in relations {
            let (source, target) = match (
                find_repo(repo_impacts, &relation.from),
                find_repo(repo_impacts, &relation.to),
            ) {
                (Some(s), Some(t)) => (s, t),
                _ => {
                    debug!(
                        from = %relation.from,
                        to = %relation.to,
                        "relation skipped: repository has no impact list"
                    );
                    continue;
                }
            };

            let matcher = match self.registry.get(&relation.via) {
                Some(m) => m,
                None => {
                    warn!(
                        via = %relation.via,
                        "no matcher for relation kind, skipping {} -> {}",
                        relation.from,
                        relation.to
                    );
                    continue;
                }
            };

            let records = matcher.match_with_syntax(source, target, relation, self.glob_syntax);
            debug!(
                from = %relation.from,
                to = %relation.to,
                via = %relation.via,
                records = records.len(),
                "relation matched"
            );
            raw.extend(records);
        }

        dedupe(&raw)
    }
}

impl Default for CrossRepoCorrelator {
    fn default() -> Self {
        Self::new()
    }
}

fn find_repo<'a>(repo_impacts: &'a [RepoImpacts], name: &str) -> Option<&'a RepoImpacts> {
    repo_impacts.iter().find(|r| r.repo == name)
}
