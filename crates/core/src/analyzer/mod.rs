//! Local (per-repository) analyzers
//!
//! A local analyzer turns the changed files of one repository into
//! [`ImpactItem`]s. Analyzers are independent of each other and of the
//! cross-repo correlator; the dispatcher runs all of them for a repository and
//! merges the output so each `(component, file)` appears once.

pub mod loader;
pub mod path;

use crate::config::{RepoConfig, RippleConfig};
use crate::diff::{ChangedFile, DiffAnalyzer};
use crate::impact::{merge_impacts, ImpactItem, RepoImpacts};
use anyhow::Result;
use rayon::prelude::*;
use tracing::debug;

pub use loader::{load_impacts_dir, load_impacts_file};
pub use path::PathAnalyzer;

/// Trait for per-repository analyzers
pub trait LocalAnalyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Whether this analyzer applies to the given repository, usually decided
    /// by `repo.repo_type`
    fn supports(&self, _repo: &RepoConfig) -> bool {
        true
    }

    /// Produce impacts for the changed files of one repository.
    ///
    /// Any lookup tables an implementation builds must live only for the
    /// duration of this call.
    fn analyze(&self, repo: &RepoConfig, changes: &[ChangedFile]) -> Vec<ImpactItem>;
}

/// Dispatches analysis across all registered local analyzers
pub struct AnalyzerDispatcher {
    analyzers: Vec<Box<dyn LocalAnalyzer>>,
}

impl AnalyzerDispatcher {
    /// Create a new dispatcher with all built-in analyzers
    pub fn new() -> Self {
        Self {
            analyzers: vec![Box::new(PathAnalyzer::new())],
        }
    }

    pub fn register(&mut self, analyzer: Box<dyn LocalAnalyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Run every supporting analyzer on one repository and merge the results
    pub fn analyze_repo(&self, repo: &RepoConfig, changes: &[ChangedFile]) -> RepoImpacts {
        let mut items = Vec::new();
        for analyzer in &self.analyzers {
            if !analyzer.supports(repo) {
                continue;
            }
            let found = analyzer.analyze(repo, changes);
            debug!(
                repo = %repo.name,
                analyzer = analyzer.name(),
                impacts = found.len(),
                "local analysis"
            );
            items.extend(found);
        }
        RepoImpacts::new(repo.name.clone(), merge_impacts(items))
    }

    /// Diff and analyze every configured repository in parallel.
    ///
    /// Results are returned in `config.repos` order; a repository that cannot
    /// be diffed yields an `Err` without affecting the others.
    pub fn scan_repos(
        &self,
        config: &RippleConfig,
        base: &str,
        head: Option<&str>,
    ) -> Vec<Result<RepoImpacts>> {
        config
            .repos
            .par_iter()
            .map(|repo| -> Result<RepoImpacts> {
                let diff = DiffAnalyzer::new(&config.repo_path(repo))?;
                let changes = diff.changed_files(base, head)?;
                Ok(self.analyze_repo(repo, &changes))
            })
            .collect()
    }
}

impl Default for AnalyzerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
