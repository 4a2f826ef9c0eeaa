//! Aggregate analysis result handed to output formatters

use crate::impact::RepoImpacts;
use crate::relation::CrossRepoImpact;
use serde::{Deserialize, Serialize};

/// Per-repo impacts plus the correlated cross-repo records of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub repos: Vec<RepoImpacts>,
    pub cross_repo: Vec<CrossRepoImpact>,
    pub summary: AnalysisSummary,
}

/// Summary statistics for an analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_impacts: usize,
    pub repos_with_impacts: usize,
    pub cross_repo_impacts: usize,
    pub has_breaking_changes: bool,
}

impl AnalysisResult {
    pub fn build(repos: Vec<RepoImpacts>, cross_repo: Vec<CrossRepoImpact>) -> Self {
        let summary = AnalysisSummary {
            total_impacts: repos.iter().map(|r| r.impacts.len()).sum(),
            repos_with_impacts: repos.iter().filter(|r| !r.is_empty()).count(),
            cross_repo_impacts: cross_repo.len(),
            has_breaking_changes: repos
                .iter()
                .flat_map(|r| r.impacts.iter())
                .any(|i| i.is_breaking()),
        };

        Self {
            repos,
            cross_repo,
            summary,
        }
    }
}
