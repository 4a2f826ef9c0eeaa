//! Loading impact lists written by external analyzers
//!
//! External analyzers (AST walkers for a specific framework) write a JSON
//! array of impact items per repository. The loader fills in a missing
//! `repo` field and merges duplicate `(component, file)` entries.

use crate::impact::{merge_impacts, ImpactItem, RepoImpacts};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Read a JSON array of impact items for `repo`
pub fn load_impacts_file(path: &Path, repo: &str) -> Result<Vec<ImpactItem>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read impacts file {}", path.display()))?;
    let mut items: Vec<ImpactItem> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse impacts file {}", path.display()))?;

    for item in &mut items {
        if item.repo.is_empty() {
            item.repo = repo.to_string();
        }
    }

    Ok(merge_impacts(items))
}

/// Load `<dir>/<repo>.json`; a missing file means the repository has no impacts
pub fn load_impacts_dir(dir: &Path, repo: &str) -> Result<RepoImpacts> {
    let path = dir.join(format!("{}.json", repo));
    if !path.exists() {
        debug!(repo, path = %path.display(), "no impacts file");
        return Ok(RepoImpacts::new(repo, Vec::new()));
    }
    Ok(RepoImpacts::new(repo, load_impacts_file(&path, repo)?))
}
