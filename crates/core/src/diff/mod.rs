//! Git diff plumbing: which files changed between two refs

use anyhow::{Context, Result};
use git2::{Delta, Diff, DiffFindOptions, DiffOptions, Repository};
use std::path::{Path, PathBuf};

/// Lists changed files in a repository
pub struct DiffAnalyzer {
    repo: Repository,
}

impl DiffAnalyzer {
    /// Create a new diff analyzer for a repository
    pub fn new(repo_path: &Path) -> Result<Self> {
        let repo = Repository::open(repo_path)
            .with_context(|| format!("Failed to open git repository at {}", repo_path.display()))?;

        Ok(Self { repo })
    }

    /// Get the diff between `base` and `head`, or between `base` and the
    /// working tree (including untracked files) when `head` is `None`
    pub fn get_diff(&self, base: &str, head: Option<&str>) -> Result<Diff<'_>> {
        let base_tree = self.resolve_tree(base)?;

        let mut opts = DiffOptions::new();
        opts.ignore_whitespace(false);

        let mut diff = match head {
            Some(h) => {
                let head_tree = self.resolve_tree(h)?;
                self.repo
                    .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), Some(&mut opts))?
            }
            None => {
                opts.include_untracked(true).recurse_untracked_dirs(true);
                self.repo
                    .diff_tree_to_workdir_with_index(Some(&base_tree), Some(&mut opts))?
            }
        };

        let mut find = DiffFindOptions::new();
        find.renames(true);
        diff.find_similar(Some(&mut find))?;

        Ok(diff)
    }

    /// Get changed files from a diff
    pub fn get_changed_files(&self, diff: &Diff) -> Result<Vec<ChangedFile>> {
        let mut changed_files = Vec::new();

        for delta in diff.deltas() {
            let change_type = match delta.status() {
                Delta::Added | Delta::Untracked | Delta::Copied => ChangeType::Added,
                Delta::Deleted => ChangeType::Deleted,
                Delta::Renamed => ChangeType::Renamed,
                _ => ChangeType::Modified,
            };

            let path = match delta.new_file().path().or_else(|| delta.old_file().path()) {
                Some(p) => p.to_path_buf(),
                None => continue,
            };

            let old_path = if change_type == ChangeType::Renamed {
                delta.old_file().path().map(Path::to_path_buf)
            } else {
                None
            };

            changed_files.push(ChangedFile {
                path,
                change_type,
                old_path,
            });
        }

        Ok(changed_files)
    }

    /// Shorthand for [`get_diff`](Self::get_diff) + [`get_changed_files`](Self::get_changed_files)
    pub fn changed_files(&self, base: &str, head: Option<&str>) -> Result<Vec<ChangedFile>> {
        let diff = self
            .get_diff(base, head)
            .with_context(|| format!("Failed to diff against '{}'", base))?;
        self.get_changed_files(&diff)
    }

    fn resolve_tree(&self, rev: &str) -> Result<git2::Tree<'_>> {
        let obj = self
            .repo
            .revparse_single(rev)
            .with_context(|| format!("Unknown ref '{}'", rev))?;
        let commit = obj.peel_to_commit()?;
        Ok(commit.tree()?)
    }
}

/// A file that has been changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path relative to the repository root
    pub path: PathBuf,
    pub change_type: ChangeType,
    /// Previous path, for renames
    pub old_path: Option<PathBuf>,
}

impl ChangedFile {
    pub fn new(path: impl Into<PathBuf>, change_type: ChangeType) -> Self {
        Self {
            path: path.into(),
            change_type,
            old_path: None,
        }
    }
}

/// Type of change to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Renamed,
}
