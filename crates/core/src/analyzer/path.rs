//! Path analyzer: language-agnostic impacts from file names alone
//!
//! Every changed file becomes one impact whose component is the file stem
//! (or the directory name for module entry points like `index.ts`). The reason
//! type is picked from the file name and extension.

use crate::analyzer::LocalAnalyzer;
use crate::config::RepoConfig;
use crate::diff::{ChangeType, ChangedFile};
use crate::impact::{ImpactItem, Reason, ReasonType};
use glob::Pattern;
use std::path::Path;
use tracing::warn;

const DEPENDENCY_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "go.mod",
    "go.sum",
    "Cargo.toml",
    "Cargo.lock",
];

const MODULE_ENTRY_FILES: &[&str] = &["mod.rs", "__init__.py"];

/// Classifies changed files by path
pub struct PathAnalyzer;

impl PathAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalAnalyzer for PathAnalyzer {
    fn name(&self) -> &str {
        "Path"
    }

    fn analyze(&self, repo: &RepoConfig, changes: &[ChangedFile]) -> Vec<ImpactItem> {
        let ignore = compile_ignore(repo);

        changes
            .iter()
            .filter_map(|change| {
                let file = normalize(&change.path);
                if ignore.iter().any(|p| p.matches(&file)) {
                    return None;
                }
                let reason = Reason::new(
                    classify(&change.path),
                    file.clone(),
                    describe(&file, change),
                );
                Some(
                    ImpactItem::new(component_name(&change.path), repo.name.clone(), file)
                        .with_reason(reason),
                )
            })
            .collect()
    }
}

fn compile_ignore(repo: &RepoConfig) -> Vec<Pattern> {
    repo.ignore
        .iter()
        .filter_map(|g| match Pattern::new(g) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(repo = %repo.name, "skipping ignore glob '{}': {}", g, e);
                None
            }
        })
        .collect()
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

fn is_module_entry(name: &str) -> bool {
    MODULE_ENTRY_FILES.contains(&name) || name.starts_with("index.")
}

/// Pick the reason type for a changed path
pub fn classify(path: &Path) -> ReasonType {
    let name = file_name(path);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if DEPENDENCY_FILES.contains(&name) {
        return ReasonType::Dependency;
    }

    match ext.as_str() {
        "graphql" | "gql" => ReasonType::Schema,
        "css" | "scss" | "sass" | "less" => ReasonType::Style,
        "html" | "hbs" | "tmpl" | "ejs" => ReasonType::Template,
        _ if is_module_entry(name) => ReasonType::Module,
        "yml" | "yaml" | "toml" | "json" | "ini" | "env" => ReasonType::Config,
        _ if name.starts_with(".env") => ReasonType::Config,
        _ => ReasonType::Direct,
    }
}

/// Display name for the component a path belongs to
pub fn component_name(path: &Path) -> String {
    let name = file_name(path);
    if is_module_entry(name) {
        if let Some(dir) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        {
            return dir.to_string();
        }
    }
    match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

fn describe(file: &str, change: &ChangedFile) -> String {
    let what = match classify(&change.path) {
        ReasonType::Schema => "GraphQL schema",
        ReasonType::Dependency => "dependency manifest",
        ReasonType::Style => "stylesheet",
        ReasonType::Template => "template",
        ReasonType::Config => "configuration",
        ReasonType::Module => "module entry point",
        ReasonType::Direct => "file",
    };
    match change.change_type {
        ChangeType::Added => format!("{} {} added", what, file),
        ChangeType::Modified => format!("{} {} changed", what, file),
        ChangeType::Deleted => format!("{} {} removed (breaking)", what, file),
        ChangeType::Renamed => match &change.old_path {
            Some(old) => format!("{} renamed from {} to {}", what, normalize(old), file),
            None => format!("{} {} renamed", what, file),
        },
    }
}
