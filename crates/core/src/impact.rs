//! Impact items: the per-repository output of local analyzers
//!
//! An [`ImpactItem`] is one component flagged as affected by a change, with the
//! typed [`Reason`]s explaining why. Items are grouped per repository in
//! [`RepoImpacts`], which is the unit the cross-repo correlator consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Why a component is considered impacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonType {
    /// The component's own file was edited
    Direct,
    /// A package manifest or dependency changed
    Dependency,
    /// A schema (GraphQL, database, message contract) changed
    Schema,
    /// A stylesheet changed
    Style,
    /// A configuration file changed
    Config,
    /// A template or markup file changed
    Template,
    /// A module entry point (index file, `mod.rs`) changed
    Module,
}

impl std::fmt::Display for ReasonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReasonType::Direct => "direct",
            ReasonType::Dependency => "dependency",
            ReasonType::Schema => "schema",
            ReasonType::Style => "style",
            ReasonType::Config => "config",
            ReasonType::Template => "template",
            ReasonType::Module => "module",
        };
        write!(f, "{}", s)
    }
}

/// A single typed explanation attached to an [`ImpactItem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    #[serde(rename = "type")]
    pub kind: ReasonType,

    /// File or artifact that caused the impact
    pub source: String,

    /// Human-readable explanation (matchers substring-match on this)
    pub description: String,
}

impl Reason {
    pub fn new(kind: ReasonType, source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            description: description.into(),
        }
    }
}

/// One impacted component in one repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactItem {
    /// Display name of the affected unit (class, query, struct, file stem)
    pub component: String,

    /// Owning repository name. External analyzers may leave this empty; the
    /// loader fills it in from the repository the file belongs to.
    #[serde(default)]
    pub repo: String,

    /// Path relative to the repository root, `/`-separated
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    #[serde(default)]
    pub reasons: Vec<Reason>,

    /// Filled only by post-processing enhancement steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_hints: Option<Vec<String>>,
}

impl ImpactItem {
    pub fn new(
        component: impl Into<String>,
        repo: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            repo: repo.into(),
            file: file.into(),
            line: None,
            reasons: Vec::new(),
            test_hints: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.add_reason(reason);
        self
    }

    /// Add a reason unless one with the same `(type, source)` is already present.
    pub fn add_reason(&mut self, reason: Reason) {
        let exists = self
            .reasons
            .iter()
            .any(|r| r.kind == reason.kind && r.source == reason.source);
        if !exists {
            self.reasons.push(reason);
        }
    }

    /// Whether any reason has the given type
    pub fn has_reason(&self, kind: ReasonType) -> bool {
        self.reasons.iter().any(|r| r.kind == kind)
    }

    /// A schema reason, or any description mentioning "breaking", marks the
    /// item as a breaking change.
    pub fn is_breaking(&self) -> bool {
        self.reasons.iter().any(|r| {
            r.kind == ReasonType::Schema || r.description.to_lowercase().contains("breaking")
        })
    }
}

/// All impacts detected in one repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoImpacts {
    pub repo: String,
    pub impacts: Vec<ImpactItem>,
}

impl RepoImpacts {
    pub fn new(repo: impl Into<String>, impacts: Vec<ImpactItem>) -> Self {
        Self {
            repo: repo.into(),
            impacts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.impacts.is_empty()
    }
}

/// Merge items sharing a `(component, file)` key, unioning their reasons.
///
/// Output keeps the first-seen order of distinct keys. The first known line
/// number wins.
pub fn merge_impacts(items: Vec<ImpactItem>) -> Vec<ImpactItem> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut merged: Vec<ImpactItem> = Vec::with_capacity(items.len());

    for item in items {
        let key = (item.component.clone(), item.file.clone());
        match index.get(&key) {
            Some(&i) => {
                let existing = &mut merged[i];
                if existing.line.is_none() {
                    existing.line = item.line;
                }
                for reason in item.reasons {
                    existing.add_reason(reason);
                }
                if let Some(hints) = item.test_hints {
                    let target = existing.test_hints.get_or_insert_with(Vec::new);
                    for hint in hints {
                        if !target.contains(&hint) {
                            target.push(hint);
                        }
                    }
                }
            }
            None => {
                let mut item = item;
                for reason in std::mem::take(&mut item.reasons) {
                    item.add_reason(reason);
                }
                index.insert(key, merged.len());
                merged.push(item);
            }
        }
    }

    merged
}
