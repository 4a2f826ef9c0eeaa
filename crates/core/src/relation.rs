//! Declared relations between repositories and the cross-repo records they produce

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mechanism by which a change in one repository propagates to another.
///
/// Unrecognized values deserialize into [`RelationKind::Other`] instead of
/// failing, so a config written for a newer version still loads. The
/// correlator skips relations of an unknown kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    GraphqlSchema,
    Sqs,
    SharedTypes,
    ApiCall,
    NpmPackage,
    Other(String),
}

impl RelationKind {
    /// Every relation kind with a built-in matcher
    pub fn known() -> [RelationKind; 5] {
        [
            RelationKind::GraphqlSchema,
            RelationKind::Sqs,
            RelationKind::SharedTypes,
            RelationKind::ApiCall,
            RelationKind::NpmPackage,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            RelationKind::GraphqlSchema => "graphql-schema",
            RelationKind::Sqs => "sqs",
            RelationKind::SharedTypes => "shared-types",
            RelationKind::ApiCall => "api-call",
            RelationKind::NpmPackage => "npm-package",
            RelationKind::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RelationKind::Other(_))
    }
}

impl From<&str> for RelationKind {
    fn from(s: &str) -> Self {
        match s {
            "graphql-schema" => RelationKind::GraphqlSchema,
            "sqs" => RelationKind::Sqs,
            "shared-types" => RelationKind::SharedTypes,
            "api-call" => RelationKind::ApiCall,
            "npm-package" => RelationKind::NpmPackage,
            other => RelationKind::Other(other.to_string()),
        }
    }
}

impl From<String> for RelationKind {
    fn from(s: String) -> Self {
        RelationKind::from(s.as_str())
    }
}

impl From<RelationKind> for String {
    fn from(kind: RelationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed edge in the repository relation graph (`[[relations]]` in `.ripple.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub from: String,
    pub to: String,
    pub via: RelationKind,

    /// Glob patterns; a target file matching any of them counts as a consumer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

impl RelationConfig {
    pub fn new(from: impl Into<String>, to: impl Into<String>, via: RelationKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            via,
            patterns: Vec::new(),
        }
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}

/// One source component linked to the target components it plausibly affects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossRepoImpact {
    pub source_repo: String,
    pub source_component: String,
    pub target_repo: String,
    pub target_components: BTreeSet<String>,
    pub relation: RelationKind,
}

impl CrossRepoImpact {
    /// Merge key: one record per `(source repo, source component, target repo, relation)`
    pub fn key(&self) -> (&str, &str, &str, &RelationKind) {
        (
            &self.source_repo,
            &self.source_component,
            &self.target_repo,
            &self.relation,
        )
    }
}
