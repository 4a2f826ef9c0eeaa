//! Ripple Core - Cross-Repository Impact Correlation
//!
//! This crate provides the analysis engine behind Ripple:
//! - Impact items and per-repository impact lists
//! - Per-relation matchers (GraphQL schema, SQS, shared types, API calls, packages)
//! - The cross-repo correlator and its merge pass
//! - Git diff plumbing and a path-based local analyzer feeding the correlator

pub mod analyzer;
pub mod config;
pub mod correlator;
pub mod diff;
pub mod impact;
pub mod matchers;
pub mod merge;
pub mod pattern;
pub mod relation;
pub mod result;

pub use analyzer::{AnalyzerDispatcher, LocalAnalyzer, PathAnalyzer};
pub use config::{ConfigError, RepoConfig, RepoType, RippleConfig};
pub use correlator::CrossRepoCorrelator;
pub use diff::{ChangeType, ChangedFile, DiffAnalyzer};
pub use impact::{merge_impacts, ImpactItem, Reason, ReasonType, RepoImpacts};
pub use matchers::{MatcherRegistry, RelationMatcher};
pub use merge::dedupe;
pub use pattern::{GlobError, GlobPattern, GlobSyntax};
pub use relation::{CrossRepoImpact, RelationConfig, RelationKind};
pub use result::{AnalysisResult, AnalysisSummary};

/// Ripple version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
