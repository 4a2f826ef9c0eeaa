//! `npm-package`: a published package (npm or Go module) consumed by another repository
//!
//! Dependency bumps can affect anything, so every impacted component in the
//! target repository counts as a consumer.

use super::RelationMatcher;
use crate::impact::{ImpactItem, ReasonType};
use crate::relation::RelationKind;

pub struct NpmPackageMatcher;

impl RelationMatcher for NpmPackageMatcher {
    fn kind(&self) -> RelationKind {
        RelationKind::NpmPackage
    }

    fn is_trigger(&self, impact: &ImpactItem) -> bool {
        impact.has_reason(ReasonType::Dependency)
            || impact.file == "package.json"
            || impact.file.ends_with("go.mod")
    }

    fn is_consumer(&self, _impact: &ImpactItem) -> bool {
        true
    }
}
