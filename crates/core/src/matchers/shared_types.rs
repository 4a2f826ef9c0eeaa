//! `shared-types`: a shared type package consumed by other repositories
//!
//! Any changed type may be used anywhere, so every impacted component in the
//! target repository counts as a consumer.

use super::{contains_any, RelationMatcher};
use crate::impact::ImpactItem;
use crate::relation::RelationKind;

pub struct SharedTypesMatcher;

impl RelationMatcher for SharedTypesMatcher {
    fn kind(&self) -> RelationKind {
        RelationKind::SharedTypes
    }

    fn is_trigger(&self, impact: &ImpactItem) -> bool {
        contains_any(&impact.file, &["types", "interfaces", "models"])
            || contains_any(&impact.component, &["Type", "Interface", "Struct"])
    }

    fn is_consumer(&self, _impact: &ImpactItem) -> bool {
        true
    }
}
