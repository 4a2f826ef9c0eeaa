//! `sqs`: producers and consumers sharing an SQS message contract

use super::RelationMatcher;
use crate::impact::ImpactItem;
use crate::relation::RelationKind;

pub struct SqsMatcher;

/// Applied to both sides: the component mentions SQS, or a reason does.
fn touches_sqs(impact: &ImpactItem) -> bool {
    impact.component.contains("SQS")
        || impact
            .reasons
            .iter()
            .any(|r| r.description.to_lowercase().contains("sqs"))
}

impl RelationMatcher for SqsMatcher {
    fn kind(&self) -> RelationKind {
        RelationKind::Sqs
    }

    fn is_trigger(&self, impact: &ImpactItem) -> bool {
        touches_sqs(impact)
    }

    fn is_consumer(&self, impact: &ImpactItem) -> bool {
        touches_sqs(impact)
    }
}
