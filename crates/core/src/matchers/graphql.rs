//! `graphql-schema`: schema changes in an API reaching query documents in clients

use super::{contains_any, is_graphql_file, RelationMatcher};
use crate::impact::{ImpactItem, ReasonType};
use crate::relation::RelationKind;

pub struct GraphqlSchemaMatcher;

impl RelationMatcher for GraphqlSchemaMatcher {
    fn kind(&self) -> RelationKind {
        RelationKind::GraphqlSchema
    }

    fn is_trigger(&self, impact: &ImpactItem) -> bool {
        impact.has_reason(ReasonType::Schema)
            || is_graphql_file(&impact.file)
            || contains_any(&impact.component, &["Query", "Mutation"])
    }

    fn is_consumer(&self, impact: &ImpactItem) -> bool {
        is_graphql_file(&impact.file)
            || contains_any(&impact.file, &["query", "mutation", "apollo", "graphql"])
    }
}
