//! `api-call`: HTTP handlers in one repository called by clients in another

use super::{contains_any, RelationMatcher};
use crate::impact::ImpactItem;
use crate::relation::RelationKind;

pub struct ApiCallMatcher;

impl RelationMatcher for ApiCallMatcher {
    fn kind(&self) -> RelationKind {
        RelationKind::ApiCall
    }

    fn is_trigger(&self, impact: &ImpactItem) -> bool {
        contains_any(
            &impact.component,
            &["API", "Handler", "Controller", "Endpoint"],
        ) || contains_any(&impact.file, &["controller", "handler", "routes"])
    }

    fn is_consumer(&self, impact: &ImpactItem) -> bool {
        contains_any(&impact.file, &["service", "api", "http", "fetch"])
            || impact.component.contains("Service")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_is_case_sensitive() {
        assert!(ApiCallMatcher.is_trigger(&ImpactItem::new("UserAPI", "api", "src/user.go")));
        assert!(!ApiCallMatcher.is_trigger(&ImpactItem::new("userApi", "api", "src/user.go")));
        assert!(ApiCallMatcher.is_trigger(&ImpactItem::new("user", "api", "src/routes/user.go")));
    }

    #[test]
    fn test_consumer_by_component_or_path() {
        assert!(ApiCallMatcher.is_consumer(&ImpactItem::new("UserService", "web", "src/User.ts")));
        assert!(ApiCallMatcher.is_consumer(&ImpactItem::new("useUser", "web", "src/hooks/fetchUser.ts")));
        assert!(!ApiCallMatcher.is_consumer(&ImpactItem::new("Header", "web", "src/Header.tsx")));
    }
}
