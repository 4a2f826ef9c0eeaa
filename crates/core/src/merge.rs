//! Deduplication of raw cross-repo records

use crate::relation::{CrossRepoImpact, RelationKind};
use std::collections::HashMap;

/// Collapse records sharing `(source repo, source component, target repo, relation)`.
///
/// The first record for a key is cloned into the output; the target
/// components of every later record with that key are unioned into it.
/// Output order is the first-seen order of distinct keys.
pub fn dedupe(records: &[CrossRepoImpact]) -> Vec<CrossRepoImpact> {
    let mut index: HashMap<(String, String, String, RelationKind), usize> = HashMap::new();
    let mut merged: Vec<CrossRepoImpact> = Vec::new();

    for record in records {
        let key = (
            record.source_repo.clone(),
            record.source_component.clone(),
            record.target_repo.clone(),
            record.relation.clone(),
        );
        match index.get(&key) {
            Some(&i) => {
                merged[i]
                    .target_components
                    .extend(record.target_components.iter().cloned());
            }
            None => {
                index.insert(key, merged.len());
                merged.push(record.clone());
            }
        }
    }

    merged
}
