use super::value_objects::TargetField;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashSet;

/// Existence check against the collection that stores identifiers.
///
/// Implementations must compare candidates with exact, case-sensitive
/// equality. When the backing column is case-insensitive, callers should
/// normalise case before storing identifiers or the check can under-match.
#[async_trait]
pub trait TakenIdentifierLookup: Send + Sync {
    /// Returns the subset of `candidates` already stored under `field`.
    async fn find_taken(
        &self,
        candidates: &[String],
        field: &TargetField,
    ) -> DomainResult<HashSet<String>>;
}
