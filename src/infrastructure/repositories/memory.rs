use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::{TakenIdentifierLookup, TargetField};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

/// Process-local identifier store, keyed by field name.
#[derive(Debug, Default)]
pub struct InMemoryTakenIdentifierLookup {
    values: RwLock<HashMap<String, HashSet<String>>>,
}

impl InMemoryTakenIdentifierLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taken<I, S>(self, field: &TargetField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(field, value);
        }
        self
    }

    /// Records `value` as stored under `field`. Returns `false` if it already was.
    pub fn insert(&self, field: &TargetField, value: impl Into<String>) -> bool {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values
            .entry(field.as_str().to_string())
            .or_default()
            .insert(value.into())
    }

    pub fn remove(&self, field: &TargetField, value: &str) -> bool {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values
            .get_mut(field.as_str())
            .is_some_and(|set| set.remove(value))
    }
}

#[async_trait]
impl TakenIdentifierLookup for InMemoryTakenIdentifierLookup {
    async fn find_taken(
        &self,
        candidates: &[String],
        field: &TargetField,
    ) -> DomainResult<HashSet<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| DomainError::Persistence("identifier store lock poisoned".into()))?;
        let Some(stored) = values.get(field.as_str()) else {
            return Ok(HashSet::new());
        };
        Ok(candidates
            .iter()
            .filter(|candidate| stored.contains(candidate.as_str()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> TargetField {
        TargetField::new("url").unwrap()
    }

    #[tokio::test]
    async fn matches_exactly_and_per_field() {
        let lookup = InMemoryTakenIdentifierLookup::new().with_taken(&url(), ["title"]);
        let candidates = vec!["title".to_string(), "Title".to_string(), "other".to_string()];

        let taken = lookup.find_taken(&candidates, &url()).await.unwrap();
        assert_eq!(taken, HashSet::from(["title".to_string()]));

        let slug = TargetField::new("slug").unwrap();
        assert!(lookup.find_taken(&candidates, &slug).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_and_remove_update_lookups() {
        let lookup = InMemoryTakenIdentifierLookup::new();
        assert!(lookup.insert(&url(), "title"));
        assert!(!lookup.insert(&url(), "title"));
        assert!(lookup.remove(&url(), "title"));
        let taken = lookup
            .find_taken(&["title".to_string()], &url())
            .await
            .unwrap();
        assert!(taken.is_empty());
    }
}
