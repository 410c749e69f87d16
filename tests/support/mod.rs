// tests/support/mod.rs
// Shared by several integration test binaries; not every helper is used by each.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use suggest_id::domain::errors::{DomainError, DomainResult};
use suggest_id::domain::identifier::{GenerationConfig, TakenIdentifierLookup, TargetField};

/// Lookup that reports a fixed set of identifiers as taken and records every batch it sees.
pub struct RecordingLookup {
    taken: HashSet<String>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingLookup {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn none_taken() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TakenIdentifierLookup for RecordingLookup {
    async fn find_taken(
        &self,
        candidates: &[String],
        field: &TargetField,
    ) -> DomainResult<HashSet<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((field.as_str().to_string(), candidates.to_vec()));
        Ok(candidates
            .iter()
            .filter(|c| self.taken.contains(c.as_str()))
            .cloned()
            .collect())
    }
}

/// Lookup that reports everything as taken.
pub struct EverythingTaken;

#[async_trait]
impl TakenIdentifierLookup for EverythingTaken {
    async fn find_taken(
        &self,
        candidates: &[String],
        _field: &TargetField,
    ) -> DomainResult<HashSet<String>> {
        Ok(candidates.iter().cloned().collect())
    }
}

/// Lookup whose backing store is unavailable.
pub struct FailingLookup;

#[async_trait]
impl TakenIdentifierLookup for FailingLookup {
    async fn find_taken(
        &self,
        _candidates: &[String],
        _field: &TargetField,
    ) -> DomainResult<HashSet<String>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// The `pages` declaration used throughout the tests.
pub fn page_config() -> GenerationConfig {
    GenerationConfig::builder()
        .target_field("url")
        .disposable_words([
            "class",
            "preparatory",
            "prep",
            "school",
            "high",
            "junior",
            "middle",
            "elementary",
        ])
        .suffix_template("-0000")
        .suffix_iterations(20)
        .build()
        .expect("page config is valid")
}
