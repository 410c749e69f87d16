// src/domain/identifier/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Logical owner of an identifier column, e.g. the `pages` collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityType(String);

impl EntityType {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("entity type cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityType> for String {
    fn from(value: EntityType) -> Self {
        value.0
    }
}

/// Name of the field in the backing collection that stores identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetField(String);

impl TargetField {
    pub const CONVENTIONAL: &'static str = "url";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::MissingTargetField);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetField {
    fn default() -> Self {
        Self(Self::CONVENTIONAL.to_string())
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TargetField> for String {
    fn from(value: TargetField) -> Self {
        value.0
    }
}

/// Source text for a suggestion: one string, or word fragments joined with spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestInput {
    Text(String),
    Fragments(Vec<String>),
}

impl SuggestInput {
    pub fn into_text(self) -> String {
        match self {
            SuggestInput::Text(text) => text,
            SuggestInput::Fragments(fragments) => fragments.join(" "),
        }
    }
}

impl From<&str> for SuggestInput {
    fn from(value: &str) -> Self {
        SuggestInput::Text(value.to_string())
    }
}

impl From<String> for SuggestInput {
    fn from(value: String) -> Self {
        SuggestInput::Text(value)
    }
}

impl From<Vec<String>> for SuggestInput {
    fn from(value: Vec<String>) -> Self {
        SuggestInput::Fragments(value)
    }
}

impl From<&[&str]> for SuggestInput {
    fn from(value: &[&str]) -> Self {
        SuggestInput::Fragments(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SuggestInput {
    fn from(value: [&str; N]) -> Self {
        SuggestInput::Fragments(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl TryFrom<Value> for SuggestInput {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(SuggestInput::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(DomainError::InvalidInputKind),
                })
                .collect::<DomainResult<Vec<_>>>()
                .map(SuggestInput::Fragments),
            _ => Err(DomainError::InvalidInputKind),
        }
    }
}
