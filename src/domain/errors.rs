// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("a string or a sequence of strings is required")]
    InvalidInputKind,
    #[error("generation config requires a target field")]
    MissingTargetField,
    #[error("no identifier available for `{base}`")]
    NoIdentifierAvailable { base: String },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
