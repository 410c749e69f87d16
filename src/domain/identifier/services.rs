// src/domain/identifier/services.rs
use std::iter;
use std::sync::Arc;

use super::config::GenerationConfig;
use super::repository::TakenIdentifierLookup;
use super::suffix::increment;
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service that picks a collision-free identifier from ranked candidates.
pub struct IdentifierResolver {
    lookup: Arc<dyn TakenIdentifierLookup>,
}

impl IdentifierResolver {
    pub fn new(lookup: Arc<dyn TakenIdentifierLookup>) -> Self {
        Self { lookup }
    }

    pub async fn resolve(
        &self,
        candidates: Vec<String>,
        config: &GenerationConfig,
    ) -> DomainResult<String> {
        resolve(candidates, config, self.lookup.as_ref()).await
    }
}

/// Picks the shortest free candidate, falling back to suffixed variants of the
/// most normalized one. An empty candidate list resolves to an empty string.
pub async fn resolve(
    candidates: Vec<String>,
    config: &GenerationConfig,
    lookup: &dyn TakenIdentifierLookup,
) -> DomainResult<String> {
    let Some(base) = candidates.last().cloned() else {
        return Ok(String::new());
    };
    let field = config.target_field();

    let taken = lookup.find_taken(&candidates, field).await?;
    tracing::debug!(
        field = %field,
        candidates = candidates.len(),
        taken = taken.len(),
        "checked candidate identifiers"
    );

    if let Some(free) = candidates.into_iter().filter(|c| !taken.contains(c)).last() {
        return Ok(free);
    }

    let Some(template) = config.suffix_template() else {
        return Err(DomainError::NoIdentifierAvailable { base });
    };

    let variants = suffixed_variants(&base, template, config.suffix_iterations());
    let taken = lookup.find_taken(&variants, field).await?;
    tracing::debug!(
        field = %field,
        base = %base,
        variants = variants.len(),
        taken = taken.len(),
        "checked suffixed identifiers"
    );

    variants
        .into_iter()
        .find(|variant| !taken.contains(variant))
        .ok_or(DomainError::NoIdentifierAvailable { base })
}

fn suffixed_variants(base: &str, template: &str, iterations: usize) -> Vec<String> {
    iter::successors(Some(template.to_string()), |suffix| Some(increment(suffix)))
        .take(iterations)
        .map(|suffix| format!("{base}{suffix}"))
        .collect()
}
