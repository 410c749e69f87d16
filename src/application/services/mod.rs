// src/application/services/mod.rs
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        registry::GenerationRegistry,
    },
    domain::{
        errors::DomainResult,
        identifier::{
            EntityType, GenerationConfig, Normalizer, SuggestInput, TakenIdentifierLookup,
            services::resolve,
        },
    },
};

/// Suggests an identifier for `input` that `lookup` does not report as taken.
///
/// Empty input yields an empty string rather than an error.
pub async fn suggest(
    input: impl Into<SuggestInput>,
    config: &GenerationConfig,
    lookup: &dyn TakenIdentifierLookup,
) -> DomainResult<String> {
    let candidates = Normalizer::new(config).candidates(input.into());
    resolve(candidates, config, lookup).await
}

/// Like [`suggest`], for hosts that receive the source text as JSON.
pub async fn suggest_json(
    input: Value,
    config: &GenerationConfig,
    lookup: &dyn TakenIdentifierLookup,
) -> DomainResult<String> {
    let input = SuggestInput::try_from(input)?;
    suggest(input, config, lookup).await
}

/// Binds declared entity types to the lookups that back them.
pub struct IdentifierSuggestionService {
    registry: Arc<GenerationRegistry>,
    lookups: HashMap<EntityType, Arc<dyn TakenIdentifierLookup>>,
}

impl IdentifierSuggestionService {
    pub fn new(registry: Arc<GenerationRegistry>) -> Self {
        Self {
            registry,
            lookups: HashMap::new(),
        }
    }

    pub fn with_lookup(
        mut self,
        entity: EntityType,
        lookup: Arc<dyn TakenIdentifierLookup>,
    ) -> Self {
        self.lookups.insert(entity, lookup);
        self
    }

    pub async fn suggest(
        &self,
        entity: &EntityType,
        input: impl Into<SuggestInput>,
    ) -> ApplicationResult<String> {
        let (config, lookup) = self.binding(entity)?;
        let id = suggest(input, &config, lookup.as_ref()).await?;
        tracing::info!(entity = %entity, identifier = %id, "suggested identifier");
        Ok(id)
    }

    pub async fn suggest_json(
        &self,
        entity: &EntityType,
        input: Value,
    ) -> ApplicationResult<String> {
        let input = SuggestInput::try_from(input)?;
        self.suggest(entity, input).await
    }

    fn binding(
        &self,
        entity: &EntityType,
    ) -> ApplicationResult<(Arc<GenerationConfig>, Arc<dyn TakenIdentifierLookup>)> {
        let config = self.registry.config_for(entity).ok_or_else(|| {
            ApplicationError::not_found(format!("no identifier generation declared for {entity}"))
        })?;
        let lookup = self.lookups.get(entity).cloned().ok_or_else(|| {
            ApplicationError::not_found(format!("no identifier lookup bound for {entity}"))
        })?;
        Ok((config, lookup))
    }
}
