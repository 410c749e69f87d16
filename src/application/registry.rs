// src/application/registry.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::identifier::{EntityType, GenerationConfig, GenerationOptions};

/// Generation settings declared per entity type.
///
/// Built once while the host boots and then shared read-only; redeclaring an
/// entity type replaces its previous entry.
#[derive(Debug, Default, Clone)]
pub struct GenerationRegistry {
    entries: HashMap<EntityType, Arc<GenerationConfig>>,
}

impl GenerationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `options` and associates the resulting config with `entity`.
    pub fn declare(
        &mut self,
        entity: EntityType,
        options: GenerationOptions,
    ) -> DomainResult<Arc<GenerationConfig>> {
        let config = GenerationConfig::try_from(options)?;
        Ok(self.declare_config(entity, config))
    }

    pub fn declare_config(
        &mut self,
        entity: EntityType,
        config: GenerationConfig,
    ) -> Arc<GenerationConfig> {
        let config = Arc::new(config);
        tracing::debug!(
            entity = %entity,
            target = %config.target_field(),
            disposable = config.disposable_words().len(),
            disposable_mode = config.disposable_mode().as_str(),
            suffix = config.suffix_template().unwrap_or(""),
            "declared identifier generation"
        );
        if self.entries.insert(entity.clone(), Arc::clone(&config)).is_some() {
            tracing::warn!(entity = %entity, "replaced identifier generation declaration");
        }
        config
    }

    pub fn config_for(&self, entity: &EntityType) -> Option<Arc<GenerationConfig>> {
        self.entries.get(entity).cloned()
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &EntityType> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
