
use crate::{error::ErrorTree, node::Model, validate::validate_registry};
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// RegistryBuilder
///
/// Accumulates model declarations; `build` validates the whole set at once
/// and freezes it. Malformed declarations fail here, never at
/// instance-construction time.
///

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    models: Vec<Model>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, preserving registration order.
    #[must_use]
    pub fn model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    pub fn build(self) -> Result<Registry, BuildError> {
        let registry = Registry {
            models: self.models,
        };
        validate_registry(&registry).map_err(BuildError::Validation)?;

        Ok(registry)
    }
}

///
/// Registry
///
/// The explicit, validated set of models a codec operates over. Populated
/// through `RegistryBuilder` at startup; read-only afterwards.
///

#[derive(Clone, Debug, Serialize)]
pub struct Registry {
    models: Vec<Model>,
}

impl Registry {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.ident == ident)
    }

    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.get(ident).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }
}
