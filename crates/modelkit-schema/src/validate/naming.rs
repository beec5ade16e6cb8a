//! Registry-wide naming invariants.

use crate::{build::Registry, err, error::ErrorTree};
use std::collections::BTreeMap;

/// Reject duplicate model idents across the registry.
pub(crate) fn validate_model_naming(registry: &Registry, errors: &mut ErrorTree) {
    let mut seen = BTreeMap::new();

    for (index, model) in registry.iter().enumerate() {
        if let Some(first) = seen.insert(model.ident.as_str(), index) {
            err!(
                errors.route(&model.ident),
                "duplicate model ident (registered at positions {first} and {index})",
            );
        }
    }
}
