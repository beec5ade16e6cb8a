//! Model reference resolution and by-value nesting invariants.

use crate::{build::Registry, err, error::ErrorTree, types::FieldType};
use std::collections::BTreeSet;

/// Every `Model`-typed field must reference a registered model.
pub(crate) fn validate_model_references(registry: &Registry, errors: &mut ErrorTree) {
    for model in registry.iter() {
        for field in model.fields.iter() {
            if let FieldType::Model(target) = &field.ty
                && !registry.contains(target)
            {
                err!(
                    errors.route(&model.ident).route(&field.ident),
                    "unknown model `{target}`",
                );
            }
        }
    }
}

/// A model that transitively contains itself by value can never be
/// instantiated, and schema-document generation would not terminate on it.
pub(crate) fn validate_nesting_cycles(registry: &Registry, errors: &mut ErrorTree) {
    for model in registry.iter() {
        let mut seen = BTreeSet::new();
        if reaches(registry, &model.ident, &model.ident, &mut seen) {
            err!(errors.route(&model.ident), "model contains itself by value");
        }
    }
}

// Depth-first walk over the by-value nesting graph.
fn reaches<'r>(
    registry: &'r Registry,
    from: &str,
    target: &str,
    seen: &mut BTreeSet<&'r str>,
) -> bool {
    let Some(model) = registry.get(from) else {
        return false;
    };

    for field in model.fields.iter() {
        if let FieldType::Model(next) = &field.ty {
            if next == target {
                return true;
            }
            if seen.insert(next.as_str()) && reaches(registry, next, target, seen) {
                return true;
            }
        }
    }

    false
}
