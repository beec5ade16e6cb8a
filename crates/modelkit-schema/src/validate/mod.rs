//! Registry validation orchestration and shared helpers.

pub mod naming;
pub mod reference;

use crate::{
    build::Registry,
    error::ErrorTree,
    node::ValidateNode,
};

/// Run full registry validation in a staged, deterministic order.
pub(crate) fn validate_registry(registry: &Registry) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(registry);

    // Phase 2: enforce registry-wide invariants.
    validate_global(registry, &mut errors);

    errors.result()
}

// Validate all nodes, keyed by their `Model.field` routes.
fn validate_nodes(registry: &Registry) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for model in registry.iter() {
        if let Err(errs) = model.validate() {
            errors.merge_at(&model.ident, errs);
        }
        if let Err(errs) = model.fields.validate() {
            errors.merge_at(&model.ident, errs);
        }

        for field in model.fields.iter() {
            if let Err(errs) = field.validate() {
                errors.route(&model.ident).merge_at(&field.ident, errs);
            }
        }
    }

    errors
}

// Run global validation passes that require a full registry view.
fn validate_global(registry: &Registry, errors: &mut ErrorTree) {
    naming::validate_model_naming(registry, errors);
    reference::validate_model_references(registry, errors);
    reference::validate_nesting_cycles(registry, errors);
}
