mod field;
mod model;

pub use field::{Field, FieldList};
pub use model::Model;

use crate::error::ErrorTree;

///
/// ValidateNode
///
/// Local structural invariants of a single schema node. Registry-wide
/// invariants live in `validate`.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
