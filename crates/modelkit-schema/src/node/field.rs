use crate::{MAX_FIELD_NAME_LEN, prelude::*};
use std::collections::BTreeMap;

///
/// FieldList
///
/// Declaration order is preserved and determines serialization key order.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.get(ident).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub(crate) fn push(&mut self, field: Field) {
        self.fields.push(field);
    }
}

impl ValidateNode for FieldList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // duplicate field idents fail at definition time
        let mut seen = BTreeMap::new();
        for (index, field) in self.fields.iter().enumerate() {
            if let Some(first) = seen.insert(field.ident.as_str(), index) {
                err!(
                    errs,
                    "duplicate field `{}` (declared at positions {first} and {index})",
                    field.ident,
                );
            }
        }

        errs.result()
    }
}

///
/// Field
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub ident: String,
    pub ty: FieldType,
    pub required: bool,
}

impl Field {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: FieldType) -> Self {
        Self {
            ident: ident.into(),
            ty,
            required: true,
        }
    }

    /// Required UTF-8 text field.
    #[must_use]
    pub fn text(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldType::Primitive(Primitive::Text))
    }

    /// Required 64-bit integer field.
    #[must_use]
    pub fn int64(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldType::Primitive(Primitive::Int64))
    }

    /// Required nested record field, owned by value.
    #[must_use]
    pub fn model(ident: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(ident, FieldType::Model(model.into()))
    }

    /// Mark the field optional: it may be omitted at construction and parse
    /// time, and is skipped during serialization when absent.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "field ident is empty");
        } else if self.ident.len() > MAX_FIELD_NAME_LEN {
            err!(
                errs,
                "field ident `{}` exceeds {MAX_FIELD_NAME_LEN} bytes",
                self.ident,
            );
        }

        errs.result()
    }
}
