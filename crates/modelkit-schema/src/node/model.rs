use crate::{MAX_MODEL_NAME_LEN, prelude::*};

///
/// Model
///
/// Schema node describing one named record shape. The ident doubles as the
/// `title` of the model's JSON Schema document.
///

#[derive(Clone, Debug, Serialize)]
pub struct Model {
    pub ident: String,
    pub fields: FieldList,
}

impl Model {
    #[must_use]
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            fields: FieldList::default(),
        }
    }

    /// Append a field declaration, preserving order.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn get_field(&self, ident: &str) -> Option<&Field> {
        self.fields.get(ident)
    }
}

impl ValidateNode for Model {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "model ident is empty");
        } else if self.ident.len() > MAX_MODEL_NAME_LEN {
            err!(
                errs,
                "model ident `{}` exceeds {MAX_MODEL_NAME_LEN} bytes",
                self.ident,
            );
        }

        errs.result()
    }
}
