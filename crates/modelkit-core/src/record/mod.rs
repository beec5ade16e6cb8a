
use crate::{error::ValidationError, value::Value};
use modelkit_schema::{
    build::Registry,
    node::Field,
    types::{FieldType, Primitive},
};
use serde::ser::{Serialize, SerializeMap, Serializer};

///
/// Record
///
/// An immutable instance of a registered model. Field order always matches
/// the model's declaration order, and every entry was validated against the
/// field schema at construction or parse time, so a `Record` in hand is
/// known-valid. Equality is structural and recursive; `Hash` derives from the
/// same fields, so equal records hash equal.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    model: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Start building a record of the named model.
    #[must_use]
    pub fn build(model: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(model)
    }

    // Entries arrive pre-validated and in declaration order.
    pub(crate) const fn from_parts(model: String, fields: Vec<(String, Value)>) -> Self {
        Self { model, fields }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == ident)
            .map(|(_, value)| value)
    }

    /// Present fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(ident, value)| (ident.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Wire shape: an ordered map of the present fields, declaration order.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (ident, value) in self.fields() {
            map.serialize_entry(ident, value)?;
        }
        map.end()
    }
}

///
/// RecordBuilder
///
/// Stages entries in any order; `finish` validates them against the model in
/// one pass and normalizes them into declaration order. Nothing partial
/// escapes on error.
///

#[derive(Clone, Debug)]
pub struct RecordBuilder {
    model: String,
    entries: Vec<(String, Value)>,
}

impl RecordBuilder {
    fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            entries: Vec::new(),
        }
    }

    /// Stage a field value.
    #[must_use]
    pub fn set(mut self, ident: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((ident.into(), value.into()));
        self
    }

    /// Validate the staged entries against the registry and produce the
    /// record. Unknown model, duplicate or undeclared entries, missing
    /// required fields, and kind mismatches are all rejected here.
    pub fn finish(self, registry: &Registry) -> Result<Record, ValidationError> {
        let Some(model) = registry.get(&self.model) else {
            return Err(ValidationError::UnknownModel { model: self.model });
        };

        for (index, (ident, _)) in self.entries.iter().enumerate() {
            if self.entries[index + 1..].iter().any(|(other, _)| other == ident) {
                return Err(ValidationError::DuplicateEntry {
                    model: model.ident.clone(),
                    field: ident.clone(),
                });
            }
            // closed schema: undeclared entries are rejected
            if !model.fields.contains(ident) {
                return Err(ValidationError::UnexpectedField {
                    model: model.ident.clone(),
                    field: ident.clone(),
                });
            }
        }

        let mut entries = self.entries;
        let mut fields = Vec::with_capacity(model.fields.len());
        for decl in model.fields.iter() {
            match entries.iter().position(|(ident, _)| *ident == decl.ident) {
                Some(position) => {
                    let (_, value) = entries.swap_remove(position);
                    check_kind(&model.ident, decl, &value)?;
                    fields.push((decl.ident.clone(), value));
                }
                None if decl.required => {
                    return Err(ValidationError::MissingField {
                        model: model.ident.clone(),
                        field: decl.ident.clone(),
                    });
                }
                None => {}
            }
        }

        Ok(Record::from_parts(model.ident.clone(), fields))
    }
}

// Check a staged value against the declared field type.
fn check_kind(model: &str, decl: &Field, value: &Value) -> Result<(), ValidationError> {
    match (&decl.ty, value) {
        (FieldType::Primitive(Primitive::Int64), Value::Int(_))
        | (FieldType::Primitive(Primitive::Text), Value::Text(_)) => Ok(()),
        (FieldType::Model(expected), Value::Record(record)) => {
            if record.model() == expected {
                Ok(())
            } else {
                Err(ValidationError::ModelMismatch {
                    model: model.to_string(),
                    field: decl.ident.clone(),
                    expected: expected.clone(),
                    found: record.model().to_string(),
                })
            }
        }
        _ => Err(ValidationError::WrongKind {
            model: model.to_string(),
            field: decl.ident.clone(),
            expected: decl.ty.to_string(),
            found: value.kind_label().to_string(),
        }),
    }
}
