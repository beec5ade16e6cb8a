//! JSON and JSON Schema conversion over validated records.

#[cfg(test)]
mod tests;

use crate::{
    error::{Error, ParseError, ValidationError},
    record::Record,
    value::Value,
};
use modelkit_schema::{
    build::Registry,
    node::{Field, Model},
    types::{FieldType, Primitive},
};
use serde_json::{Map, Value as Json};

/// JSON Schema dialect identifier emitted by `schema_document`.
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";

///
/// Codec
///
/// Conversion surface over an explicit registry. The codec holds no state
/// beyond that borrow; every operation is a pure transformation.
///

#[derive(Clone, Copy, Debug)]
pub struct Codec<'r> {
    registry: &'r Registry,
}

impl<'r> Codec<'r> {
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    ///
    /// RECORD → JSON
    ///

    /// Project a record into an ordered mapping, nested records recursively
    /// converted. Pure projection; cannot fail.
    #[must_use]
    pub fn to_value(&self, record: &Record) -> Json {
        serde_json::to_value(record).expect("record projection is always a JSON object")
    }

    /// Serialize a record as compact JSON text, keys in declaration order.
    /// Deterministic: the same record always yields byte-identical text.
    #[must_use]
    pub fn to_json(&self, record: &Record) -> String {
        serde_json::to_string(record).expect("record projection always serializes")
    }

    ///
    /// JSON → RECORD
    ///

    /// Parse JSON text, then validate the parsed object against the named
    /// model. Malformed text is a `ParseError`; a schema mismatch in
    /// well-formed text is a `ValidationError`.
    pub fn from_json(&self, model: &str, text: &str) -> Result<Record, Error> {
        let parsed: Json = serde_json::from_str(text).map_err(ParseError::from)?;
        let record = self.value_to_record(model, &parsed)?;

        Ok(record)
    }

    /// Validate an already-parsed JSON value against the named model.
    /// Nested objects validate recursively against their declared models.
    pub fn value_to_record(&self, model: &str, value: &Json) -> Result<Record, ValidationError> {
        let Some(model) = self.registry.get(model) else {
            return Err(ValidationError::UnknownModel {
                model: model.to_string(),
            });
        };

        let Json::Object(object) = value else {
            return Err(ValidationError::NonObject {
                model: model.ident.clone(),
                found: json_kind_label(value).to_string(),
            });
        };

        // closed schema: undeclared keys are rejected
        for key in object.keys() {
            if !model.fields.contains(key) {
                return Err(ValidationError::UnexpectedField {
                    model: model.ident.clone(),
                    field: key.clone(),
                });
            }
        }

        let mut fields = Vec::with_capacity(model.fields.len());
        for decl in model.fields.iter() {
            match object.get(&decl.ident) {
                Some(json) => {
                    let value = self.json_to_value(model, decl, json)?;
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

    fn json_to_value(
        &self,
        model: &Model,
        decl: &Field,
        json: &Json,
    ) -> Result<Value, ValidationError> {
        let value = match &decl.ty {
            FieldType::Primitive(Primitive::Int64) => json.as_i64().map(Value::Int),
            FieldType::Primitive(Primitive::Text) => {
                json.as_str().map(|s| Value::Text(s.to_string()))
            }
            FieldType::Model(target) => {
                return self
                    .value_to_record(target, json)
                    .map(Value::Record);
            }
        };

        value.ok_or_else(|| ValidationError::WrongKind {
            model: model.ident.clone(),
            field: decl.ident.clone(),
            expected: decl.ty.to_string(),
            found: json_kind_label(json).to_string(),
        })
    }

    ///
    /// SCHEMA DOCUMENTS
    ///

    /// Emit the draft-07 schema document for the named model: `$schema`,
    /// `title`, `type`, then `required` and `properties` in declaration
    /// order. A zero-field model emits neither `required` nor `properties`.
    pub fn schema_document(&self, model: &str) -> Result<Json, ValidationError> {
        let Some(model) = self.registry.get(model) else {
            return Err(ValidationError::UnknownModel {
                model: model.to_string(),
            });
        };

        let mut document = Map::new();
        document.insert("$schema".to_string(), Json::from(SCHEMA_DIALECT));
        document.insert("title".to_string(), Json::from(model.ident.as_str()));
        document.insert("type".to_string(), Json::from("object"));
        self.push_shape(&mut document, model);

        Ok(Json::Object(document))
    }

    /// Compact serialization of `schema_document`, same determinism and key
    /// order.
    pub fn schema_json(&self, model: &str) -> Result<String, ValidationError> {
        let document = self.schema_document(model)?;

        Ok(serde_json::to_string(&document).expect("JSON value trees always serialize"))
    }

    // `required` and `properties` for one model. `required` is omitted when
    // no field is required; both keys are omitted for a zero-field model.
    fn push_shape(&self, object: &mut Map<String, Json>, model: &Model) {
        if model.fields.is_empty() {
            return;
        }

        let required: Vec<Json> = model
            .fields
            .iter()
            .filter(|field| field.required)
            .map(|field| Json::from(field.ident.as_str()))
            .collect();
        if !required.is_empty() {
            object.insert("required".to_string(), Json::Array(required));
        }

        let mut properties = Map::with_capacity(model.fields.len());
        for field in model.fields.iter() {
            properties.insert(field.ident.clone(), self.field_schema(field));
        }
        object.insert("properties".to_string(), Json::Object(properties));
    }

    fn field_schema(&self, field: &Field) -> Json {
        let mut object = Map::new();

        match &field.ty {
            FieldType::Primitive(primitive) => {
                object.insert("type".to_string(), Json::from(primitive.schema_type()));
                if let Some(format) = primitive.schema_format() {
                    object.insert("format".to_string(), Json::from(format));
                }
            }
            FieldType::Model(target) => {
                // registry validation resolved the reference and rejected
                // nesting cycles, so the inline expansion terminates
                let nested = self
                    .registry
                    .get(target)
                    .expect("validated registry resolves model references");
                object.insert("title".to_string(), Json::from(nested.ident.as_str()));
                object.insert("type".to_string(), Json::from("object"));
                self.push_shape(&mut object, nested);
            }
        }

        Json::Object(object)
    }
}

// Stable labels for parsed JSON values in diagnostics.
const fn json_kind_label(json: &Json) -> &'static str {
    match json {
        Json::Array(_) => "array",
        Json::Bool(_) => "boolean",
        Json::Null => "null",
        Json::Number(_) => "number",
        Json::Object(_) => "object",
        Json::String(_) => "string",
    }
}
