use crate::prelude::*;
use derive_more::{Display, FromStr};
use std::fmt;

///
/// Primitive
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Int64,
    Text,
}

impl Primitive {
    /// JSON Schema `type` keyword for this primitive.
    #[must_use]
    pub const fn schema_type(self) -> &'static str {
        match self {
            Self::Int64 => "integer",
            Self::Text => "string",
        }
    }

    /// JSON Schema `format` keyword, where the draft-07 mapping carries one.
    #[must_use]
    pub const fn schema_format(self) -> Option<&'static str> {
        match self {
            Self::Int64 => Some("int64"),
            Self::Text => None,
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int64)
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

///
/// FieldType
///
/// Either a primitive kind or a nested record owned by value.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum FieldType {
    Model(String),
    Primitive(Primitive),
}

impl FieldType {
    #[must_use]
    pub const fn as_primitive(&self) -> Option<Primitive> {
        if let Self::Primitive(primitive) = self {
            Some(*primitive)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_model(&self) -> Option<&str> {
        if let Self::Model(ident) = self {
            Some(ident.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }
}

impl From<Primitive> for FieldType {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

// Display is the label used in wrong-kind diagnostics.
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(ident) => write!(f, "model `{ident}`"),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
        }
    }
}
