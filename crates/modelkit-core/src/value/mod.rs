#[cfg(test)]
mod tests;

use crate::record::Record;
use serde::{Serialize, Serializer};

///
/// Value
///
/// Runtime value held by a record field. Equality is structural and recursive
/// through nested records; `Hash` derives from the same fields as `Eq`, so
/// equal values hash equal.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Int(i64),
    Record(Record),
    Text(String),
}

impl Value {
    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Human label used in wrong-kind diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Record(_) => "record",
            Self::Text(_) => "string",
        }
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        if let Self::Int(v) = self { Some(*v) } else { None }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        if let Self::Record(record) = self {
            Some(record)
        } else {
            None
        }
    }
}

// Wire shape: scalars serialize bare, nested records as objects.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Record(record) => record.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    Record => Record,
    &str   => Text,
    String => Text,
}
