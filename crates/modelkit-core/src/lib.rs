pub mod codec;
pub mod error;
pub mod record;
pub mod value;

pub use codec::Codec;
pub use error::{Error, ParseError, ValidationError};
pub use record::{Record, RecordBuilder};
pub use value::Value;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        codec::Codec,
        error::{Error, ParseError, ValidationError},
        record::{Record, RecordBuilder},
        value::Value,
    };
    pub use modelkit_schema::{
        build::{BuildError, Registry, RegistryBuilder},
        node::{Field, FieldList, Model},
        types::{FieldType, Primitive},
    };
}
