//! ModelKit — schema-first typed records with JSON and JSON Schema codecs.
//!
//! This is the public meta-crate. Downstream users depend on **modelkit** only.
//!
//! It re-exports the stable public API from:
//!   - `modelkit-core`   (runtime values, records, codec)
//!   - `modelkit-schema` (schema definitions, registry)

pub use modelkit_core as core;
pub use modelkit_schema as schema;

pub use modelkit_core::{Codec, Error, Record, Value};
pub use modelkit_schema::build::{Registry, RegistryBuilder};

//
// Prelude
//

pub mod prelude {
    pub use modelkit_core::prelude::*;
}
