use thiserror::Error as ThisError;

///
/// Error
///
/// Both branches are ordinary recoverable value-level errors, surfaced at the
/// point of construction or parsing. Serialization of an already-valid record
/// never fails.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

///
/// ParseError
/// Input text is not well-formed JSON.
///

#[derive(Debug, ThisError)]
#[error("malformed JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);

///
/// ValidationError
/// Well-formed input that does not satisfy the model's field schema.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ValidationError {
    #[error("field `{field}` on model `{model}` was set more than once")]
    DuplicateEntry { model: String, field: String },

    #[error("model `{model}` requires field `{field}`")]
    MissingField { model: String, field: String },

    #[error("field `{field}` on model `{model}` holds a `{found}` record where `{expected}` is declared")]
    ModelMismatch {
        model: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("model `{model}` expects a top-level object, got {found}")]
    NonObject { model: String, found: String },

    #[error("model `{model}` does not declare field `{field}`")]
    UnexpectedField { model: String, field: String },

    #[error("model `{model}` is not registered")]
    UnknownModel { model: String },

    #[error("field `{field}` on model `{model}` expects {expected}, got {found}")]
    WrongKind {
        model: String,
        field: String,
        expected: String,
        found: String,
    },
}
