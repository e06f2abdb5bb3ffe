//! Error types for the command line engine.
//!
//! Errors here are fatal: they describe a mistake in how the options structure
//! was declared, or a default value that cannot be used. Problems with the
//! user's input are never raised as errors. They end up as lines in the
//! engine's diagnostic log and a `false` result from parsing.

use thiserror::Error;

/// A malformed options declaration, detected while building the metadata table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// The structure declares no options at all
    #[error("Couldn't get parameters declaration in {type_name}. Use OptionDeclaration to declare parameters.")]
    NoOptions { type_name: String },

    /// Some declared options point at fields without a read/write accessor pair
    #[error("Couldn't get property descriptors for fields of [{}] of {type_name}. Make sure that you provided necessary getters and setters", .fields.join(", "))]
    MissingAccessors {
        type_name: String,
        fields: Vec<String>,
    },

    /// Two options share a short or long name
    #[error("Duplicate declaration of parameter '{name}', see fields {first}, {second}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// The same field is declared by more than one option
    #[error("Duplicate declaration of field '{field}'")]
    DuplicateField { field: String },
}

/// A raw token that could not be converted into a typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// The token is not a valid literal for the requested kind
    #[error("Invalid {kind} value '{token}': {reason}")]
    InvalidValue {
        kind: &'static str,
        token: String,
        reason: String,
    },

    /// The token does not name any variant of the enumeration
    #[error("No variant '{token}' in {type_name}")]
    UnknownVariant {
        type_name: &'static str,
        token: String,
    },

    /// The declared type has no coercion rule
    #[error("Unsupported parameter type {0}")]
    UnsupportedType(&'static str),
}

/// A read or write through the options structure's accessors failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The structure has no accessor for the named field
    #[error("No accessor for field '{0}'")]
    UnknownField(String),

    /// The value's kind does not fit the field's type
    #[error("Couldn't set member field of '{field}': expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Main error type for engine construction and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// A declared default value failed to coerce
    #[error("Invalid default value for parameter '{option}': {source}")]
    Default {
        option: String,
        #[source]
        source: CoercionError,
    },

    #[error("Unsupported parameter type {0}")]
    UnsupportedType(&'static str),

    #[error(transparent)]
    Access(#[from] AccessError),

    /// An option name was given as the last token with no value after it
    #[error("Parameter '{0}' has no value")]
    TrailingToken(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
