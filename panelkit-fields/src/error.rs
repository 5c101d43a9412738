//! Error types for field descriptions

use thiserror::Error;

/// Result type for field description operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while configuring or reading a field description
#[derive(Debug, Error)]
pub enum FieldsError {
    /// No accessor, method or property produced a value for the field
    #[error("unable to retrieve the value of `{name}`")]
    NoValue { name: String },

    /// `merge_option` was called on a key whose current value is not a mapping
    #[error("the key `{key}` does not point to a mapping value")]
    InvalidState { key: String },

    /// No field description with this name in the collection
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// A reserved option (`type`, `template`, `help`) had the wrong shape
    #[error("option `{key}` must be {expected}")]
    InvalidOption { key: String, expected: &'static str },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
