//! Error types for filter widgets

use thiserror::Error;

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while building filter widgets
#[derive(Debug, Error)]
pub enum FilterError {
    /// A caller option did not fit the widget's option shape
    #[error("invalid filter option `{key}`: expected {expected}")]
    InvalidOptions { key: String, expected: &'static str },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
