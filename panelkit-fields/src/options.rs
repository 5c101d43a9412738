//! Reserved-key extraction for field options.
//!
//! `type`, `template` and `help` are promoted out of the open option map
//! into typed attributes. Everything else stays in the map untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{FieldsError, Result};
use crate::value::{OptionMap, Value};

pub const TYPE_KEY: &str = "type";
pub const TEMPLATE_KEY: &str = "template";
pub const HELP_KEY: &str = "help";

/// A field type tag. Opaque to this crate: rendering collaborators decide
/// what a tag means.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TypeTag {
    Code(i64),
    Name(String),
}

impl TypeTag {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            TypeTag::Name(name) => Some(name),
            TypeTag::Code(_) => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Code(code) => write!(f, "{code}"),
            TypeTag::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::Name(name.to_string())
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        TypeTag::Name(name)
    }
}

impl From<i64> for TypeTag {
    fn from(code: i64) -> Self {
        TypeTag::Code(code)
    }
}

impl From<TypeTag> for Value {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Code(code) => Value::Int(code),
            TypeTag::Name(name) => Value::String(name),
        }
    }
}

/// An option map split into its reserved attributes and the open remainder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub type_: Option<TypeTag>,
    pub template: Option<String>,
    pub help: Option<String>,
    pub options: OptionMap,
}

impl FieldOptions {
    /// Split `options`, removing the reserved keys from the open map.
    ///
    /// A reserved key holding `Null` is dropped without being promoted.
    pub fn from_map(mut options: OptionMap) -> Result<Self> {
        let type_ = match options.shift_remove(TYPE_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(TypeTag::Name(name)),
            Some(Value::Int(code)) => Some(TypeTag::Code(code)),
            Some(_) => {
                return Err(FieldsError::InvalidOption {
                    key: TYPE_KEY.into(),
                    expected: "a string or an integer",
                })
            }
        };
        let template = take_string(&mut options, TEMPLATE_KEY)?;
        let help = take_string(&mut options, HELP_KEY)?;

        trace!(
            type_ = ?type_,
            template = ?template,
            has_help = help.is_some(),
            remaining = options.len(),
            "split field options"
        );

        Ok(Self {
            type_,
            template,
            help,
            options,
        })
    }
}

fn take_string(options: &mut OptionMap, key: &str) -> Result<Option<String>> {
    match options.shift_remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(FieldsError::InvalidOption {
            key: key.into(),
            expected: "a string",
        }),
    }
}
