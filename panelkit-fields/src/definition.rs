//! YAML definitions for field descriptions and admin contexts.
//!
//! ```yaml
//! code: admin.post
//! list:
//!   - name: title
//!     options: { label: Title, sortable: true }
//!   - name: author.name
//!     options: { type: text, code: getAuthorName }
//! filter:
//!   - name: title
//!     options: { field_type: text }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::admin::{Admin, FieldContext};
use crate::description::FieldDescription;
use crate::error::Result;
use crate::options::TypeTag;
use crate::value::OptionMap;

/// Serialized form of one field description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_type: Option<TypeTag>,
    #[serde(default, skip_serializing_if = "OptionMap::is_empty")]
    pub options: OptionMap,
}

impl FieldDefinition {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }
}

/// Serialized form of an admin context and its three field lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminDefinition {
    pub code: String,
    #[serde(default)]
    pub form: Vec<FieldDefinition>,
    #[serde(default)]
    pub list: Vec<FieldDefinition>,
    #[serde(default)]
    pub filter: Vec<FieldDefinition>,
}

impl AdminDefinition {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let def = Self::from_yaml(&content)?;
        debug!(path = %path.display(), code = %def.code, "loaded admin definition");
        Ok(def)
    }
}

/// Read a YAML list of field definitions.
pub fn load_definitions(path: &Path) -> Result<Vec<FieldDefinition>> {
    let content = fs::read_to_string(path)?;
    let defs: Vec<FieldDefinition> = serde_yaml_ng::from_str(&content)?;
    debug!(path = %path.display(), count = defs.len(), "loaded field definitions");
    Ok(defs)
}

impl FieldDescription {
    /// Build a description from its definition. An explicit `field_name`
    /// wins over the one derived from `name`.
    pub fn from_definition(def: FieldDefinition) -> Result<Self> {
        let mut description = FieldDescription::default();
        if let Some(field_name) = def.field_name {
            description.set_field_name(field_name);
        }
        description.set_name(def.name);
        if let Some(mapping_type) = def.mapping_type {
            description.set_mapping_type(mapping_type);
        }
        description.set_options(def.options)?;
        Ok(description)
    }
}

impl Admin {
    /// Build an admin context with every field of `def` attached.
    pub fn from_definition(def: AdminDefinition) -> Result<Self> {
        let mut admin = Admin::new(def.code);
        for (context, fields) in [
            (FieldContext::Form, def.form),
            (FieldContext::List, def.list),
            (FieldContext::Filter, def.filter),
        ] {
            for field in fields {
                admin.add_field(context, FieldDescription::from_definition(field)?);
            }
        }
        Ok(admin)
    }
}
