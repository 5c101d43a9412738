//! Admin contexts and the links between them and field descriptions.
//!
//! Admin contexts are referenced by their code, never by pointer. A field
//! description that represents a relation stores the code of the linked
//! admin, and the linked admin stores a [`FieldRef`] back to the field.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::FieldDescriptionCollection;
use crate::description::FieldDescription;
use crate::error::{FieldsError, Result};

/// Code identifying one admin context, e.g. `admin.post`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AdminCode(String);

impl AdminCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdminCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for AdminCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Back-reference from an admin context to the field description it hangs off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// Admin owning the field description, if it was attached to one.
    pub admin: Option<AdminCode>,
    pub field: String,
}

/// The part of an admin context a field description talks to.
pub trait AdminContext {
    fn code(&self) -> &AdminCode;

    /// Record the field description this admin is embedded through.
    fn set_parent_field_description(&mut self, field: FieldRef);
}

/// The three places a field description is used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldContext {
    Form,
    List,
    Filter,
}

/// A minimal admin context: its code, its parent link and one field
/// collection per [`FieldContext`].
#[derive(Debug, Clone)]
pub struct Admin {
    code: AdminCode,
    parent_field_description: Option<FieldRef>,
    form_fields: FieldDescriptionCollection,
    list_fields: FieldDescriptionCollection,
    filter_fields: FieldDescriptionCollection,
}

impl Admin {
    pub fn new(code: impl Into<AdminCode>) -> Self {
        Self {
            code: code.into(),
            parent_field_description: None,
            form_fields: FieldDescriptionCollection::new(),
            list_fields: FieldDescriptionCollection::new(),
            filter_fields: FieldDescriptionCollection::new(),
        }
    }

    pub fn parent_field_description(&self) -> Option<&FieldRef> {
        self.parent_field_description.as_ref()
    }

    pub fn has_parent_field_description(&self) -> bool {
        self.parent_field_description.is_some()
    }

    pub fn fields(&self, context: FieldContext) -> &FieldDescriptionCollection {
        match context {
            FieldContext::Form => &self.form_fields,
            FieldContext::List => &self.list_fields,
            FieldContext::Filter => &self.filter_fields,
        }
    }

    pub fn fields_mut(&mut self, context: FieldContext) -> &mut FieldDescriptionCollection {
        match context {
            FieldContext::Form => &mut self.form_fields,
            FieldContext::List => &mut self.list_fields,
            FieldContext::Filter => &mut self.filter_fields,
        }
    }

    /// Add a field description to one context, stamping this admin as its owner.
    pub fn add_field(&mut self, context: FieldContext, mut field: FieldDescription) {
        field.set_admin(self.code.clone());
        debug!(admin = %self.code, ?context, field = field.name(), "added field description");
        self.fields_mut(context).add(field);
    }

    /// Link the field `name` of `context` to `association`.
    ///
    /// The field stores the association's code and the association records
    /// the field as its parent.
    pub fn associate(
        &mut self,
        context: FieldContext,
        name: &str,
        association: &mut dyn AdminContext,
    ) -> Result<()> {
        let field = self
            .fields_mut(context)
            .get_mut(name)
            .ok_or_else(|| FieldsError::FieldNotFound { name: name.into() })?;
        field.set_association_admin(association);
        Ok(())
    }
}

impl AdminContext for Admin {
    fn code(&self) -> &AdminCode {
        &self.code
    }

    fn set_parent_field_description(&mut self, field: FieldRef) {
        self.parent_field_description = Some(field);
    }
}
