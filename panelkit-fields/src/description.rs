//! Field descriptions: how one field of a managed entity is shown, edited and
//! filtered.
//!
//! An admin context keeps a collection of descriptions per context:
//!
//! - form: used by the edit form
//! - list: used by the list
//! - filter: used by the list filter
//!
//! Some options are shared across the contexts, others only make sense in one.
//!
//! Shared options:
//! - `type`: the field type, promoted to [`FieldDescription::type_`]
//! - `template`: the template used to render the field
//! - `help`: help text shown next to the field
//! - `label`: label in the form, column title in the list
//! - `code`: name of the accessor used to read the value
//! - `sortable`, `sort_field_mapping`, `sort_parent_association_mappings`
//!
//! Form options:
//! - `field_type`: the widget used to render the field
//! - `field_options`: options given to the widget
//! - `edit`: `list`, `inline` or `standard` (associated admins only)
//!
//! Filter options:
//! - `options`: options given to the filter
//! - `field_type`, `field_options`: the filter's value widget

use tracing::{debug, trace};

use crate::admin::{AdminCode, AdminContext, FieldRef};
use crate::error::{FieldsError, Result};
use crate::naming;
use crate::options::{FieldOptions, TypeTag};
use crate::resolver::{resolve_first, FieldSource, ValueResolver};
use crate::value::{merge_recursive, merge_shallow, OptionMap, Value};

const CODE_OPTION: &str = "code";
const LABEL_OPTION: &str = "label";
const SORTABLE_OPTION: &str = "sortable";
const SORT_FIELD_MAPPING_OPTION: &str = "sort_field_mapping";
const SORT_PARENT_ASSOCIATION_MAPPINGS_OPTION: &str = "sort_parent_association_mappings";

/// Metadata and value access for one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDescription {
    name: String,
    field_name: String,
    type_: Option<TypeTag>,
    mapping_type: Option<TypeTag>,
    association_mapping: Option<Value>,
    field_mapping: Option<Value>,
    parent_association_mappings: Vec<Value>,
    template: Option<String>,
    help: Option<String>,
    options: OptionMap,
    parent: Option<AdminCode>,
    admin: Option<AdminCode>,
    association_admin: Option<AdminCode>,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>) -> Self {
        let mut description = Self::default();
        description.set_name(name);
        description
    }

    /// Set the name. The first time a name is set (while the field name is
    /// still empty) the field name becomes its last dotted segment.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();

        if self.field_name.is_empty() {
            let segment = match self.name.rfind('.') {
                Some(dot) => &self.name[dot + 1..],
                None => &self.name,
            };
            self.field_name = segment.to_string();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_field_name(&mut self, field_name: impl Into<String>) {
        self.field_name = field_name.into();
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Replace the options.
    ///
    /// `type`, `template` and `help` are promoted to their own attributes
    /// and never stored in the option map. A reserved key that is absent
    /// leaves the matching attribute unchanged.
    pub fn set_options(&mut self, options: OptionMap) -> Result<()> {
        let FieldOptions {
            type_,
            template,
            help,
            options,
        } = FieldOptions::from_map(options)?;

        if let Some(type_) = type_ {
            self.set_type(type_);
        }
        if let Some(template) = template {
            self.set_template(template);
        }
        if let Some(help) = help {
            self.set_help(help);
        }
        self.options = options;

        debug!(field = %self.name, options = self.options.len(), "set field options");
        Ok(())
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// The option `name`. A stored `Null` reads as absent.
    pub fn get_option(&self, name: &str) -> Option<&Value> {
        self.options.get(name).filter(|v| !v.is_null())
    }

    /// The option `name`, or `default` when it is absent.
    pub fn get_option_or(&self, name: &str, default: impl Into<Value>) -> Value {
        self.get_option(name)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(name.into(), value.into());
    }

    /// Shallow-merge `options` into the mapping stored at `name`.
    ///
    /// An absent key starts as an empty mapping. Any other non-mapping value
    /// is a [`FieldsError::InvalidState`].
    pub fn merge_option(&mut self, name: &str, options: OptionMap) -> Result<()> {
        let slot = self
            .options
            .entry(name.to_string())
            .or_insert_with(Value::mapping);
        if slot.is_null() {
            *slot = Value::mapping();
        }

        match slot {
            Value::Mapping(existing) => {
                merge_shallow(existing, options);
                trace!(field = %self.name, option = name, "merged option");
                Ok(())
            }
            other => {
                debug!(
                    field = %self.name,
                    option = name,
                    kind = other.kind(),
                    "cannot merge into a non-mapping option"
                );
                Err(FieldsError::InvalidState { key: name.into() })
            }
        }
    }

    /// Recursively merge `options` into the current options, then run the
    /// result through [`set_options`](Self::set_options) so reserved keys in
    /// `options` are promoted again.
    pub fn merge_options(&mut self, options: OptionMap) -> Result<()> {
        let merged = merge_recursive(self.options.clone(), options);
        self.set_options(merged)
    }

    pub fn set_type(&mut self, type_: impl Into<TypeTag>) {
        self.type_ = Some(type_.into());
    }

    pub fn type_(&self) -> Option<&TypeTag> {
        self.type_.as_ref()
    }

    pub fn set_mapping_type(&mut self, mapping_type: impl Into<TypeTag>) {
        self.mapping_type = Some(mapping_type.into());
    }

    pub fn mapping_type(&self) -> Option<&TypeTag> {
        self.mapping_type.as_ref()
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = Some(template.into());
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = Some(help.into());
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn set_parent(&mut self, parent: impl Into<AdminCode>) {
        self.parent = Some(parent.into());
    }

    pub fn parent(&self) -> Option<&AdminCode> {
        self.parent.as_ref()
    }

    pub fn set_admin(&mut self, admin: impl Into<AdminCode>) {
        self.admin = Some(admin.into());
    }

    pub fn admin(&self) -> Option<&AdminCode> {
        self.admin.as_ref()
    }

    pub fn set_association_mapping(&mut self, mapping: impl Into<Value>) {
        self.association_mapping = Some(mapping.into());
    }

    pub fn association_mapping(&self) -> Option<&Value> {
        self.association_mapping.as_ref()
    }

    pub fn set_field_mapping(&mut self, mapping: impl Into<Value>) {
        self.field_mapping = Some(mapping.into());
    }

    pub fn field_mapping(&self) -> Option<&Value> {
        self.field_mapping.as_ref()
    }

    pub fn set_parent_association_mappings(&mut self, mappings: Vec<Value>) {
        self.parent_association_mappings = mappings;
    }

    pub fn parent_association_mappings(&self) -> &[Value] {
        &self.parent_association_mappings
    }

    /// A reference to this description, as stored by linked admin contexts.
    pub fn field_ref(&self) -> FieldRef {
        FieldRef {
            admin: self.admin.clone(),
            field: self.name.clone(),
        }
    }

    /// Link this field to the admin managing the related entity.
    ///
    /// The linked admin is told about this description in the same call,
    /// so both sides always agree.
    pub fn set_association_admin(&mut self, association: &mut dyn AdminContext) {
        association.set_parent_field_description(self.field_ref());
        self.association_admin = Some(association.code().clone());
        debug!(
            field = %self.name,
            association = %association.code(),
            "linked association admin"
        );
    }

    pub fn association_admin(&self) -> Option<&AdminCode> {
        self.association_admin.as_ref()
    }

    pub fn has_association_admin(&self) -> bool {
        self.association_admin.is_some()
    }

    /// The resolvers tried by [`get_field_value`](Self::get_field_value), in order:
    /// the `code` option, `get<Field>`, `is<Field>`, then the bare property.
    pub fn value_resolvers(&self, field_name: &str) -> Vec<ValueResolver> {
        let camelized = naming::camelize(field_name);
        let mut resolvers = Vec::with_capacity(4);

        if let Some(code) = self
            .get_option(CODE_OPTION)
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
        {
            resolvers.push(ValueResolver::Method(code.to_string()));
        }
        resolvers.push(ValueResolver::Method(format!("get{camelized}")));
        resolvers.push(ValueResolver::Method(format!("is{camelized}")));
        resolvers.push(ValueResolver::Property(field_name.to_string()));
        resolvers
    }

    /// Read `field_name` off `object`.
    pub fn get_field_value(&self, object: &dyn FieldSource, field_name: &str) -> Result<Value> {
        let resolvers = self.value_resolvers(field_name);
        resolve_first(&resolvers, object).ok_or_else(|| {
            debug!(
                field = %self.name,
                tried = ?resolvers.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "no value resolved"
            );
            FieldsError::NoValue {
                name: self.name.clone(),
            }
        })
    }

    /// Read this description's own field name off `object`.
    pub fn value(&self, object: &dyn FieldSource) -> Result<Value> {
        self.get_field_value(object, &self.field_name)
    }

    pub fn camelize(property: &str) -> String {
        naming::camelize(property)
    }

    pub fn label(&self) -> Option<&str> {
        self.get_option(LABEL_OPTION).and_then(Value::as_str)
    }

    pub fn is_sortable(&self) -> bool {
        self.get_option(SORTABLE_OPTION)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn sort_field_mapping(&self) -> Option<&Value> {
        self.get_option(SORT_FIELD_MAPPING_OPTION)
    }

    pub fn sort_parent_association_mappings(&self) -> Option<&Value> {
        self.get_option(SORT_PARENT_ASSOCIATION_MAPPINGS_OPTION)
    }
}
