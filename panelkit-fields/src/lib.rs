//! Field descriptions for generated admin panels
//!
//! `panelkit-fields` holds the per-field metadata an admin context uses to
//! render a field in its form, list and filter views.
//!
//! # Architecture
//!
//! - **Open options, typed attributes**: options are a free-form ordered map;
//!   `type`, `template` and `help` are promoted to typed attributes
//! - **Explicit merging**: shallow (`merge_option`) and recursive
//!   (`merge_options`) merges over a tagged [`Value`]
//! - **Pluggable value access**: objects implement [`FieldSource`]; a
//!   description tries an ordered list of [`ValueResolver`]s
//! - **Handles, not pointers**: admin contexts are referenced by [`AdminCode`]

pub mod admin;
pub mod collection;
pub mod definition;
pub mod description;
pub mod error;
pub mod naming;
pub mod options;
pub mod resolver;
pub mod value;

pub use admin::{Admin, AdminCode, AdminContext, FieldContext, FieldRef};
pub use collection::FieldDescriptionCollection;
pub use definition::{load_definitions, AdminDefinition, FieldDefinition};
pub use description::FieldDescription;
pub use error::{FieldsError, Result};
pub use naming::camelize;
pub use options::{FieldOptions, TypeTag};
pub use resolver::{resolve_first, Accessors, Bound, FieldSource, ValueResolver};
pub use value::{merge_recursive, merge_shallow, merge_values, OptionMap, Value};
