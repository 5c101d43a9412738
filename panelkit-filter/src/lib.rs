//! Filter widgets for generated admin panels
//!
//! `panelkit-filter` describes filter inputs declaratively. The host form
//! framework renders them; this crate only decides which inputs exist, which
//! widget renders each one and with which options.
//!
//! - [`ChoiceFilterType`]: an operator selector (contains, not contains,
//!   equals) paired with a configurable value input
//! - [`Translator`]: the seam used for operator labels, with an in-memory
//!   [`MessageCatalog`]
//! - [`FormBuilder`] / [`CompoundField`]: the declarations handed to the host

pub mod choice;
pub mod error;
pub mod form;
pub mod translation;

pub use choice::{ChoiceFilterOptions, ChoiceFilterType, ChoiceOperator, CHOICE_WIDGET};
pub use error::{FilterError, Result};
pub use form::{
    CompoundField, FieldDeclaration, FormBuilder, FormType, ValueStrategy, VALUE_STRATEGY_OPTION,
};
pub use translation::{IdentityTranslator, MessageCatalog, Translator, ADMIN_DOMAIN};
