//! Choice filter: an operator selector paired with a value input.
//!
//! The operator selector always offers the same three operators. The value
//! input uses whatever widget `field_type` names, `choice` by default.

use std::sync::Arc;

use panelkit_fields::{merge_shallow, OptionMap, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FilterError, Result};
use crate::form::{FormBuilder, FormType, ValueStrategy, VALUE_STRATEGY_OPTION};
use crate::translation::{Translator, ADMIN_DOMAIN};

/// Widget type of the generic choice input.
pub const CHOICE_WIDGET: &str = "choice";

const FIELD_TYPE_OPTION: &str = "field_type";
const FIELD_OPTIONS_OPTION: &str = "field_options";

/// Comparison offered by the operator selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceOperator {
    Contains = 1,
    NotContains = 2,
    Equals = 3,
}

impl ChoiceOperator {
    /// All operators in selector order.
    pub const ALL: [ChoiceOperator; 3] = [
        ChoiceOperator::Contains,
        ChoiceOperator::NotContains,
        ChoiceOperator::Equals,
    ];

    /// The submitted value of this operator.
    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.value() == value)
    }

    /// Message key of the operator's label.
    pub fn label_key(self) -> &'static str {
        match self {
            ChoiceOperator::Contains => "label_type_contains",
            ChoiceOperator::NotContains => "label_type_not_contains",
            ChoiceOperator::Equals => "label_type_equals",
        }
    }
}

fn default_field_type() -> String {
    CHOICE_WIDGET.to_string()
}

/// Options of [`ChoiceFilterType`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceFilterOptions {
    /// Widget rendering the value input.
    #[serde(default = "default_field_type")]
    pub field_type: String,
    /// Options given to the value widget.
    #[serde(default)]
    pub field_options: OptionMap,
}

impl Default for ChoiceFilterOptions {
    fn default() -> Self {
        Self {
            field_type: default_field_type(),
            field_options: OptionMap::new(),
        }
    }
}

impl ChoiceFilterOptions {
    /// Fill in defaults for the keys `caller` leaves out.
    ///
    /// Caller values always win. `Null` counts as left out and unknown keys
    /// are ignored.
    pub fn resolve(caller: &OptionMap) -> Result<Self> {
        let mut resolved = Self::default();

        match caller.get(FIELD_TYPE_OPTION) {
            None | Some(Value::Null) => {}
            Some(Value::String(field_type)) => resolved.field_type = field_type.clone(),
            Some(_) => {
                return Err(FilterError::InvalidOptions {
                    key: FIELD_TYPE_OPTION.into(),
                    expected: "a string",
                });
            }
        }

        match caller.get(FIELD_OPTIONS_OPTION) {
            None | Some(Value::Null) => {}
            Some(Value::Mapping(field_options)) => resolved.field_options = field_options.clone(),
            Some(_) => {
                return Err(FilterError::InvalidOptions {
                    key: FIELD_OPTIONS_OPTION.into(),
                    expected: "a mapping",
                });
            }
        }

        Ok(resolved)
    }
}

/// The operator + value filter widget.
pub struct ChoiceFilterType {
    translator: Arc<dyn Translator>,
}

impl ChoiceFilterType {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Operators with their translated labels, in selector order.
    pub fn choices(&self) -> Vec<(ChoiceOperator, String)> {
        ChoiceOperator::ALL
            .into_iter()
            .map(|op| {
                let label = self.translator.translate(op.label_key(), &[], ADMIN_DOMAIN);
                (op, label)
            })
            .collect()
    }

    fn operator_options(&self) -> OptionMap {
        let choices: Vec<Value> = self
            .choices()
            .into_iter()
            .map(|(op, label)| {
                [("value", Value::Int(op.value())), ("label", Value::from(label))]
                    .into_iter()
                    .collect()
            })
            .collect();

        let mut options = OptionMap::new();
        options.insert("choices".into(), Value::Sequence(choices));
        options.insert("required".into(), Value::Bool(false));
        options.insert(VALUE_STRATEGY_OPTION.into(), ValueStrategy::Copy.into());
        options
    }
}

impl FormType for ChoiceFilterType {
    fn name(&self) -> &'static str {
        "filter_choice"
    }

    fn build(&self, builder: &mut FormBuilder, options: &OptionMap) -> Result<()> {
        let ChoiceFilterOptions {
            field_type,
            mut field_options,
        } = ChoiceFilterOptions::resolve(options)?;

        if field_type == CHOICE_WIDGET {
            field_options.insert(VALUE_STRATEGY_OPTION.into(), ValueStrategy::Copy.into());
        }

        let mut value_options = OptionMap::new();
        value_options.insert("required".into(), Value::Bool(false));
        merge_shallow(&mut value_options, field_options);

        debug!(
            form = builder.name(),
            field_type = %field_type,
            value_options = value_options.len(),
            "building choice filter"
        );

        builder
            .add("type", CHOICE_WIDGET, self.operator_options())
            .add("value", field_type, value_options);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::{IdentityTranslator, MessageCatalog};

    fn filter() -> ChoiceFilterType {
        ChoiceFilterType::new(Arc::new(IdentityTranslator))
    }

    #[test]
    fn operator_values_and_keys() {
        assert_eq!(ChoiceOperator::ALL.map(ChoiceOperator::value), [1, 2, 3]);
        assert_eq!(ChoiceOperator::from_value(2), Some(ChoiceOperator::NotContains));
        assert_eq!(ChoiceOperator::from_value(4), None);
        assert_eq!(ChoiceOperator::Equals.label_key(), "label_type_equals");
    }

    #[test]
    fn resolve_defaults() {
        let resolved = ChoiceFilterOptions::resolve(&OptionMap::new()).unwrap();
        assert_eq!(resolved, ChoiceFilterOptions::default());
        assert_eq!(resolved.field_type, "choice");
        assert!(resolved.field_options.is_empty());
    }

    #[test]
    fn resolve_keeps_caller_values() {
        let mut caller = OptionMap::new();
        caller.insert("field_type".into(), "text".into());
        caller.insert("field_options".into(), [("required", true)].into_iter().collect());
        caller.insert("unrelated".into(), 1.into());

        let resolved = ChoiceFilterOptions::resolve(&caller).unwrap();
        assert_eq!(resolved.field_type, "text");
        assert_eq!(resolved.field_options["required"], Value::from(true));
    }

    #[test]
    fn resolve_null_counts_as_absent() {
        let mut caller = OptionMap::new();
        caller.insert("field_type".into(), Value::Null);
        let resolved = ChoiceFilterOptions::resolve(&caller).unwrap();
        assert_eq!(resolved.field_type, "choice");
    }

    #[test]
    fn resolve_rejects_wrong_shape() {
        let mut caller = OptionMap::new();
        caller.insert("field_type".into(), 5.into());
        let err = ChoiceFilterOptions::resolve(&caller).unwrap_err();
        assert!(matches!(err, FilterError::InvalidOptions { ref key, .. } if key == "field_type"));
    }

    #[test]
    fn resolve_keeps_field_option_order_and_floats() {
        let choices: Value = [("zebra", "Zebra"), ("apple", "Apple")].into_iter().collect();
        let mut field_options = OptionMap::new();
        field_options.insert("choices".into(), choices);
        field_options.insert("step".into(), Value::Float(f64::INFINITY));
        let mut caller = OptionMap::new();
        caller.insert("field_options".into(), field_options.into());

        let resolved = ChoiceFilterOptions::resolve(&caller).unwrap();
        let keys: Vec<&str> = resolved.field_options["choices"]
            .as_mapping()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
        assert_eq!(resolved.field_options["step"], Value::Float(f64::INFINITY));
    }

    #[test]
    fn choices_use_translator() {
        let mut catalog = MessageCatalog::new();
        catalog.insert(ADMIN_DOMAIN, "label_type_contains", "contains");
        catalog.insert(ADMIN_DOMAIN, "label_type_not_contains", "does not contain");
        catalog.insert(ADMIN_DOMAIN, "label_type_equals", "is equal to");
        let filter = ChoiceFilterType::new(Arc::new(catalog));

        let labels: Vec<String> = filter.choices().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["contains", "does not contain", "is equal to"]);
    }

    #[test]
    fn name_is_stable() {
        assert_eq!(filter().name(), "filter_choice");
    }
}
