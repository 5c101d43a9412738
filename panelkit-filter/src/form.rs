//! Declarative output for the host form framework.
//!
//! Widgets do not render anything. They describe the inputs they need as
//! [`FieldDeclaration`]s collected by a [`FormBuilder`]; the host form
//! framework turns the resulting [`CompoundField`] into real inputs.

use std::fmt;

use panelkit_fields::{OptionMap, Value};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Option key naming the selection strategy of a choice widget.
pub const VALUE_STRATEGY_OPTION: &str = "value_strategy";

/// How a choice widget hands out the selected value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ValueStrategy {
    /// Selecting an option yields a fresh copy of its value.
    Copy,
    /// Selecting an option yields the option's value itself.
    Reference,
}

impl ValueStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueStrategy::Copy => "copy",
            ValueStrategy::Reference => "reference",
        }
    }
}

impl fmt::Display for ValueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ValueStrategy> for Value {
    fn from(strategy: ValueStrategy) -> Self {
        Value::from(strategy.as_str())
    }
}

/// One input: its name, the widget type that renders it and the widget options.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldDeclaration {
    pub name: String,
    pub widget: String,
    pub options: OptionMap,
}

/// Inputs declared under one compound field name, in declaration order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompoundField {
    pub name: String,
    pub children: Vec<FieldDeclaration>,
}

impl CompoundField {
    pub fn get(&self, name: &str) -> Option<&FieldDeclaration> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Collects declarations for one compound field.
#[derive(Debug, Clone)]
pub struct FormBuilder {
    name: String,
    children: Vec<FieldDeclaration>,
}

impl FormBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare an input. Declarations chain:
    /// `builder.add("type", "choice", a).add("value", "text", b)`.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        widget: impl Into<String>,
        options: OptionMap,
    ) -> &mut Self {
        self.children.push(FieldDeclaration {
            name: name.into(),
            widget: widget.into(),
            options,
        });
        self
    }

    pub fn children(&self) -> &[FieldDeclaration] {
        &self.children
    }

    pub fn finish(self) -> CompoundField {
        CompoundField {
            name: self.name,
            children: self.children,
        }
    }
}

/// A widget type that knows how to declare its inputs.
pub trait FormType {
    /// Name the host form framework registers the type under.
    fn name(&self) -> &'static str;

    /// Declare this type's inputs on `builder`, configured by `options`.
    fn build(&self, builder: &mut FormBuilder, options: &OptionMap) -> Result<()>;

    /// Build a fresh compound field named `name`.
    fn build_compound(&self, name: &str, options: &OptionMap) -> Result<CompoundField> {
        let mut builder = FormBuilder::new(name);
        self.build(&mut builder, options)?;
        Ok(builder.finish())
    }
}
