//! Translation of widget labels.
//!
//! Widgets only see the [`Translator`] trait. [`MessageCatalog`] is an
//! in-memory implementation backed by YAML files shaped as
//! `domain -> key -> message`:
//!
//! ```yaml
//! PanelkitAdmin:
//!   label_type_contains: contains
//!   label_type_not_contains: does not contain
//!   label_type_equals: is equal to
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::Result;

/// Message domain of the admin's own labels.
pub const ADMIN_DOMAIN: &str = "PanelkitAdmin";

/// Turns a message key into display text.
pub trait Translator: Send + Sync {
    /// Translate `key` in `domain`, replacing each parameter name found in
    /// the message with its value.
    fn translate(&self, key: &str, parameters: &[(&str, &str)], domain: &str) -> String;
}

/// Returns every key untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str, parameters: &[(&str, &str)], _domain: &str) -> String {
        substitute(key, parameters)
    }
}

/// Messages grouped by domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageCatalog {
    domains: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let domains: HashMap<String, HashMap<String, String>> = serde_yaml_ng::from_str(yaml)?;
        Ok(Self { domains })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            domains = catalog.domains.len(),
            "loaded message catalog"
        );
        Ok(catalog)
    }

    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Add every message of `other`, overwriting existing keys.
    pub fn extend(&mut self, other: MessageCatalog) {
        for (domain, messages) in other.domains {
            self.domains.entry(domain).or_default().extend(messages);
        }
    }

    pub fn get(&self, domain: &str, key: &str) -> Option<&str> {
        self.domains
            .get(domain)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str, parameters: &[(&str, &str)], domain: &str) -> String {
        match self.get(domain, key) {
            Some(message) => substitute(message, parameters),
            None => {
                trace!(key, domain, "missing translation");
                substitute(key, parameters)
            }
        }
    }
}

/// Replace each parameter name in `message`. Empty names match nothing.
fn substitute(message: &str, parameters: &[(&str, &str)]) -> String {
    parameters
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .fold(message.to_string(), |acc, (name, value)| acc.replace(name, value))
}
