//! Component variants: a template, a list separator and a default table

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::error::TemplateError;
use crate::template::{Resolved, Template};
use crate::value::SlotValue;

use super::Render;

/// A variant whose template failed to parse
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed template for component '{name}': {}", format_template_errors(.errors))]
pub struct VariantError {
    pub name: String,
    pub template: String,
    pub errors: Vec<TemplateError>,
}

impl VariantError {
    /// Render every template error as an ariadne report
    pub fn format(&self, filename: &str) -> String {
        self.errors
            .iter()
            .map(|e| e.format(&self.template, filename))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn format_template_errors(errors: &[TemplateError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Name of the slot that holds positional argument `index`
pub fn positional_slot(index: usize) -> String {
    format!("_{}", index)
}

/// Key of a default table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Named(String),
    /// Positional index, stored as slot `_index`
    Positional(usize),
}

impl SlotKey {
    pub fn slot_name(&self) -> String {
        match self {
            SlotKey::Named(name) => name.clone(),
            SlotKey::Positional(index) => positional_slot(*index),
        }
    }
}

impl From<&str> for SlotKey {
    fn from(name: &str) -> Self {
        SlotKey::Named(name.to_string())
    }
}

impl From<String> for SlotKey {
    fn from(name: String) -> Self {
        SlotKey::Named(name)
    }
}

impl From<usize> for SlotKey {
    fn from(index: usize) -> Self {
        SlotKey::Positional(index)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slot_name())
    }
}

/// A kind of renderable component.
///
/// Variants are defined once (usually through a [`Registry`](crate::Registry))
/// and never change afterwards; instances share them through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    name: String,
    template: Template,
    separator: String,
    defaults: BTreeMap<String, SlotValue>,
}

impl Variant {
    /// Define a variant, parsing its template
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Result<Self, VariantError> {
        let name = name.into();
        let template = template.into();
        match Template::parse(template.as_str()) {
            Ok(parsed) => Ok(Self {
                name,
                template: parsed,
                separator: String::new(),
                defaults: BTreeMap::new(),
            }),
            Err(errors) => Err(VariantError {
                name,
                template,
                errors,
            }),
        }
    }

    /// Set the string placed between elements of list-valued slots
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Add a fallback used when an instance supplies no value for `key`
    pub fn with_default(mut self, key: impl Into<SlotKey>, value: impl Into<SlotValue>) -> Self {
        self.defaults.insert(key.into().slot_name(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn defaults(&self) -> &BTreeMap<String, SlotValue> {
        &self.defaults
    }

    /// Get the default value for a slot
    pub fn default_for(&self, slot: &str) -> Option<&SlotValue> {
        self.defaults.get(slot)
    }
}

impl Render for Variant {
    fn render(&self, resolved: &Resolved) -> String {
        self.template.substitute(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults_and_separator() {
        let v = Variant::new("card", "{id}: {details}")
            .unwrap()
            .with_separator(" · ")
            .with_default("details", "none")
            .with_default(1usize, "second");

        assert_eq!(v.name(), "card");
        assert_eq!(v.separator(), " · ");
        assert_eq!(v.default_for("details"), Some(&SlotValue::from("none")));
        assert_eq!(v.default_for("_1"), Some(&SlotValue::from("second")));
        assert_eq!(v.default_for("id"), None);
    }

    #[test]
    fn test_malformed_template_is_rejected() {
        let err = Variant::new("broken", r#"{{"state": "{name}""#).unwrap_err();
        assert_eq!(err.name, "broken");
        assert_eq!(err.errors.len(), 1);
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_render_through_trait() {
        let v = Variant::new("option", "<option {selected}>{state}</option>").unwrap();
        let mut resolved = Resolved::new();
        resolved.insert("state".to_string(), "Done".to_string());
        assert_eq!(v.render(&resolved), "<option >Done</option>");
    }

    #[test]
    fn test_slot_key_names() {
        assert_eq!(SlotKey::from(3usize).slot_name(), "_3");
        assert_eq!(SlotKey::from("count").to_string(), "count");
    }
}
