//! Component libraries loaded from TOML
//!
//! A library declares component variants as data:
//!
//! ```toml
//! [metadata]
//! name = "zutun"
//!
//! [components.storypoints]
//! template = '<span class="storypoints">{_0}</span>'
//!
//! [components.storypoints.defaults]
//! 0 = "-"
//! ```
//!
//! Integer keys in a `defaults` table address positional slots (`0` is slot
//! `_0`). Default values may be strings, numbers, booleans or arrays of them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::component::{SlotKey, Variant, VariantError};
use crate::value::SlotValue;

/// Errors that can occur when loading or parsing libraries
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Failed to read component library: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse component library TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Variant(#[from] VariantError),
    #[error("unsupported default for slot '{slot}' of component '{component}': {found}")]
    InvalidDefault {
        component: String,
        slot: String,
        found: String,
    },
}

/// A set of component variants with optional metadata
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Optional name for the library
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    variants: Vec<Variant>,
}

/// TOML structure for deserializing libraries
#[derive(Deserialize)]
struct TomlLibrary {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    components: BTreeMap<String, TomlComponent>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlComponent {
    template: String,
    #[serde(default)]
    separator: String,
    #[serde(default)]
    defaults: BTreeMap<String, toml::Value>,
}

/// Views of the zutun task tracker
const BUILTIN_LIBRARY: &str = include_str!("builtin.toml");

impl Library {
    /// Load a library from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LibraryError> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading component library");
        Self::from_str(&content)
    }

    /// Parse a library from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, LibraryError> {
        let parsed: TomlLibrary = toml::from_str(content)?;
        let (name, description) = match parsed.metadata {
            Some(m) => (m.name, m.description),
            None => (None, None),
        };

        let mut variants = Vec::with_capacity(parsed.components.len());
        for (component, def) in parsed.components {
            let mut variant = Variant::new(component.as_str(), def.template)?
                .with_separator(def.separator);
            for (slot, value) in &def.defaults {
                let value = default_value(value).ok_or_else(|| LibraryError::InvalidDefault {
                    component: component.clone(),
                    slot: slot.clone(),
                    found: value.type_str().to_string(),
                })?;
                variant = variant.with_default(slot_key(slot), value);
            }
            variants.push(variant);
        }

        Ok(Self {
            name,
            description,
            variants,
        })
    }

    /// The embedded zutun view library
    pub fn builtin() -> Self {
        Self::from_str(BUILTIN_LIBRARY).expect("Builtin component library should be valid")
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn into_variants(self) -> Vec<Variant> {
        self.variants
    }
}

/// `"2"` addresses positional slot `_2`; anything else is a slot name
fn slot_key(key: &str) -> SlotKey {
    match key.parse::<usize>() {
        Ok(index) => SlotKey::Positional(index),
        Err(_) => SlotKey::Named(key.to_string()),
    }
}

fn default_value(value: &toml::Value) -> Option<SlotValue> {
    match value {
        toml::Value::String(s) => Some(SlotValue::Text(s.clone())),
        toml::Value::Integer(n) => Some(SlotValue::Integer(*n)),
        toml::Value::Float(n) => Some(SlotValue::Float(*n)),
        toml::Value::Boolean(b) => Some(SlotValue::Bool(*b)),
        toml::Value::Datetime(d) => Some(SlotValue::Text(d.to_string())),
        toml::Value::Array(items) => items
            .iter()
            .map(default_value)
            .collect::<Option<Vec<_>>>()
            .map(SlotValue::List),
        toml::Value::Table(_) => None,
    }
}
