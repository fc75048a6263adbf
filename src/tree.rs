//! Component trees described as TOML documents
//!
//! ```toml
//! component = "kanban_column"
//!
//! [slots]
//! name = "Done"
//! items = [
//!     { component = "ticket_card", slots = { id = 7, summary = "Ship it" } },
//! ]
//! ```
//!
//! Arrays become list slots and inline tables with a `component` key become
//! nested instances. `args` holds positional values (`_0`, `_1`, ...).

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::component::Component;
use crate::registry::{Registry, RegistryError};
use crate::value::SlotValue;

/// Errors that can occur while loading a component tree
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to parse component tree TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("{path}: {source}")]
    Registry {
        path: String,
        #[source]
        source: RegistryError,
    },

    #[error("{path}: {message}")]
    InvalidValue { path: String, message: String },
}

/// One component instance in a tree document
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub component: String,
    #[serde(default)]
    pub args: Vec<toml::Value>,
    #[serde(default)]
    pub slots: BTreeMap<String, toml::Value>,
}

impl Node {
    /// Parse a tree document
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, TreeError> {
        Ok(toml::from_str(content)?)
    }

    /// Instantiate this node and all of its descendants
    pub fn build(&self, registry: &Registry) -> Result<Component, TreeError> {
        self.build_at(registry, &self.component)
    }

    fn build_at(&self, registry: &Registry, path: &str) -> Result<Component, TreeError> {
        let mut builder = registry
            .instantiate(&self.component)
            .map_err(|source| TreeError::Registry {
                path: path.to_string(),
                source,
            })?;

        for (i, arg) in self.args.iter().enumerate() {
            builder = builder.arg(to_slot_value(arg, registry, &format!("{}.args[{}]", path, i))?);
        }
        for (name, value) in &self.slots {
            let value = to_slot_value(value, registry, &format!("{}.{}", path, name))?;
            builder = builder.slot(name.as_str(), value);
        }

        debug!(
            path,
            args = self.args.len(),
            slots = self.slots.len(),
            "Built component"
        );
        Ok(builder.build())
    }
}

fn to_slot_value(value: &toml::Value, registry: &Registry, path: &str) -> Result<SlotValue, TreeError> {
    Ok(match value {
        toml::Value::String(s) => SlotValue::Text(s.clone()),
        toml::Value::Integer(n) => SlotValue::Integer(*n),
        toml::Value::Float(n) => SlotValue::Float(*n),
        toml::Value::Boolean(b) => SlotValue::Bool(*b),
        toml::Value::Datetime(d) => SlotValue::Text(d.to_string()),
        toml::Value::Array(items) => SlotValue::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| to_slot_value(item, registry, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        toml::Value::Table(table) => {
            if !table.contains_key("component") {
                return Err(TreeError::InvalidValue {
                    path: path.to_string(),
                    message: "table values must name a `component`".to_string(),
                });
            }
            let node: Node = value.clone().try_into().map_err(|e: toml::de::Error| {
                TreeError::InvalidValue {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            })?;
            let nested_path = format!("{}<{}>", path, node.component);
            SlotValue::from(node.build_at(registry, &nested_path)?)
        }
    })
}

/// Parse a tree document, build it against `registry` and render it
#[instrument(skip(source, registry), fields(bytes = source.len()))]
pub fn render_document(source: &str, registry: &Registry) -> Result<String, TreeError> {
    let root = Node::from_str(source)?;
    let component = root.build(registry)?;
    Ok(component.render())
}
