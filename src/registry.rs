//! Registry of component variants, keyed by name

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::component::{ComponentBuilder, Variant, VariantError};
use crate::library::Library;

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Component not found in registry
    #[error("component not found: {name}")]
    NotFound { name: String },

    /// Duplicate component definition
    #[error("duplicate component definition: {name}")]
    Duplicate { name: String },

    /// Template failed to parse
    #[error(transparent)]
    Variant(#[from] VariantError),
}

/// Immutable-after-startup mapping from variant name to definition.
///
/// Build it once, then share it (and the `Arc<Variant>`s it hands out)
/// across threads; nothing in it changes while rendering.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    variants: HashMap<String, Arc<Variant>>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the zutun application views
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for variant in Library::builtin().into_variants() {
            registry.variants.insert(variant.name().to_string(), Arc::new(variant));
        }
        registry
    }

    /// Register a variant definition
    pub fn register(&mut self, variant: Variant) -> Result<Arc<Variant>, RegistryError> {
        if self.variants.contains_key(variant.name()) {
            return Err(RegistryError::Duplicate {
                name: variant.name().to_string(),
            });
        }
        debug!(
            component = variant.name(),
            slots = ?variant.template().placeholders(),
            "Registering component"
        );
        let variant = Arc::new(variant);
        self.variants
            .insert(variant.name().to_string(), Arc::clone(&variant));
        Ok(variant)
    }

    /// Parse `template` and register it under `name` with no separator or defaults
    pub fn define(&mut self, name: &str, template: &str) -> Result<Arc<Variant>, RegistryError> {
        self.register(Variant::new(name, template)?)
    }

    /// Register every variant of a library
    pub fn merge_library(&mut self, library: Library) -> Result<(), RegistryError> {
        debug!(
            library = library.name.as_deref().unwrap_or("<unnamed>"),
            components = library.variants().len(),
            "Merging component library"
        );
        for variant in library.into_variants() {
            self.register(variant)?;
        }
        Ok(())
    }

    /// Get a variant by name
    pub fn get(&self, name: &str) -> Option<Arc<Variant>> {
        self.variants.get(name).cloned()
    }

    /// Check if a variant exists
    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// All variant names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variants.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Start building an instance of the named variant
    pub fn instantiate(&self, name: &str) -> Result<ComponentBuilder, RegistryError> {
        self.get(name)
            .map(ComponentBuilder::new)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = Registry::new();
        registry.define("box", "<div>{body}</div>").expect("Should register");
        assert!(registry.contains("box"));
        assert!(registry.get("box").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_duplicate_error() {
        let mut registry = Registry::new();
        registry
            .define("box", "{a}")
            .expect("First register should succeed");
        let result = registry.define("box", "{b}");
        assert!(matches!(result, Err(RegistryError::Duplicate { .. })));
    }

    #[test]
    fn test_registry_malformed_template() {
        let mut registry = Registry::new();
        let result = registry.define("bad", "{{ unclosed");
        assert!(matches!(result, Err(RegistryError::Variant(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_instantiate_unknown() {
        let registry = Registry::new();
        let result = registry.instantiate("ghost");
        assert!(matches!(result, Err(RegistryError::NotFound { name }) if name == "ghost"));
    }

    #[test]
    fn test_instantiate_and_render() {
        let mut registry = Registry::new();
        registry.define("select_button", r#"<button hx-post="/tickets/{id}/select">Select</button>"#)
            .unwrap();
        let button = registry
            .instantiate("select_button")
            .unwrap()
            .slot("id", 12i64)
            .build();
        assert_eq!(
            button.render(),
            r#"<button hx-post="/tickets/12/select">Select</button>"#
        );
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = Registry::new();
        registry.define("b", "").unwrap();
        registry.define("a", "").unwrap();
        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_builtin_has_views() {
        let registry = Registry::builtin();
        for name in ["page", "kanban", "kanban_column", "ticket_card", "storypoints"] {
            assert!(registry.contains(name), "missing builtin {}", name);
        }
    }
}
