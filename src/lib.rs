//! zutun components - view components for the zutun task tracker
//!
//! Views are declared as string templates with `{name}` slots. A
//! [`Component`] fills those slots with text, numbers, lists or other
//! components, and rendering turns the whole tree into one string.
//!
//! # Example
//!
//! ```rust
//! use zutun_components::Registry;
//!
//! let mut registry = Registry::new();
//! registry.define("column", "<h4>{name}</h4><ul>{items}</ul>").unwrap();
//! registry.define("card", "<li>{_0}</li>").unwrap();
//!
//! let cards = ["Write docs", "Ship"]
//!     .into_iter()
//!     .map(|title| registry.instantiate("card").unwrap().arg(title).build())
//!     .collect::<Vec<_>>();
//! let column = registry
//!     .instantiate("column")
//!     .unwrap()
//!     .slot("name", "ToDo")
//!     .slot("items", cards)
//!     .build();
//!
//! assert_eq!(column.render(), "<h4>ToDo</h4><ul><li>Write docs</li><li>Ship</li></ul>");
//! ```

pub mod component;
pub mod error;
pub mod library;
pub mod registry;
pub mod template;
pub mod tree;
pub mod value;

pub use component::{Component, ComponentBuilder, Render, Resolution, SlotKey, Variant, VariantError};
pub use error::TemplateError;
pub use library::{Library, LibraryError};
pub use registry::{Registry, RegistryError};
pub use template::Template;
pub use tree::{render_document, Node, TreeError};
pub use value::SlotValue;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading a component library
    #[error("library error: {0}")]
    Library(#[from] LibraryError),

    /// Error registering components
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error building the component tree
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Start from the built-in zutun views
    pub builtin: bool,
    /// Additional libraries, registered in order
    pub libraries: Vec<Library>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            libraries: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the built-in views
    pub fn with_builtin(mut self, builtin: bool) -> Self {
        self.builtin = builtin;
        self
    }

    /// Add a component library
    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.push(library);
        self
    }

    /// Build the registry described by this configuration
    pub fn registry(&self) -> Result<Registry, RenderError> {
        let mut registry = if self.builtin {
            Registry::builtin()
        } else {
            Registry::new()
        };
        for library in &self.libraries {
            registry.merge_library(library.clone())?;
        }
        Ok(registry)
    }
}

/// Render a component-tree document against the built-in views
///
/// ```rust
/// use zutun_components::render;
///
/// let html = render(r#"
///     component = "storypoints"
///     args = [3]
/// "#).unwrap();
///
/// assert_eq!(html, r#"<span class="storypoints">3</span>"#);
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render a component-tree document with a custom configuration
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let registry = config.registry()?;
    Ok(render_document(source, &registry)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_types_are_send_sync() {
        assert_send_sync::<Component>();
        assert_send_sync::<Variant>();
        assert_send_sync::<Registry>();
    }

    #[test]
    fn test_render_builtin() {
        let html = render(
            r#"
            component = "state_option"
            slots = { state = "Done", selected = "selected" }
        "#,
        )
        .unwrap();
        assert_eq!(html, "<option selected>Done</option>");
    }

    #[test]
    fn test_render_without_builtin_fails_for_builtin_names() {
        let config = RenderConfig::new().with_builtin(false);
        let result = render_with_config(r#"component = "page""#, &config);
        assert!(matches!(result, Err(RenderError::Tree(_))));
    }

    #[test]
    fn test_render_with_extra_library() {
        let library = Library::from_str(
            r#"
[components.badge]
template = "<b>{count}</b>"
[components.badge.defaults]
count = "0"
"#,
        )
        .unwrap();
        let config = RenderConfig::new().with_library(library);
        assert_eq!(
            render_with_config(r#"component = "badge""#, &config).unwrap(),
            "<b>0</b>"
        );
    }

    #[test]
    fn test_library_conflicting_with_builtin() {
        let library = Library::from_str("[components.page]\ntemplate = \"x\"\n").unwrap();
        let config = RenderConfig::new().with_library(library);
        let result = render_with_config(r#"component = "page""#, &config);
        assert!(matches!(
            result,
            Err(RenderError::Registry(RegistryError::Duplicate { .. }))
        ));
    }
}
