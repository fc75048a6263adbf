//! The view-component model
//!
//! A [`Variant`] is a fixed template with a list separator and a default
//! table. A [`Component`] is one instance of a variant with concrete slot
//! values, which may themselves be components. Rendering walks that tree
//! top-down and produces a single string.

mod instance;
mod variant;

pub use instance::{Component, ComponentBuilder, Resolution};
pub use variant::{positional_slot, SlotKey, Variant, VariantError};

use crate::template::Resolved;

/// Produce output from fully resolved slot values
pub trait Render {
    fn render(&self, resolved: &Resolved) -> String;
}
