//! Component instances and their construction

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::template::lexer::positional_name;
use crate::template::Resolved;
use crate::value::SlotValue;

use super::variant::{positional_slot, Variant};
use super::Render;

/// Where a slot's value came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Supplied by the caller
    Explicit(&'a SlotValue),
    /// Taken from the variant's default table
    Default(&'a SlotValue),
    /// Neither; renders as the empty string
    Empty,
}

impl Resolution<'_> {
    pub fn value(&self) -> Option<&SlotValue> {
        match self {
            Resolution::Explicit(v) | Resolution::Default(v) => Some(v),
            Resolution::Empty => None,
        }
    }
}

/// A variant plus concrete slot values
#[derive(Clone, PartialEq)]
pub struct Component {
    variant: Arc<Variant>,
    slots: BTreeMap<String, SlotValue>,
}

impl Component {
    /// Start building an instance of `variant`
    pub fn builder(variant: Arc<Variant>) -> ComponentBuilder {
        ComponentBuilder::new(variant)
    }

    /// Build an instance from positional and named values.
    ///
    /// Positional value `i` is stored as slot `_i`; named values win over
    /// positional ones when the names collide.
    pub fn new<A, N, K, V>(variant: Arc<Variant>, args: A, named: N) -> Self
    where
        A: IntoIterator,
        A::Item: Into<SlotValue>,
        N: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SlotValue>,
    {
        let mut builder = ComponentBuilder::new(variant).args(args);
        for (name, value) in named {
            builder = builder.slot(name, value);
        }
        builder.build()
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// The value the caller supplied for `slot`, if any
    pub fn get(&self, slot: &str) -> Option<&SlotValue> {
        self.slots.get(slot)
    }

    /// Explicitly supplied slots
    pub fn slots(&self) -> &BTreeMap<String, SlotValue> {
        &self.slots
    }

    /// Resolve one slot: explicit value, else the variant default, else empty.
    ///
    /// An explicit [`SlotValue::Missing`] counts as "not supplied". Falsy
    /// values such as `0` or `""` are explicit and never replaced.
    pub fn resolve(&self, slot: &str) -> Resolution<'_> {
        match self.slots.get(slot) {
            Some(value) if !value.is_missing() => Resolution::Explicit(value),
            _ => match self.variant.default_for(slot) {
                Some(value) => Resolution::Default(value),
                None => Resolution::Empty,
            },
        }
    }

    /// Resolve and stringify every slot named by the instance or the default table
    pub fn resolve_all(&self) -> Resolved {
        let separator = self.variant.separator();
        self.slots
            .keys()
            .chain(self.variant.defaults().keys())
            .map(|slot| {
                let text = self
                    .resolve(slot)
                    .value()
                    .map(|v| v.to_text(separator))
                    .unwrap_or_default();
                (slot.clone(), text)
            })
            .collect()
    }

    /// Render this component and everything nested in it
    pub fn render(&self) -> String {
        self.variant.render(&self.resolve_all())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// `<ticket_card id=7 summary="Ship">`
impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.variant.name())?;
        for (slot, value) in &self.slots {
            write!(f, " {}={:?}", slot, value)?;
        }
        f.write_str(">")
    }
}

/// Collects positional and named values for a [`Component`]
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    variant: Arc<Variant>,
    positional: Vec<SlotValue>,
    named: Vec<(String, SlotValue)>,
}

impl ComponentBuilder {
    pub fn new(variant: Arc<Variant>) -> Self {
        Self {
            variant,
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Append a positional value (slot `_0`, `_1`, ...)
    pub fn arg(mut self, value: impl Into<SlotValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SlotValue>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    /// Set a named slot.
    ///
    /// A digit-only name addresses the positional slot it spells, the same
    /// way `{0}` does in a template: `"0"` and `"007"` land on `_0` and `_7`.
    pub fn slot(mut self, name: impl Into<String>, value: impl Into<SlotValue>) -> Self {
        let mut name = name.into();
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            name = positional_name(&name);
        }
        self.named.push((name, value.into()));
        self
    }

    pub fn build(self) -> Component {
        let mut slots: BTreeMap<String, SlotValue> = self
            .positional
            .into_iter()
            .enumerate()
            .map(|(i, value)| (positional_slot(i), value))
            .collect();
        slots.extend(self.named);
        Component {
            variant: self.variant,
            slots,
        }
    }
}
