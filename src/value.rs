//! Slot values and their string conversion

use std::fmt::{self, Write};

use crate::component::Component;

/// A value supplied for a component slot
#[derive(Clone, PartialEq)]
pub enum SlotValue {
    /// The caller explicitly passed "nothing"; defaults still apply
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Joined with the owning variant's separator when rendered
    List(Vec<SlotValue>),
    Component(Box<Component>),
}

impl SlotValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, SlotValue::Missing)
    }

    /// Append the string form of this value to `out`.
    ///
    /// Lists (including nested lists) are joined with `separator`; nested
    /// components render with their own variant's separator. No escaping is
    /// performed.
    pub fn write_to(&self, separator: &str, out: &mut String) {
        match self {
            SlotValue::Missing => {}
            SlotValue::Text(s) => out.push_str(s),
            SlotValue::Integer(n) => {
                let _ = write!(out, "{}", n);
            }
            SlotValue::Float(n) => {
                let _ = write!(out, "{}", n);
            }
            SlotValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            SlotValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(separator);
                    }
                    item.write_to(separator, out);
                }
            }
            SlotValue::Component(component) => out.push_str(&component.render()),
        }
    }

    /// String form of this value, joining lists with `separator`
    pub fn to_text(&self, separator: &str) -> String {
        let mut out = String::new();
        self.write_to(separator, &mut out);
        out
    }
}

// Mirrors a Python-style repr: strings quoted, components as `<name ...>`
impl fmt::Debug for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Missing => f.write_str("None"),
            SlotValue::Text(s) => write!(f, "{:?}", s),
            SlotValue::Integer(n) => write!(f, "{}", n),
            SlotValue::Float(n) => write!(f, "{:?}", n),
            SlotValue::Bool(b) => write!(f, "{}", b),
            SlotValue::List(items) => f.debug_list().entries(items).finish(),
            SlotValue::Component(c) => write!(f, "{:?}", c),
        }
    }
}

impl From<&str> for SlotValue {
    fn from(s: &str) -> Self {
        SlotValue::Text(s.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(s: String) -> Self {
        SlotValue::Text(s)
    }
}

impl From<&String> for SlotValue {
    fn from(s: &String) -> Self {
        SlotValue::Text(s.clone())
    }
}

impl From<i64> for SlotValue {
    fn from(n: i64) -> Self {
        SlotValue::Integer(n)
    }
}

impl From<i32> for SlotValue {
    fn from(n: i32) -> Self {
        SlotValue::Integer(n.into())
    }
}

impl From<u32> for SlotValue {
    fn from(n: u32) -> Self {
        SlotValue::Integer(n.into())
    }
}

impl From<usize> for SlotValue {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => SlotValue::Integer(n),
            Err(_) => SlotValue::Text(n.to_string()),
        }
    }
}

impl From<f64> for SlotValue {
    fn from(n: f64) -> Self {
        SlotValue::Float(n)
    }
}

impl From<bool> for SlotValue {
    fn from(b: bool) -> Self {
        SlotValue::Bool(b)
    }
}

impl From<Component> for SlotValue {
    fn from(c: Component) -> Self {
        SlotValue::Component(Box::new(c))
    }
}

impl<T: Into<SlotValue>> From<Vec<T>> for SlotValue {
    fn from(items: Vec<T>) -> Self {
        SlotValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// `None` is the explicit "missing" marker
impl<T: Into<SlotValue>> From<Option<T>> for SlotValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SlotValue::Missing,
        }
    }
}
