//! Component templates
//!
//! A template is static text with `{name}` placeholders. Literal braces are
//! written doubled: `{{` renders as `{` and `}}` renders as `}`. Escaped pairs
//! must balance, which lets templates embed structured attribute values:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use zutun_components::template::Template;
//!
//! let template = Template::parse(r#"hx-drop='{{"state": "{name}"}}'"#).unwrap();
//! let mut values = BTreeMap::new();
//! values.insert("name".to_string(), "Blocked".to_string());
//!
//! assert_eq!(template.substitute(&values), r#"hx-drop='{"state": "Blocked"}'"#);
//! ```

mod ast;
mod grammar;
pub mod lexer;

use std::collections::BTreeMap;

use ast::Segment;

use crate::error::TemplateError;

/// Fully resolved slot values, keyed by slot name
pub type Resolved = BTreeMap<String, String>;

/// A parsed, immutable template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text, reporting every syntax error found
    pub fn parse(source: impl Into<String>) -> Result<Self, Vec<TemplateError>> {
        let source = source.into();
        let segments = grammar::parse(&source)?;
        Ok(Self { source, segments })
    }

    /// The original template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of first appearance, without duplicates
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for seg in &self.segments {
            seg.collect_slots(&mut names);
        }
        names
    }

    /// Substitute resolved values into the template.
    ///
    /// Placeholders without an entry in `values` become the empty string;
    /// entries the template never references are ignored.
    pub fn substitute(&self, values: &Resolved) -> String {
        let mut out = String::with_capacity(self.source.len());
        write_segments(&self.segments, values, &mut out);
        out
    }
}

fn write_segments(segments: &[Segment], values: &Resolved, out: &mut String) {
    for seg in segments {
        match seg {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot(name) => {
                if let Some(value) = values.get(name) {
                    out.push_str(value);
                }
            }
            Segment::Braced(inner) => {
                out.push('{');
                write_segments(inner, values, out);
                out.push('}');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> Resolved {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_simple() {
        let t = Template::parse("<b>{count}</b>").unwrap();
        assert_eq!(t.substitute(&values(&[("count", "5")])), "<b>5</b>");
    }

    #[test]
    fn test_missing_placeholder_is_empty() {
        let t = Template::parse("<h4>{name}</h4>{items}").unwrap();
        assert_eq!(t.substitute(&Resolved::new()), "<h4></h4>");
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let t = Template::parse("{a}").unwrap();
        assert_eq!(t.substitute(&values(&[("a", "x"), ("b", "y")])), "x");
    }

    #[test]
    fn test_escaped_braces_without_placeholders() {
        let t = Template::parse("{{}} and {{ x }}").unwrap();
        assert_eq!(t.substitute(&Resolved::new()), "{} and { x }");
    }

    #[test]
    fn test_two_escaped_pairs_with_placeholders() {
        let t = Template::parse(r#"<a hx-drag='{{"ticket": "{id}"}}' hx-drop='{{"state": "{state}"}}'>"#)
            .unwrap();
        assert_eq!(
            t.substitute(&values(&[("id", "7"), ("state", "Done")])),
            r#"<a hx-drag='{"ticket": "7"}' hx-drop='{"state": "Done"}'>"#
        );
    }

    #[test]
    fn test_positional_alias() {
        let t = Template::parse("<p><strong>{0}:</strong> {_1}</p>").unwrap();
        assert_eq!(
            t.substitute(&values(&[("_0", "Assignee"), ("_1", "Jonathan")])),
            "<p><strong>Assignee:</strong> Jonathan</p>"
        );
    }

    #[test]
    fn test_placeholders_in_order_without_duplicates() {
        let t = Template::parse("{id} {{{name}}} {id} {details}").unwrap();
        assert_eq!(t.placeholders(), vec!["id", "name", "details"]);
    }

    #[test]
    fn test_source_is_kept() {
        let t = Template::parse("{{x}}").unwrap();
        assert_eq!(t.source(), "{{x}}");
    }
}
