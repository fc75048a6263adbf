//! Parsed form of a component template

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output unchanged
    Literal(String),
    /// `{name}`: replaced by the resolved value of slot `name`
    Slot(String),
    /// `{{ ... }}`: emitted as a literal `{`, the inner segments, then `}`
    Braced(Vec<Segment>),
}

impl Segment {
    /// Push slot names found in this segment (depth-first, source order)
    pub(crate) fn collect_slots<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Segment::Literal(_) => {}
            Segment::Slot(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            Segment::Braced(inner) => {
                for seg in inner {
                    seg.collect_slots(out);
                }
            }
        }
    }
}
