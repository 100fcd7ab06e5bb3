//! Element identity and the payloads passed to `construct`.

use std::fmt;

/// Identity of a node (element or text) on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Value of an attribute or native property.
#[derive(Debug, Clone, PartialEq)]
pub enum Prop {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Prop {
    /// String form, as a browser would reflect it into an attribute.
    pub fn to_text(&self) -> String {
        match self {
            Prop::Text(text) => text.clone(),
            Prop::Number(n) => format_number(*n),
            Prop::Bool(b) => b.to_string(),
        }
    }

    /// Truthiness, used for boolean properties such as `checked`.
    pub fn as_bool(&self) -> bool {
        match self {
            Prop::Text(text) => !text.is_empty(),
            Prop::Number(n) => *n != 0.0 && !n.is_nan(),
            Prop::Bool(b) => *b,
        }
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Prop::Text(value.to_string())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Prop::Text(value)
    }
}

impl From<f64> for Prop {
    fn from(value: f64) -> Self {
        Prop::Number(value)
    }
}

impl From<bool> for Prop {
    fn from(value: bool) -> Self {
        Prop::Bool(value)
    }
}

/// A child passed to `construct`: text becomes a text node, elements are appended.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Element(ElementId),
}

impl Child {
    pub fn text(text: impl Into<String>) -> Self {
        Child::Text(text.into())
    }
}

impl From<ElementId> for Child {
    fn from(id: ElementId) -> Self {
        Child::Element(id)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// Format a number the way an input element displays it.
///
/// Integral values drop the fractional part and negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Parse a finite number from input text. Empty or malformed text yields `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
