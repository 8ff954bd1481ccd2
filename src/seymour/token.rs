//! Line tokens
//!
//! A processed line becomes exactly one [`Token`]. Markup tokens open or close an element;
//! literal tokens carry text that is emitted verbatim and never touches the nesting stack.

use serde::Serialize;
use std::fmt;

/// Marks a Seymour element token as a closing tag
pub const CLOSING_SENTINEL: char = '/';
/// Marks a Seymour line as literal passthrough content
pub const LITERAL_SENTINEL: char = '>';

/// Which dialect the input lines are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Seymour,
    Html,
}

impl Mode {
    /// Map a file extension (without the dot) to a mode, ignoring ASCII case
    pub fn from_extension(extension: &str) -> Option<Mode> {
        if extension.eq_ignore_ascii_case("seymour") {
            Some(Mode::Seymour)
        } else if extension.eq_ignore_ascii_case("html") {
            Some(Mode::Html)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Seymour => "Seymour",
            Mode::Html => "HTML",
        }
    }

    /// Whether this mode produces HTML in addition to CSS
    pub fn emits_html(&self) -> bool {
        matches!(self, Mode::Seymour)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `name="value"` pair attached to an element token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// An element tag parsed from a markup line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementToken {
    /// Tag name as written, including the leading `/` of closing tags
    pub element: String,
    pub is_closing: bool,
    pub attributes: Vec<Attribute>,
    /// Selector-path segment: the element, dotted with any class values
    pub css_class: String,
}

impl ElementToken {
    /// Render the tag body, e.g. `div class="box"`
    pub fn tag_text(&self) -> String {
        let mut text = self.element.clone();
        for attribute in &self.attributes {
            text.push(' ');
            text.push_str(&attribute.to_string());
        }
        text
    }
}

/// One tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Element(ElementToken),
    /// Verbatim text with the sentinel already stripped
    Literal(String),
}

impl Token {
    pub fn is_closing(&self) -> bool {
        matches!(self, Token::Element(el) if el.is_closing)
    }
}
