//! Line Tokenizer
//!
//! Turns one trimmed, non-empty input line into a [`Token`].
//!
//! Seymour lines follow the grammar:
//!
//! ```text
//! <token> [name:value]*
//! ```
//!
//! where `<token>` is an element name, optionally prefixed with `/` (closing tag) or `>`
//! (the whole line is literal text). HTML lines are matched with two regexes: the first tag
//! name on the line, and an optional `class` attribute.

use crate::seymour::error::LineError;
use crate::seymour::token::{
    Attribute, ElementToken, Mode, Token, CLOSING_SENTINEL, LITERAL_SENTINEL,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// First tag on an HTML line; anything after a `>` in the capture is dropped later
static HTML_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(\S*)").unwrap());

/// `class` attribute value: double-quoted, single-quoted or bare
static HTML_CLASS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class=(?:"([^"]*)"|'([^']*)'|([^\s>"']*))"#).unwrap()
});

/// Tokenize a line according to the given mode
pub fn tokenize_line(mode: Mode, line: &str) -> Result<Token, LineError> {
    match mode {
        Mode::Seymour => tokenize_seymour_line(line),
        Mode::Html => tokenize_html_line(line),
    }
}

/// Tokenize a Seymour line.
///
/// Attribute tokens are split at their first `:` so values may themselves contain colons
/// (`href:https://example.com`).
pub fn tokenize_seymour_line(line: &str) -> Result<Token, LineError> {
    let mut parts = line.split_whitespace();
    let tag = parts.next().ok_or_else(|| LineError::new("line is empty"))?;

    if tag.starts_with(LITERAL_SENTINEL) {
        let text = &line.trim_start()[LITERAL_SENTINEL.len_utf8()..];
        return Ok(Token::Literal(text.to_string()));
    }

    let is_closing = tag.starts_with(CLOSING_SENTINEL);
    check_element_name(tag)?;

    let mut css_class = tag.to_string();
    let mut attributes = Vec::new();
    for part in parts {
        let (name, value) = part.split_once(':').ok_or_else(|| {
            LineError::new(format!("attribute '{}' is missing a ':' separator", part))
        })?;
        if name.is_empty() {
            return Err(LineError::new(format!(
                "attribute '{}' has no name",
                part
            )));
        }
        if name == "class" && !value.is_empty() {
            css_class.push('.');
            css_class.push_str(value);
        }
        attributes.push(Attribute::new(name, value));
    }

    Ok(Token::Element(ElementToken {
        element: tag.to_string(),
        is_closing,
        attributes,
        css_class,
    }))
}

/// Tokenize an HTML line by extracting its first tag and `class` attribute.
///
/// A class list (`class="a b"`) becomes a compound selector segment (`div.a.b`).
pub fn tokenize_html_line(line: &str) -> Result<Token, LineError> {
    let captures = HTML_TAG_REGEX
        .captures(line)
        .ok_or_else(|| LineError::new("no HTML tag found"))?;
    let element = captures[1].split('>').next().unwrap_or_default();
    check_element_name(element)?;

    let is_closing = element.starts_with(CLOSING_SENTINEL);
    let mut css_class = element.to_string();
    let mut attributes = Vec::new();

    let class_value = HTML_CLASS_REGEX.captures(line).and_then(|c| {
        c.get(1)
            .or_else(|| c.get(2))
            .or_else(|| c.get(3))
            .map(|m| m.as_str().to_string())
    });
    if let Some(value) = class_value {
        for class in value.split_whitespace() {
            css_class.push('.');
            css_class.push_str(class);
        }
        attributes.push(Attribute::new("class", value));
    }

    Ok(Token::Element(ElementToken {
        element: element.to_string(),
        is_closing,
        attributes,
        css_class,
    }))
}

fn check_element_name(tag: &str) -> Result<(), LineError> {
    let name = tag.strip_prefix(CLOSING_SENTINEL).unwrap_or(tag);
    if name.is_empty() {
        return Err(LineError::new("tag has no element name"));
    }
    Ok(())
}
