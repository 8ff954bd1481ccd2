//! Selector Deduplicator
//!
//! An insertion-ordered set of CSS rule scaffolds (`"<selector path> {}"`). The first time a
//! nesting path is seen it is recorded; later sightings are ignored.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Ordered, duplicate-free list of CSS rule scaffolds
#[derive(Debug, Clone, Default)]
pub struct SelectorList {
    rules: Vec<String>,
    seen: HashSet<String>,
    keep_empty_rule: bool,
}

impl SelectorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record the rule for an empty nesting path (as a blank entry)
    pub fn keeping_empty_rule(mut self, keep: bool) -> Self {
        self.keep_empty_rule = keep;
        self
    }

    /// Offer the rule for `path`; returns true when it was newly recorded
    pub fn capture(&mut self, path: &str) -> bool {
        let rule = scaffold_rule(path);
        if rule.is_empty() && !self.keep_empty_rule {
            return false;
        }
        if self.seen.contains(&rule) {
            return false;
        }
        self.seen.insert(rule.clone());
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.seen.contains(rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.rules
    }

    /// Stylesheet text: one rule per line, no trailing newline
    pub fn to_css(&self) -> String {
        self.rules.join("\n")
    }
}

impl PartialEq for SelectorList {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl Eq for SelectorList {}

impl Serialize for SelectorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rules.serialize(serializer)
    }
}

/// `"<path> {}"`, or the empty string for an empty path
pub fn scaffold_rule(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{} {{}}", path)
    }
}
