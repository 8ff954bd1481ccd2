//! Nesting Tracker
//!
//! Keeps the stack of selector-path segments for the elements that are currently open. The
//! stack depth is the nesting depth used for indentation.

/// Explicit stack of open elements, one selector segment per element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestingTracker {
    stack: Vec<String>,
}

impl NestingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open elements
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Open an element
    pub fn open(&mut self, segment: impl Into<String>) {
        self.stack.push(segment.into());
    }

    /// Close the innermost element, returning its segment.
    ///
    /// Returns `None` when nothing is open; the stack is left untouched.
    pub fn close(&mut self) -> Option<String> {
        self.stack.pop()
    }

    /// Space-joined path of all open segments, outermost first
    pub fn selector_path(&self) -> String {
        self.stack.join(" ")
    }
}
