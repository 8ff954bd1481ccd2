//! Conversion errors
//!
//! Every error raised while scanning carries the 1-based line number and the raw content of
//! the offending line, so callers can point the author at the exact spot.

use std::fmt;

/// Errors raised by the line scanner. Any of these aborts the run before output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The tokenizer could not extract a tag or an attribute from the line
    MalformedLine {
        line_number: usize,
        content: String,
        reason: String,
    },
    /// A closing tag arrived while no element was open
    UnbalancedNesting { line_number: usize, content: String },
}

impl ConversionError {
    pub fn line_number(&self) -> usize {
        match self {
            ConversionError::MalformedLine { line_number, .. }
            | ConversionError::UnbalancedNesting { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MalformedLine {
                line_number,
                content,
                reason,
            } => write!(
                f,
                "Malformed line {}: {} ('{}')",
                line_number, reason, content
            ),
            ConversionError::UnbalancedNesting {
                line_number,
                content,
            } => write!(
                f,
                "Unbalanced nesting at line {}: '{}' closes an element that was never opened",
                line_number, content
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Tokenizer failure before the line number is known.
///
/// The scanner attaches position information via [`LineError::at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub reason: String,
}

impl LineError {
    pub fn new(reason: impl Into<String>) -> Self {
        LineError {
            reason: reason.into(),
        }
    }

    pub fn at(self, line_number: usize, content: &str) -> ConversionError {
        ConversionError::MalformedLine {
            line_number,
            content: content.to_string(),
            reason: self.reason,
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for LineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position_and_content() {
        let err = ConversionError::UnbalancedNesting {
            line_number: 3,
            content: "/div".into(),
        };
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("/div"));
    }

    #[test]
    fn test_line_error_gains_position() {
        let err = LineError::new("attribute 'class' is missing ':'").at(7, "div class");
        assert_eq!(err.line_number(), 7);
        assert_eq!(
            err,
            ConversionError::MalformedLine {
                line_number: 7,
                content: "div class".into(),
                reason: "attribute 'class' is missing ':'".into(),
            }
        );
    }
}
