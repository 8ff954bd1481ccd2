//! Line processor
//!
//! Drives one conversion run over a sequence of lines. Each non-blank line is tokenized,
//! applied to the [`NestingTracker`], rendered by the [`HtmlEmitter`] (Seymour mode only) and
//! then offers the current nesting path to the [`SelectorList`].
//!
//! A run is a pure fold: it either produces a complete [`Conversion`] or fails on the first
//! malformed line, in which case nothing has been handed to any output sink.
//!
//! Indentation follows the nesting of the generated document. An opening tag is rendered at
//! the depth before it is pushed, a closing tag at the depth after it is popped, and a
//! literal line at the current depth:
//!
//! ```text
//! div class:box      <div class="box">
//! p                    <p>
//! >Hello               Hello
//! /p                   </p>
//! /div               </div>
//! ```

use crate::seymour::emitter::HtmlEmitter;
use crate::seymour::error::ConversionError;
use crate::seymour::lexing::tokenize_line;
use crate::seymour::nesting::NestingTracker;
use crate::seymour::selectors::SelectorList;
use crate::seymour::token::{Mode, Token};
use serde::Serialize;

const LOG_TARGET: &str = "seymour::scan";

/// Knobs for a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Spaces per nesting level in generated HTML
    pub indent_width: usize,
    /// Record the empty nesting path as a blank selector entry
    pub keep_empty_rule: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            indent_width: 2,
            keep_empty_rule: false,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub mode: Mode,
    /// Generated HTML; `None` in HTML mode
    pub html: Option<String>,
    #[serde(rename = "css")]
    pub selectors: SelectorList,
}

impl Conversion {
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// Stylesheet scaffold, one rule per line
    pub fn css(&self) -> String {
        self.selectors.to_css()
    }
}

/// Converts lines of one mode into HTML and CSS scaffolds
#[derive(Debug, Clone)]
pub struct Converter {
    mode: Mode,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(mode: Mode) -> Self {
        Converter {
            mode,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Run over a finite sequence of lines
    pub fn convert<I, S>(&self, lines: I) -> Result<Conversion, ConversionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scan = Scan::new(self.mode, &self.options);
        for (index, line) in lines.into_iter().enumerate() {
            scan.process_line(index + 1, line.as_ref())?;
        }
        Ok(scan.finish())
    }

    /// Run over a whole source text
    pub fn convert_str(&self, source: &str) -> Result<Conversion, ConversionError> {
        self.convert(source.lines())
    }
}

/// Convert a source text with default options
pub fn convert(mode: Mode, source: &str) -> Result<Conversion, ConversionError> {
    Converter::new(mode).convert_str(source)
}

/// Per-run state; never shared between runs
struct Scan {
    mode: Mode,
    tracker: NestingTracker,
    selectors: SelectorList,
    emitter: Option<HtmlEmitter>,
    processed: usize,
}

impl Scan {
    fn new(mode: Mode, options: &ConvertOptions) -> Self {
        Scan {
            mode,
            tracker: NestingTracker::new(),
            selectors: SelectorList::new().keeping_empty_rule(options.keep_empty_rule),
            emitter: mode
                .emits_html()
                .then(|| HtmlEmitter::new(options.indent_width)),
            processed: 0,
        }
    }

    fn process_line(&mut self, line_number: usize, raw: &str) -> Result<(), ConversionError> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        let token = tokenize_line(self.mode, line).map_err(|e| e.at(line_number, line))?;
        log::trace!(target: LOG_TARGET, "line {}: {:?}", line_number, token);

        match token {
            Token::Literal(text) => {
                let level = self.tracker.depth();
                if let Some(emitter) = self.emitter.as_mut() {
                    emitter.literal(level, &text);
                }
            }
            Token::Element(el) if el.is_closing => {
                let closed = self.tracker.close().ok_or_else(|| {
                    ConversionError::UnbalancedNesting {
                        line_number,
                        content: line.to_string(),
                    }
                })?;
                log::trace!(target: LOG_TARGET, "line {}: closed '{}'", line_number, closed);
                let level = self.tracker.depth();
                if let Some(emitter) = self.emitter.as_mut() {
                    emitter.tag(level, &el.tag_text());
                }
            }
            Token::Element(el) => {
                let level = self.tracker.depth();
                if let Some(emitter) = self.emitter.as_mut() {
                    emitter.tag(level, &el.tag_text());
                }
                self.tracker.open(el.css_class);
            }
        }

        let path = self.tracker.selector_path();
        if self.selectors.capture(&path) {
            log::trace!(target: LOG_TARGET, "line {}: new selector '{}'", line_number, path);
        }
        self.processed += 1;
        Ok(())
    }

    fn finish(self) -> Conversion {
        if !self.tracker.is_empty() {
            log::warn!(
                target: LOG_TARGET,
                "input ended with {} unclosed element(s): {}",
                self.tracker.depth(),
                self.tracker.selector_path()
            );
        }
        log::debug!(
            target: LOG_TARGET,
            "{} mode: {} line(s) processed, {} selector(s)",
            self.mode,
            self.processed,
            self.selectors.len()
        );

        Conversion {
            mode: self.mode,
            html: self.emitter.map(HtmlEmitter::finish),
            selectors: self.selectors,
        }
    }
}
