//! Code Emitter
//!
//! Accumulates the generated HTML. Each call appends exactly one newline-terminated line,
//! indented by `level * indent_width` spaces.

#[derive(Debug, Clone)]
pub struct HtmlEmitter {
    buffer: String,
    indent_width: usize,
}

impl HtmlEmitter {
    pub fn new(indent_width: usize) -> Self {
        HtmlEmitter {
            buffer: String::new(),
            indent_width,
        }
    }

    /// Emit `<tag_text>` at the given nesting level
    pub fn tag(&mut self, level: usize, tag_text: &str) {
        self.indent(level);
        self.buffer.push('<');
        self.buffer.push_str(tag_text);
        self.buffer.push_str(">\n");
    }

    /// Emit literal text at the given nesting level
    pub fn literal(&mut self, level: usize, text: &str) {
        self.indent(level);
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn indent(&mut self, level: usize) {
        let width = level * self.indent_width;
        self.buffer.extend(std::iter::repeat(' ').take(width));
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new(2)
    }
}
