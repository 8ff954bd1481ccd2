//! Output sinks
//!
//! A sink receives one final string per run. Seymour runs deliver to an HTML sink and a CSS
//! sink; HTML runs only to the CSS sink. Delivery happens once the whole input has converted,
//! so a failed run never leaves partial output behind.

use crate::seymour::config::OutputConfig;
use crate::seymour::processor::Conversion;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Failure while writing an output sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputError {
    pub target: String,
    pub message: String,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot write '{}': {}", self.target, self.message)
    }
}

impl std::error::Error for OutputError {}

/// Destination for one generated document
pub trait Sink {
    fn write_output(&mut self, content: &str) -> Result<(), OutputError>;
}

/// In-memory sink; replaces its contents on write
impl Sink for String {
    fn write_output(&mut self, content: &str) -> Result<(), OutputError> {
        self.clear();
        self.push_str(content);
        Ok(())
    }
}

/// Writes the content to a file, creating parent directories as needed
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_output(&mut self, content: &str) -> Result<(), OutputError> {
        let to_error = |e: std::io::Error| OutputError {
            target: self.path.display().to_string(),
            message: e.to_string(),
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        fs::write(&self.path, content).map_err(to_error)?;
        log::debug!("wrote {} byte(s) to {}", content.len(), self.path.display());
        Ok(())
    }
}

/// Hand a finished conversion to its sinks
pub fn deliver(
    conversion: &Conversion,
    html_sink: &mut dyn Sink,
    css_sink: &mut dyn Sink,
) -> Result<(), OutputError> {
    if let Some(html) = conversion.html() {
        html_sink.write_output(html)?;
    }
    css_sink.write_output(&conversion.css())
}

/// Write a conversion to the configured output files; returns the paths written
pub fn write_files(
    conversion: &Conversion,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>, OutputError> {
    let mut html_sink = FileSink::new(output.html_path());
    let mut css_sink = FileSink::new(output.css_path());
    deliver(conversion, &mut html_sink, &mut css_sink)?;

    let mut written = Vec::new();
    if conversion.html().is_some() {
        written.push(html_sink.path);
    }
    written.push(css_sink.path);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seymour::processor::convert;
    use crate::seymour::token::Mode;

    /// Records whether it was written at all
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<String>,
    }

    impl Sink for RecordingSink {
        fn write_output(&mut self, content: &str) -> Result<(), OutputError> {
            self.writes.push(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_seymour_run_writes_both_sinks() {
        let conversion = convert(Mode::Seymour, "div\n/div").unwrap();
        let mut html = String::new();
        let mut css = String::new();
        deliver(&conversion, &mut html, &mut css).unwrap();
        assert_eq!(html, "<div>\n</div>\n");
        assert_eq!(css, "div {}");
    }

    #[test]
    fn test_empty_seymour_run_still_writes_both_sinks() {
        let conversion = convert(Mode::Seymour, "").unwrap();
        let mut html = RecordingSink::default();
        let mut css = RecordingSink::default();
        deliver(&conversion, &mut html, &mut css).unwrap();
        assert_eq!(html.writes, vec![String::new()]);
        assert_eq!(css.writes, vec![String::new()]);
    }

    #[test]
    fn test_html_run_skips_html_sink() {
        let conversion = convert(Mode::Html, "<p>\n</p>").unwrap();
        let mut html = RecordingSink::default();
        let mut css = RecordingSink::default();
        deliver(&conversion, &mut html, &mut css).unwrap();
        assert!(html.writes.is_empty());
        assert_eq!(css.writes, vec!["p {}".to_string()]);
    }

    #[test]
    fn test_write_files_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            directory: dir.path().join("site"),
            html_file: "index.html".into(),
            css_file: "index.css".into(),
        };
        let conversion = convert(Mode::Seymour, "p class:lead\n/p").unwrap();
        let written = write_files(&conversion, &output).unwrap();

        assert_eq!(written, vec![output.html_path(), output.css_path()]);
        assert_eq!(
            fs::read_to_string(output.html_path()).unwrap(),
            "<p class=\"lead\">\n</p>\n"
        );
        assert_eq!(fs::read_to_string(output.css_path()).unwrap(), "p.lead {}");
    }
}
