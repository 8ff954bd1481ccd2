//! Source loading utilities
//!
//! `SourceLoader` reads an input file, picks the conversion [`Mode`] from its extension and
//! runs the converter on it. Used by the CLI and by integration tests.
//!
//! # Example
//!
//! ```rust
//! use seymour::seymour::loader::SourceLoader;
//!
//! let loader = SourceLoader::from_path("page.seymour").unwrap();
//! let conversion = loader.convert().unwrap();
//! ```

use crate::seymour::error::ConversionError;
use crate::seymour::processor::{Conversion, ConvertOptions, Converter};
use crate::seymour::token::Mode;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error that can occur when loading and converting a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The file extension is neither `.seymour` nor `.html`
    UnsupportedExtension(String),
    /// The file could not be read
    FileAccess { path: PathBuf, message: String },
    /// The contents failed to convert
    Conversion(ConversionError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::UnsupportedExtension(path) => write!(
                f,
                "Unsupported file '{}': please provide a Seymour file or a HTML file",
                path
            ),
            LoaderError::FileAccess { path, message } => {
                write!(f, "Cannot read '{}': {}", path.display(), message)
            }
            LoaderError::Conversion(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<ConversionError> for LoaderError {
    fn from(err: ConversionError) -> Self {
        LoaderError::Conversion(err)
    }
}

/// Detect the conversion mode of a path from its (last) extension
pub fn detect_mode(path: &Path) -> Result<Mode, LoaderError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Mode::from_extension)
        .ok_or_else(|| LoaderError::UnsupportedExtension(path.display().to_string()))
}

/// Loaded source text together with its mode
#[derive(Debug, Clone)]
pub struct SourceLoader {
    mode: Mode,
    source: String,
}

impl SourceLoader {
    /// Load from a file path; the extension decides the mode
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let mode = detect_mode(path)?;
        let source = fs::read_to_string(path).map_err(|e| LoaderError::FileAccess {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(SourceLoader { mode, source })
    }

    /// Load from a string in the given mode
    pub fn from_string<S: Into<String>>(mode: Mode, source: S) -> Self {
        SourceLoader {
            mode,
            source: source.into(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Convert with default options
    pub fn convert(&self) -> Result<Conversion, LoaderError> {
        self.convert_with(ConvertOptions::default())
    }

    pub fn convert_with(&self, options: ConvertOptions) -> Result<Conversion, LoaderError> {
        Ok(Converter::new(self.mode)
            .with_options(options)
            .convert_str(&self.source)?)
    }
}
