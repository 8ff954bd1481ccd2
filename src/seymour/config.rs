//! Configuration loading
//!
//! `defaults/seymour.default.toml` is embedded into the binary so that documentation and
//! runtime behavior stay in sync. User files are layered on top via [`Loader`] before
//! deserializing into [`SeymourConfig`].

use crate::seymour::processor::ConvertOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/seymour.default.toml");

/// Name of the optional per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "seymour.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeymourConfig {
    pub html: HtmlConfig,
    pub css: CssConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub indent_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CssConfig {
    pub keep_empty_rule: bool,
}

/// Where the generated files land
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub html_file: String,
    pub css_file: String,
}

impl OutputConfig {
    pub fn html_path(&self) -> PathBuf {
        self.directory.join(&self.html_file)
    }

    pub fn css_path(&self) -> PathBuf {
        self.directory.join(&self.css_file)
    }
}

impl SeymourConfig {
    /// Options for the conversion core
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            indent_width: self.html.indent_width,
            keep_empty_rule: self.css.keep_empty_rule,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SeymourConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SeymourConfig, ConfigError> {
    Loader::new().build()
}
