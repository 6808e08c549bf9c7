//! Shared configuration loader for the coolor toolchain.
//!
//! `defaults/coolor.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CoolorConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use coolor::coolor::processor::{ProcessingError, ProcessingSpec};
use coolor::Grammar;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/coolor.default.toml");

/// Top-level configuration consumed by coolor applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CoolorConfig {
    pub grammar: GrammarConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Which command grammar the parser runs.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarConfig {
    pub color_range: bool,
}

impl GrammarConfig {
    pub fn grammar(&self) -> Grammar {
        Grammar::from_flag(self.color_range)
    }
}

/// How results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl OutputConfig {
    pub fn spec(&self) -> Result<ProcessingSpec, ProcessingError> {
        ProcessingSpec::from_string(&self.format)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CoolorConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
