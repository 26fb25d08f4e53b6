//! Configuration loader
//!
//! `defaults/weft.default.toml` is embedded into the library so that docs and runtime
//! behavior stay in sync. Callers layer user files and overrides on top of it with
//! [`Loader`] before deserializing into [`WeftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::weft::catalog::{ArgPattern, MacroCatalog};

const DEFAULT_TOML: &str = include_str!("../../defaults/weft.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WeftConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default processing format, e.g. `ast-json`
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive
    pub level: String,
}

/// Extra entries for the macro table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub macros: Vec<MacroEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MacroEntry {
    pub name: String,
    pub pattern: ArgPattern,
}

impl WeftConfig {
    /// The built-in macro table extended with the configured entries.
    pub fn catalog(&self) -> MacroCatalog {
        let mut catalog = MacroCatalog::builtin().clone();
        catalog.extend(
            self.catalog
                .macros
                .iter()
                .map(|entry| (entry.name.clone(), entry.pattern.clone())),
        );
        catalog
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WeftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WeftConfig, ConfigError> {
    Loader::new().build()
}
