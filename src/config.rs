//! Configuration loader for the demonstration program.
//!
//! `defaults/intbox.default.toml` is embedded into the binary. Callers layer a
//! user file and command-line overrides on top via [`Loader`] before
//! deserializing into [`IntboxConfig`].

use crate::demo::Width;
use crate::parsing::parser::Strategy;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/intbox.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct IntboxConfig {
    pub parser: ParserConfig,
    pub demo: DemoConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub strategy: Strategy,
}

/// Inputs fed through one box by `intbox demo`.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub width: Width,
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Layers a user file and command-line flags over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file. A missing file fails at [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override `key` with a flag value; `None` (flag not given) keeps the layered value.
    pub fn with_flag(self, key: &str, value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<IntboxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<IntboxConfig, ConfigError> {
    Loader::new().build()
}
