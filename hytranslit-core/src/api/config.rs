//! Configuration API for transliteration

use std::path::{Path, PathBuf};

use crate::api::{Error, Script};

/// Transliteration configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) script: Script,
    /// External script definition replacing the built-in one
    pub(crate) script_file: Option<PathBuf>,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected built-in script
    pub fn script(&self) -> Script {
        self.script
    }

    /// External script definition, if any
    pub fn script_file(&self) -> Option<&Path> {
        self.script_file.as_deref()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(path) = &self.script_file {
            if !path.is_file() {
                return Err(Error::Configuration(format!(
                    "script definition not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    script: Option<Script>,
    script_file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the script by tag
    pub fn script(mut self, tag: &str) -> Result<Self, Error> {
        self.script = Some(tag.parse()?);
        Ok(self)
    }

    /// Set the script directly
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    /// Use an external script definition
    pub fn script_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_file = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(script) = self.script {
            config.script = script;
        }

        config.script_file = self.script_file;

        config.validate()?;
        Ok(config)
    }
}
