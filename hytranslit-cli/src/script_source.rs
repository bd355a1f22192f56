//! Script source management for CLI

use std::path::PathBuf;

use anyhow::Result;
use hytranslit_core::{Config, Script, Transliterator};

/// Source of script rules
#[derive(Debug, Clone)]
pub enum ScriptSource {
    /// Built-in script definition
    BuiltIn(Script),
    /// External definition file
    External(PathBuf),
}

impl ScriptSource {
    /// Get the display name for the script source
    pub fn display_name(&self) -> String {
        match self {
            ScriptSource::BuiltIn(script) => format!("Built-in: {} ({})", script.name(), script.code()),
            ScriptSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build a transliterator for this source
    pub fn transliterator(&self) -> Result<Transliterator> {
        let config = match self {
            ScriptSource::BuiltIn(script) => Config::builder().with_script(*script).build(),
            ScriptSource::External(path) => Config::builder().script_file(path).build(),
        }?;

        Ok(Transliterator::with_config(config)?)
    }
}
