//! Public API for hytranslit-core
//!
//! This module provides the interface used by the CLI and by library
//! consumers: script selection, configuration, input sources and the
//! `Transliterator` itself.

mod config;
mod input;
mod output;
mod processor;
mod script;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::Transliterator;
pub use script::Script;

pub use crate::error::{Error, Result};

/// Transliterate `text` into the script named by `script_tag` (`"en"` or `"ru"`)
///
/// Any other tag is rejected with [`Error::InvalidScript`].
pub fn transliterate(text: &str, script_tag: &str) -> Result<String> {
    let script: Script = script_tag.parse()?;
    Ok(Transliterator::with_script(script)?.transliterate(text))
}

/// Transliterate `text` into the default (Latin) script
pub fn transliterate_default(text: &str) -> Result<String> {
    transliterate(text, Script::default().code())
}
