//! Main transliterator implementation

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Error, Input, Output, ProcessingMetadata, ProcessingStats, Script};
use crate::pipeline;
use crate::script::{get_rules, ConfigurableScriptRules, ScriptRules};

/// Transliterator bound to one script pipeline
///
/// Cheap to clone; the script tables are shared.
#[derive(Clone)]
pub struct Transliterator {
    rules: Arc<dyn ScriptRules>,
    config: Config,
}

impl std::fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transliterator")
            .field("script", &self.rules.code())
            .field("config", &self.config)
            .finish()
    }
}

impl Transliterator {
    /// Create a Latin transliterator
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Built-in Latin script should always load")
    }

    /// Create a transliterator with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let rules = Self::create_script_rules(&config)?;
        Ok(Self { rules, config })
    }

    /// Create a transliterator for a script tag (`"en"` or `"ru"`)
    pub fn for_script(tag: &str) -> Result<Self, Error> {
        let config = Config::builder().script(tag)?.build()?;
        Self::with_config(config)
    }

    /// Create a transliterator for a built-in script
    pub fn with_script(script: Script) -> Result<Self, Error> {
        Self::with_config(Config::builder().with_script(script).build()?)
    }

    /// Create a transliterator from already-built rules
    pub fn from_rules(rules: Arc<dyn ScriptRules>) -> Self {
        Self {
            rules,
            config: Config::default(),
        }
    }

    fn create_script_rules(config: &Config) -> Result<Arc<dyn ScriptRules>, Error> {
        match config.script_file() {
            Some(path) => Ok(Arc::new(ConfigurableScriptRules::from_file(path)?)),
            None => get_rules(config.script().code()),
        }
    }

    /// Transliterate arbitrary text
    pub fn transliterate(&self, text: &str) -> String {
        pipeline::transliterate_text(self.rules.as_ref(), text)
    }

    /// Transliterate a single word (no whitespace)
    pub fn transliterate_word(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        pipeline::transliterate_word(self.rules.as_ref(), word)
    }

    /// Transliterate input and report statistics
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();

        let text = input.into_text()?;
        let (transliterated, stats) = pipeline::transliterate_text_with_stats(self.rules.as_ref(), &text);

        Ok(Output {
            text: transliterated,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                script: self.rules.code().to_string(),
                stats: ProcessingStats::from_pipeline(text.len(), stats),
            },
        })
    }

    /// Transliterate input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(&self, reader: R) -> Result<Output, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Code of the script pipeline in use
    pub fn script_code(&self) -> &str {
        self.rules.code()
    }

    /// Name of the script pipeline in use
    pub fn script_name(&self) -> &str {
        self.rules.name()
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}
