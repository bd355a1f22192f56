//! Runtime implementation of script rules
//!
//! This module provides the concrete implementation that bridges
//! configuration and the trait interface.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{Error, Result};
use crate::script::{
    config::{single_char, RuleConfig, ScriptConfig},
    interface::ScriptRules,
    rules::{FirstCharRule, RuleSet},
    tables::*,
};

/// Configurable script rules implementation
#[derive(Debug, Clone)]
pub struct ConfigurableScriptRules {
    code: String,
    name: String,

    /// Runtime tables
    letters: CharacterMap,
    vowels: VowelSet,
    sentinels: SentinelMap,
    punctuation: PunctuationMap,
    rules: RuleSet,
}

impl ConfigurableScriptRules {
    /// Create from configuration
    pub fn from_config(config: &ScriptConfig) -> Result<Self> {
        config.validate().map_err(Error::Configuration)?;

        let letters = CharacterMap::new(
            config
                .letters
                .iter()
                .filter_map(|(key, output)| single_char(key).map(|ch| (ch, output.as_str()))),
        );

        let vowels = VowelSet::new(config.vowels.chars.iter().copied());

        let sentinels = SentinelMap::new(
            config
                .sequences
                .iter()
                .map(|s| {
                    (
                        Sequence {
                            name: s.name.clone(),
                            output: s.output.clone(),
                            vowel: s.vowel,
                        },
                        s.forms.clone(),
                    )
                })
                .collect(),
        )
        .ok_or_else(|| Error::Configuration("Sentinel range exhausted".to_string()))?;

        let punctuation = PunctuationMap::new(
            config
                .punctuation
                .iter()
                .filter_map(|(key, output)| single_char(key).map(|ch| (ch, output.as_str()))),
        );

        let rules = config
            .first_char_rules
            .iter()
            .map(|rule| Self::build_rule(rule, &sentinels))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            code = %config.metadata.code,
            sequences = sentinels.len(),
            rules = rules.len(),
            "built script rules"
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            letters,
            vowels,
            sentinels,
            punctuation,
            rules: RuleSet::new(rules),
        })
    }

    /// Parse and build from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ScriptConfig = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("Failed to parse script definition: {e}")))?;
        Self::from_config(&config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    fn build_rule(rule: &RuleConfig, sentinels: &SentinelMap) -> Result<FirstCharRule> {
        Ok(match rule {
            RuleConfig::Conjunction { sequence, onset } => FirstCharRule::Conjunction {
                sentinel: sentinels.sentinel_for(sequence).ok_or_else(|| {
                    Error::Configuration(format!("Unknown sequence '{sequence}'"))
                })?,
                onset: onset.clone(),
            },
            RuleConfig::YeInitial { trigger, onset } => FirstCharRule::YeInitial {
                trigger: *trigger,
                onset: onset.clone(),
            },
            RuleConfig::VoInitial {
                triggers,
                onset,
                plain,
                plain_before,
            } => FirstCharRule::VoInitial {
                triggers: triggers.clone(),
                onset: onset.clone(),
                plain: plain.clone(),
                plain_before: plain_before.clone(),
            },
        })
    }

    /// Number of multi-letter sequences
    pub fn sequence_count(&self) -> usize {
        self.sentinels.len()
    }

    /// Word-initial rules in priority order
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl ScriptRules for ConfigurableScriptRules {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match expand_ligatures(word) {
            Cow::Borrowed(word) => self.sentinels.collapse(word),
            Cow::Owned(expanded) => Cow::Owned(self.sentinels.collapse(&expanded).into_owned()),
        }
    }

    #[inline]
    fn map_char(&self, ch: char) -> Option<&str> {
        match self.sentinels.sequence(ch) {
            Some(sequence) => Some(sequence.output.as_str()),
            None => self.letters.get(ch),
        }
    }

    #[inline]
    fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(ch) || self.sentinels.sequence(ch).is_some_and(|s| s.vowel)
    }

    fn punctuate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.punctuation.substitute(text)
    }

    fn render_initial(&self, first: char, second: Option<char>, out: &mut String) -> usize {
        self.rules.apply(first, second, self, out)
    }
}
