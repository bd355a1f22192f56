//! Configuration structures and validation
//!
//! This module defines the TOML schema for script definitions.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::script::tables::sequence::SENTINEL_CAPACITY;

/// Root script definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub metadata: Metadata,
    /// Single Armenian letter -> target string
    pub letters: BTreeMap<String, String>,
    #[serde(default)]
    pub vowels: Vowels,
    #[serde(default)]
    pub sequences: Vec<SequenceConfig>,
    /// Single punctuation mark -> replacement
    #[serde(default)]
    pub punctuation: BTreeMap<String, String>,
    /// Word-initial rules, in priority order
    #[serde(default)]
    pub first_char_rules: Vec<RuleConfig>,
}

/// Script metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Plain-letter vowels
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vowels {
    #[serde(default)]
    pub chars: Vec<char>,
}

/// A multi-letter sequence collapsed to one sentinel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub name: String,
    /// Every spelling of the sequence (case variants included)
    pub forms: Vec<String>,
    pub output: String,
    /// Rendering starts with a vowel sound
    #[serde(default)]
    pub vowel: bool,
}

/// First-character rule, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Word starts with the named sequence
    Conjunction { sequence: String, onset: String },
    /// Word starts with `trigger` (case-sensitive)
    YeInitial { trigger: char, onset: String },
    /// Word starts with one of `triggers`; `plain` before vowels and
    /// `plain_before` letters, `onset` otherwise
    VoInitial {
        triggers: Vec<char>,
        onset: String,
        plain: String,
        #[serde(default)]
        plain_before: Vec<char>,
    },
}

impl RuleConfig {
    /// Tag as written in the definition
    pub fn kind(&self) -> &'static str {
        match self {
            RuleConfig::Conjunction { .. } => "conjunction",
            RuleConfig::YeInitial { .. } => "ye_initial",
            RuleConfig::VoInitial { .. } => "vo_initial",
        }
    }
}

/// The only code point in `key`, if it has exactly one
pub(crate) fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl ScriptConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Script code must not be empty".to_string());
        }

        let mut letters = HashSet::new();
        for (key, output) in &self.letters {
            let ch = single_char(key)
                .ok_or_else(|| format!("Letter key '{key}' must be a single character"))?;
            if output.is_empty() {
                return Err(format!("Letter '{key}' has an empty mapping"));
            }
            letters.insert(ch);
        }

        if let Some(missing) = alphabet::cased_letters().find(|ch| !letters.contains(ch)) {
            return Err(format!(
                "Letter '{missing}' (U+{:04X}) has no mapping",
                missing as u32
            ));
        }

        for key in self.punctuation.keys() {
            if single_char(key).is_none() {
                return Err(format!(
                    "Punctuation key '{key}' must be a single character"
                ));
            }
        }

        self.validate_sequences(&letters)?;
        self.validate_rules()
    }

    fn validate_sequences(&self, letters: &HashSet<char>) -> Result<(), String> {
        if self.sequences.len() > SENTINEL_CAPACITY {
            return Err(format!(
                "Too many sequences (max {SENTINEL_CAPACITY})"
            ));
        }

        let mut names = HashSet::new();
        let mut forms = HashSet::new();
        for sequence in &self.sequences {
            if sequence.name.is_empty() {
                return Err("Sequence name must not be empty".to_string());
            }
            if !names.insert(sequence.name.as_str()) {
                return Err(format!("Duplicate sequence '{}'", sequence.name));
            }
            if sequence.forms.is_empty() {
                return Err(format!("Sequence '{}' has no forms", sequence.name));
            }
            if sequence.output.is_empty() {
                return Err(format!("Sequence '{}' has an empty output", sequence.name));
            }
            for form in &sequence.forms {
                if form.is_empty() {
                    return Err(format!("Sequence '{}' has an empty form", sequence.name));
                }
                if !forms.insert(form.as_str()) {
                    return Err(format!("Form '{form}' is listed more than once"));
                }
            }
        }

        let ligature = alphabet::LIGATURE_EW;
        let ligature_covered = letters.contains(&ligature)
            || forms.iter().any(|form| single_char(form) == Some(ligature));
        if !ligature_covered {
            return Err(format!(
                "Letter '{ligature}' is neither mapped nor collapsed by a sequence"
            ));
        }

        Ok(())
    }

    fn validate_rules(&self) -> Result<(), String> {
        let mut kinds = HashSet::new();
        for rule in &self.first_char_rules {
            if !kinds.insert(rule.kind()) {
                return Err(format!("Rule '{}' is listed more than once", rule.kind()));
            }

            match rule {
                RuleConfig::Conjunction { sequence, onset } => {
                    if !self.sequences.iter().any(|s| &s.name == sequence) {
                        return Err(format!(
                            "Rule 'conjunction' refers to unknown sequence '{sequence}'"
                        ));
                    }
                    if onset.is_empty() {
                        return Err("Rule 'conjunction' has an empty onset".to_string());
                    }
                }
                RuleConfig::YeInitial { onset, .. } => {
                    if onset.is_empty() {
                        return Err("Rule 'ye_initial' has an empty onset".to_string());
                    }
                }
                RuleConfig::VoInitial {
                    triggers,
                    onset,
                    plain,
                    ..
                } => {
                    if triggers.is_empty() {
                        return Err("Rule 'vo_initial' has no triggers".to_string());
                    }
                    if onset.is_empty() || plain.is_empty() {
                        return Err("Rule 'vo_initial' needs both onset and plain".to_string());
                    }
                }
            }
        }

        Ok(())
    }
}
