//! Word-initial rule set
//!
//! The first letters of a word are rendered by the first matching rule in a
//! fixed, ordered list. Reordering the list changes output, so the order in
//! the script definition is kept as is.

use crate::script::interface::ScriptRules;

/// A contextual rule for the start of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstCharRule {
    /// Conjunction sentinel at word start: `onset` replaces the mid-word form
    Conjunction { sentinel: char, onset: String },
    /// Case-sensitive `trigger` letter rendered with a "ye" onset
    YeInitial { trigger: char, onset: String },
    /// "o"/"vo" disambiguation
    VoInitial {
        triggers: Vec<char>,
        onset: String,
        plain: String,
        plain_before: Vec<char>,
    },
}

impl FirstCharRule {
    /// Does the rule apply to a word starting with `first`?
    pub fn matches(&self, first: char) -> bool {
        match self {
            FirstCharRule::Conjunction { sentinel, .. } => first == *sentinel,
            FirstCharRule::YeInitial { trigger, .. } => first == *trigger,
            FirstCharRule::VoInitial { triggers, .. } => triggers.contains(&first),
        }
    }

    /// Render `first` (and `second`, if any) into `out`
    pub fn render(
        &self,
        second: Option<char>,
        script: &dyn ScriptRules,
        out: &mut String,
    ) {
        match self {
            FirstCharRule::Conjunction { onset, .. } | FirstCharRule::YeInitial { onset, .. } => {
                out.push_str(onset);
            }
            FirstCharRule::VoInitial {
                onset,
                plain,
                plain_before,
                ..
            } => {
                let is_plain = second
                    .is_some_and(|next| script.is_vowel(next) || plain_before.contains(&next));
                out.push_str(if is_plain { plain } else { onset });
            }
        }

        if let Some(next) = second {
            script.push_mapped(next, out);
        }
    }
}

/// Ordered collection of word-initial rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FirstCharRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FirstCharRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FirstCharRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the start of a word; first match wins, plain mapping otherwise
    ///
    /// Returns the number of characters consumed.
    pub fn apply(
        &self,
        first: char,
        second: Option<char>,
        script: &dyn ScriptRules,
        out: &mut String,
    ) -> usize {
        match self.rules.iter().find(|rule| rule.matches(first)) {
            Some(rule) => rule.render(second, script, out),
            None => {
                script.push_mapped(first, out);
                if let Some(next) = second {
                    script.push_mapped(next, out);
                }
            }
        }

        1 + usize::from(second.is_some())
    }
}
