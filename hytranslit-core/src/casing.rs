//! Word-level casing
//!
//! The casing of a transliterated word follows its Armenian source at word
//! granularity: all-upper and all-lower are mirrored exactly, anything mixed
//! comes out capitalized.

use crate::alphabet;

/// Casing pattern of an Armenian source word
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CasingPattern {
    /// Every Armenian letter is uppercase
    Upper,
    /// Every Armenian letter is lowercase, or there are none
    #[default]
    Lower,
    /// Both cases present: first character upper, rest lower
    Mixed,
}

impl CasingPattern {
    /// Classify `word` from its Armenian letters only
    pub fn classify(word: &str) -> Self {
        let mut has_upper = false;
        let mut has_lower = false;

        for ch in word.chars() {
            if alphabet::is_upper(ch) {
                has_upper = true;
            } else if alphabet::is_lower(ch) {
                has_lower = true;
            }
            if has_upper && has_lower {
                return CasingPattern::Mixed;
            }
        }

        if has_upper {
            CasingPattern::Upper
        } else {
            CasingPattern::Lower
        }
    }

    /// Re-case `text` according to the pattern
    pub fn apply(self, text: &str) -> String {
        match self {
            CasingPattern::Upper => text.to_uppercase(),
            CasingPattern::Lower => text.to_lowercase(),
            CasingPattern::Mixed => {
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out = String::with_capacity(text.len());
                        out.extend(first.to_uppercase());
                        out.push_str(&chars.as_str().to_lowercase());
                        out
                    }
                    None => String::new(),
                }
            }
        }
    }
}
