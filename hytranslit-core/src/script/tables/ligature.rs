//! Presentation-form ligature expansion
//!
//! Each ligature in U+FB13..=U+FB17 stands for two lowercase letters.

use std::borrow::Cow;

use crate::alphabet::{PRESENTATION_FIRST, PRESENTATION_LAST};

/// Two-letter expansions, indexed from U+FB13
const EXPANSIONS: [[char; 2]; 5] = [
    ['\u{0574}', '\u{0576}'], // ﬓ men+now
    ['\u{0574}', '\u{0565}'], // ﬔ men+ech
    ['\u{0574}', '\u{056B}'], // ﬕ men+ini
    ['\u{057E}', '\u{0576}'], // ﬖ vew+now
    ['\u{0574}', '\u{056D}'], // ﬗ men+xeh
];

/// Expansion for a single ligature code point
#[inline]
pub fn expansion(ch: char) -> Option<[char; 2]> {
    if (PRESENTATION_FIRST..=PRESENTATION_LAST).contains(&ch) {
        Some(EXPANSIONS[(ch as u32 - PRESENTATION_FIRST as u32) as usize])
    } else {
        None
    }
}

/// Replace every presentation-form ligature in `word` by its two letters
pub fn expand_ligatures(word: &str) -> Cow<'_, str> {
    if !word.chars().any(|ch| expansion(ch).is_some()) {
        return Cow::Borrowed(word);
    }

    let mut out = String::with_capacity(word.len() + 4);
    for ch in word.chars() {
        match expansion(ch) {
            Some([a, b]) => {
                out.push(a);
                out.push(b);
            }
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_table() {
        assert_eq!(expansion('\u{FB13}'), Some(['մ', 'ն']));
        assert_eq!(expansion('\u{FB14}'), Some(['մ', 'ե']));
        assert_eq!(expansion('\u{FB15}'), Some(['մ', 'ի']));
        assert_eq!(expansion('\u{FB16}'), Some(['վ', 'ն']));
        assert_eq!(expansion('\u{FB17}'), Some(['մ', 'խ']));
        assert_eq!(expansion('մ'), None);
    }

    #[test]
    fn test_expand_word() {
        assert_eq!(expand_ligatures("\u{FB14}ծ"), "մեծ");
        assert!(matches!(expand_ligatures("մեծ"), Cow::Borrowed(_)));
    }
}
