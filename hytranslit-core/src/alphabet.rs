//! Armenian code point classification
//!
//! Only the modern letter blocks are recognized: the 38 case pairs of the
//! Armenian block, the `և` ligature and the five presentation-form ligatures.

/// First uppercase letter (Ա)
pub const UPPER_FIRST: char = '\u{0531}';
/// Last uppercase letter (Ֆ)
pub const UPPER_LAST: char = '\u{0556}';
/// First lowercase letter (ա)
pub const LOWER_FIRST: char = '\u{0561}';
/// Last lowercase letter with an uppercase counterpart (ֆ)
pub const LOWER_LAST: char = '\u{0586}';
/// Conjunction ligature (և), lowercase only
pub const LIGATURE_EW: char = '\u{0587}';
/// First presentation-form ligature (ﬓ)
pub const PRESENTATION_FIRST: char = '\u{FB13}';
/// Last presentation-form ligature (ﬗ)
pub const PRESENTATION_LAST: char = '\u{FB17}';

/// Is `ch` an uppercase Armenian letter?
#[inline]
pub fn is_upper(ch: char) -> bool {
    (UPPER_FIRST..=UPPER_LAST).contains(&ch)
}

/// Is `ch` a lowercase Armenian letter (ligatures included)?
#[inline]
pub fn is_lower(ch: char) -> bool {
    (LOWER_FIRST..=LIGATURE_EW).contains(&ch) || (PRESENTATION_FIRST..=PRESENTATION_LAST).contains(&ch)
}

/// Is `ch` any Armenian letter?
#[inline]
pub fn is_letter(ch: char) -> bool {
    is_upper(ch) || is_lower(ch)
}

/// Does `text` contain at least one Armenian letter?
pub fn contains_letter(text: &str) -> bool {
    text.chars().any(is_letter)
}

/// Every letter a character map has to cover, both cases
pub fn cased_letters() -> impl Iterator<Item = char> {
    (UPPER_FIRST..=UPPER_LAST).chain(LOWER_FIRST..=LOWER_LAST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_classification() {
        assert!(is_upper('Ա'));
        assert!(is_upper('Ֆ'));
        assert!(!is_upper('ա'));

        assert!(is_lower('ա'));
        assert!(is_lower('և'));
        assert!(is_lower('\u{FB13}'));
        assert!(!is_lower('Ա'));

        // Punctuation inside the block is not a letter
        assert!(!is_letter('։'));
        assert!(!is_letter('՞'));
        assert!(!is_letter('a'));
        assert!(!is_letter('Ж'));
    }

    #[test]
    fn test_contains_letter() {
        assert!(contains_letter("abc Բ"));
        assert!(!contains_letter("abc 123 ։"));
        assert!(!contains_letter(""));
    }

    #[test]
    fn test_cased_letters_count() {
        assert_eq!(cased_letters().count(), 76);
        assert!(cased_letters().all(is_letter));
    }
}
