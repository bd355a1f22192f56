//! Property-based tests for the transliteration pipeline

use hytranslit_core::{segments, transliterate};
use proptest::prelude::*;

fn is_armenian(ch: char) -> bool {
    matches!(ch, '\u{0530}'..='\u{058F}' | '\u{FB13}'..='\u{FB17}')
}

// Lowercase Armenian words, without the ligature
fn lower_word_strategy() -> impl Strategy<Value = String> {
    "[ա-ֆ]{1,10}"
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

proptest! {
    #[test]
    fn prop_segments_are_lossless(text in "\\PC{0,64}") {
        let rebuilt: String = segments(&text).map(|segment| segment.text).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_non_armenian_text_is_unchanged(
        text in "\\PC{0,64}".prop_filter("no Armenian", |t| !t.chars().any(is_armenian))
    ) {
        prop_assert_eq!(transliterate(&text, "en").unwrap(), text.clone());
        prop_assert_eq!(transliterate(&text, "ru").unwrap(), text);
    }

    #[test]
    fn prop_word_count_is_preserved(words in prop::collection::vec(lower_word_strategy(), 1..8)) {
        let text = words.join(" ");
        for tag in ["en", "ru"] {
            let out = transliterate(&text, tag).unwrap();
            prop_assert_eq!(out.split_whitespace().count(), words.len());
        }
    }

    #[test]
    fn prop_upper_follows_lower(
        word in lower_word_strategy().prop_filter("no ye onset", |w| !w.starts_with('ե'))
    ) {
        let upper = word.to_uppercase();
        for tag in ["en", "ru"] {
            let lower_out = transliterate(&word, tag).unwrap();
            prop_assert_eq!(&lower_out, &lower_out.to_lowercase());
            prop_assert_eq!(transliterate(&upper, tag).unwrap(), lower_out.to_uppercase());
        }
    }

    #[test]
    fn prop_capitalized_follows_lower(
        word in "[ա-ֆ]{2,10}".prop_filter("no ye onset", |w| !w.starts_with('ե'))
    ) {
        for tag in ["en", "ru"] {
            let lower_out = transliterate(&word, tag).unwrap();
            prop_assert_eq!(
                transliterate(&capitalize(&word), tag).unwrap(),
                capitalize(&lower_out)
            );
        }
    }

    #[test]
    fn prop_yu_is_never_split(prefix in "[ա-ֆ]{0,5}", suffix in "[ա-ֆ]{0,5}") {
        let word = format!("{prefix}յու{suffix}");
        let out = transliterate(&word, "ru").unwrap();
        prop_assert!(out.contains('ю'), "{} -> {}", word, out);
    }
}
