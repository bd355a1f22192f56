//! Word and text pipelines
//!
//! text -> segments -> punctuation -> words -> normalize -> initial rules +
//! letter mapping -> casing -> reassembly.

use crate::alphabet;
use crate::casing::CasingPattern;
use crate::script::ScriptRules;
use crate::tokenizer::segments;

/// Counters gathered while transliterating a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Characters in the input
    pub chars: usize,
    /// Segments produced by the tokenizer
    pub segments: usize,
    /// Segments that carried Armenian letters
    pub armenian_segments: usize,
    /// Words passed through the word pipeline
    pub words: usize,
}

/// Transliterate a single whitespace-free word
pub fn transliterate_word(script: &dyn ScriptRules, word: &str) -> String {
    debug_assert!(!word.is_empty(), "word pipeline received an empty word");

    let casing = CasingPattern::classify(word);
    let normalized = script.normalize(word);
    let chars: Vec<char> = normalized.chars().collect();

    let Some(&first) = chars.first() else {
        return String::new();
    };

    let mut out = String::with_capacity(normalized.len() * 2);
    let consumed = script.render_initial(first, chars.get(1).copied(), &mut out);
    for &ch in &chars[consumed..] {
        script.push_mapped(ch, &mut out);
    }

    casing.apply(&out)
}

/// Transliterate arbitrary text
pub fn transliterate_text(script: &dyn ScriptRules, text: &str) -> String {
    transliterate_text_with_stats(script, text).0
}

/// Transliterate arbitrary text and report what was done
pub fn transliterate_text_with_stats(script: &dyn ScriptRules, text: &str) -> (String, TextStats) {
    let mut stats = TextStats {
        chars: text.chars().count(),
        ..TextStats::default()
    };
    let mut out = String::with_capacity(text.len() * 2);

    for segment in segments(text) {
        stats.segments += 1;

        let punctuated = script.punctuate(segment.text);
        if !alphabet::contains_letter(&punctuated) {
            out.push_str(&punctuated);
            continue;
        }

        stats.armenian_segments += 1;
        tracing::trace!(segment = segment.text, kind = ?segment.kind, "transliterating segment");

        // Internal whitespace collapses to single spaces
        let mut first_word = true;
        for word in punctuated.split_whitespace() {
            if !first_word {
                out.push(' ');
            }
            first_word = false;
            stats.words += 1;
            out.push_str(&transliterate_word(script, word));
        }
    }

    (out, stats)
}
