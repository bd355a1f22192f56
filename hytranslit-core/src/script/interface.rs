//! Public contract for script pipelines
//!
//! A script pipeline bundles everything needed to render Armenian words in
//! one target alphabet. The word pipeline only talks to this trait.

use std::borrow::Cow;

/// Script-specific transliteration tables and rules
///
/// Implementations are immutable after construction and shared across
/// threads.
pub trait ScriptRules: Send + Sync + 'static {
    /// Script tag (e.g. `"en"`)
    fn code(&self) -> &str;

    /// Human-readable script name
    fn name(&self) -> &str;

    /// Expand ligatures, then collapse multi-letter sequences to sentinels
    fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str>;

    /// Mapping for a letter or sentinel; `None` means identity
    fn map_char(&self, ch: char) -> Option<&str>;

    /// Vowel test used by word-initial rules; sentinels count when their
    /// rendering starts with a vowel sound
    fn is_vowel(&self, ch: char) -> bool;

    /// Substitute punctuation marks
    fn punctuate<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Render the start of a normalized word into `out`
    ///
    /// Returns how many source characters were consumed (1 or 2).
    fn render_initial(&self, first: char, second: Option<char>, out: &mut String) -> usize;

    /// Append the mapping for `ch`, or `ch` itself when unmapped
    #[inline]
    fn push_mapped(&self, ch: char, out: &mut String) {
        match self.map_char(ch) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(ch),
        }
    }
}
