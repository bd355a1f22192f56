//! Armenian punctuation substitution

use std::borrow::Cow;
use std::collections::HashMap;

/// Punctuation mark to replacement string
#[derive(Debug, Clone, Default)]
pub struct PunctuationMap {
    marks: HashMap<char, Box<str>>,
}

impl PunctuationMap {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<Box<str>>,
    {
        Self {
            marks: entries.into_iter().map(|(ch, s)| (ch, s.into())).collect(),
        }
    }

    #[inline]
    pub fn get(&self, ch: char) -> Option<&str> {
        self.marks.get(&ch).map(|s| &**s)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Substitute every known mark in `text`; borrows when nothing changes
    pub fn substitute<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.is_empty() || !text.chars().any(|ch| self.marks.contains_key(&ch)) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.get(ch) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        Cow::Owned(out)
    }
}
