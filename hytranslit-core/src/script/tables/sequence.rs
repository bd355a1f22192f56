//! Multi-letter sequences and their sentinel code points
//!
//! A sequence such as the "u" digraph is collapsed into a single reserved
//! code point before per-letter mapping, so the rest of the pipeline treats
//! it as one unit. The forward list and the backward table are built
//! together, so every sentinel produced by `collapse` has a backward entry.

use std::borrow::Cow;
use std::collections::HashMap;

/// First sentinel (Supplementary Private Use Area-B)
pub const SENTINEL_BASE: u32 = 0x10_0000;
/// Number of sentinels available
pub const SENTINEL_CAPACITY: usize = 0xFFFE;

/// Backward entry for a sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Sequence name from the script definition
    pub name: String,
    /// Target-script rendering
    pub output: String,
    /// Whether the rendering starts with a vowel sound
    pub vowel: bool,
}

/// Paired forward (spelling -> sentinel) and backward (sentinel -> sequence) map
#[derive(Debug, Clone, Default)]
pub struct SentinelMap {
    /// Spellings, longest first
    forward: Vec<(String, char)>,
    backward: HashMap<char, Sequence>,
    by_name: HashMap<String, char>,
}

impl SentinelMap {
    /// Build from (sequence, spellings) pairs in declaration order
    ///
    /// Returns `None` when the sentinel range is exhausted.
    pub fn new(sequences: Vec<(Sequence, Vec<String>)>) -> Option<Self> {
        if sequences.len() > SENTINEL_CAPACITY {
            return None;
        }

        let mut forward = Vec::new();
        let mut backward = HashMap::new();
        let mut by_name = HashMap::new();

        for (idx, (sequence, forms)) in sequences.into_iter().enumerate() {
            let sentinel = char::from_u32(SENTINEL_BASE + idx as u32)?;
            for form in forms {
                forward.push((form, sentinel));
            }
            by_name.insert(sequence.name.clone(), sentinel);
            backward.insert(sentinel, sequence);
        }

        // Stable: equal lengths keep declaration order
        forward.sort_by_key(|(form, _)| std::cmp::Reverse(form.chars().count()));

        Some(Self {
            forward,
            backward,
            by_name,
        })
    }

    /// Is `ch` one of this map's sentinels?
    #[inline]
    pub fn is_sentinel(&self, ch: char) -> bool {
        self.backward.contains_key(&ch)
    }

    /// Backward lookup
    #[inline]
    pub fn sequence(&self, sentinel: char) -> Option<&Sequence> {
        self.backward.get(&sentinel)
    }

    /// Sentinel assigned to the named sequence
    pub fn sentinel_for(&self, name: &str) -> Option<char> {
        self.by_name.get(name).copied()
    }

    /// Replace every known spelling in `word` by its sentinel
    ///
    /// Longer spellings are replaced first so that a sequence is never split
    /// by one of its own sub-sequences.
    pub fn collapse<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(word);
        for (form, sentinel) in &self.forward {
            if current.contains(form.as_str()) {
                let mut buf = [0u8; 4];
                current = Cow::Owned(current.replace(form.as_str(), sentinel.encode_utf8(&mut buf)));
            }
        }
        current
    }

    /// Number of distinct sequences
    pub fn len(&self) -> usize {
        self.backward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backward.is_empty()
    }
}
