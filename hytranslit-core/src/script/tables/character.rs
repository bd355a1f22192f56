//! Per-letter mapping with O(1) lookup
//!
//! The Armenian block is dense, so letters are stored in a slot array indexed
//! by code point offset. Anything outside the block falls back to a hash map.

use std::collections::{HashMap, HashSet};

const BLOCK_START: u32 = 0x0531;
const BLOCK_END: u32 = 0x0587;
const BLOCK_LEN: usize = (BLOCK_END - BLOCK_START + 1) as usize;

/// Armenian code point to target-script string
#[derive(Debug, Clone)]
pub struct CharacterMap {
    /// Slots for U+0531..=U+0587
    block: Vec<Option<Box<str>>>,
    /// Entries outside the Armenian block (rare)
    others: HashMap<char, Box<str>>,
}

impl CharacterMap {
    /// Create from (letter, output) pairs
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<Box<str>>,
    {
        let mut block = vec![None; BLOCK_LEN];
        let mut others = HashMap::new();

        for (ch, output) in entries {
            match Self::slot(ch) {
                Some(idx) => block[idx] = Some(output.into()),
                None => {
                    others.insert(ch, output.into());
                }
            }
        }

        Self { block, others }
    }

    #[inline]
    fn slot(ch: char) -> Option<usize> {
        let cp = ch as u32;
        if (BLOCK_START..=BLOCK_END).contains(&cp) {
            Some((cp - BLOCK_START) as usize)
        } else {
            None
        }
    }

    /// Look up the mapping for `ch`; `None` means identity
    #[inline]
    pub fn get(&self, ch: char) -> Option<&str> {
        match Self::slot(ch) {
            Some(idx) => self.block[idx].as_deref(),
            None => self.others.get(&ch).map(|s| &**s),
        }
    }

    /// Does the map carry an entry for `ch`?
    pub fn contains(&self, ch: char) -> bool {
        self.get(ch).is_some()
    }
}

/// Plain-letter vowel set
#[derive(Debug, Clone, Default)]
pub struct VowelSet {
    chars: HashSet<char>,
}

impl VowelSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}
