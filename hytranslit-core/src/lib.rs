//! Rule-based transliteration of Armenian text into Latin or Cyrillic
//!
//! Text is split into clusters of Armenian letters, Armenian punctuation,
//! digits and guillemets, separated by everything else. Clusters that carry
//! Armenian letters go through a word pipeline:
//!
//! - ligatures are expanded and multi-letter sequences collapse into
//!   single sentinel characters, longest spelling first
//! - the first character is rendered by an ordered list of initial rules
//! - the remaining characters are mapped one by one
//! - the casing pattern of the source word is reapplied to the result
//!
//! Everything else passes through unchanged, apart from Armenian
//! punctuation which is substituted in every cluster.
//!
//! Script tables are plain TOML definitions embedded in the crate and
//! parsed once on first use.
//!
//! # Example
//!
//! ```rust
//! use hytranslit_core::{transliterate, Transliterator};
//!
//! assert_eq!(transliterate("Երևան", "en").unwrap(), "Yerevan");
//! assert_eq!(transliterate("Երևան", "ru").unwrap(), "Ереван");
//!
//! let latin = Transliterator::new();
//! assert_eq!(latin.transliterate("Ով է այնտեղ։"), "Ov e ayntegh.");
//! ```

pub mod alphabet;
pub mod api;
pub mod casing;
pub mod error;
pub mod pipeline;
pub mod script;
pub mod tokenizer;

pub use api::{
    transliterate, transliterate_default, Config, ConfigBuilder, Input, Output,
    ProcessingMetadata, ProcessingStats, Script, Transliterator,
};
pub use casing::CasingPattern;
pub use error::{Error, Result};
pub use script::{ConfigurableScriptRules, ScriptConfig, ScriptRules};
pub use tokenizer::{segments, Segment, SegmentKind};
