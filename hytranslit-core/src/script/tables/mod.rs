//! Runtime tables for script pipelines
//!
//! All tables are built once from a script definition and are read-only
//! afterwards. Lookups never allocate.

pub mod character;
pub mod ligature;
pub mod punctuation;
pub mod sequence;

pub use character::{CharacterMap, VowelSet};
pub use ligature::expand_ligatures;
pub use punctuation::PunctuationMap;
pub use sequence::{SentinelMap, Sequence};
