//! Target-script pipelines
//!
//! Each target alphabet is described by a data-driven script definition
//! (letters, multi-letter sequences, punctuation and word-initial rules)
//! and exposed to the word pipeline through [`ScriptRules`].

pub mod config;
pub mod interface;
pub mod loader;
pub mod rules;
pub mod runtime;
pub mod tables;

pub use config::ScriptConfig;
pub use interface::ScriptRules;
pub use loader::{embedded_codes, embedded_source, get_rules};
pub use rules::{FirstCharRule, RuleSet};
pub use runtime::ConfigurableScriptRules;
