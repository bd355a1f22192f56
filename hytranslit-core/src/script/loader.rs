//! Script definition loader
//!
//! Manages the embedded script definitions with process-wide caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::script::{interface::ScriptRules, runtime::ConfigurableScriptRules};

/// Embedded definitions, keyed by script code
const EMBEDDED_SOURCES: [(&str, &str); 2] = [
    ("en", include_str!("../../configs/scripts/latin.toml")),
    ("ru", include_str!("../../configs/scripts/cyrillic.toml")),
];

/// Parsed embedded definitions
static EMBEDDED: OnceLock<HashMap<&'static str, Arc<dyn ScriptRules>>> = OnceLock::new();

/// Load script rules by code
pub fn get_rules(code: &str) -> Result<Arc<dyn ScriptRules>> {
    // Parse embedded definitions on first access
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map: HashMap<&'static str, Arc<dyn ScriptRules>> = HashMap::new();

        for (code, source) in EMBEDDED_SOURCES {
            match ConfigurableScriptRules::from_toml_str(source) {
                Ok(rules) => {
                    tracing::debug!(code, "loaded embedded script definition");
                    map.insert(code, Arc::new(rules));
                }
                Err(e) => {
                    tracing::warn!(code, error = %e, "failed to load embedded script definition");
                }
            }
        }

        map
    });

    embedded
        .get(code)
        .cloned()
        .ok_or_else(|| Error::InvalidScript(code.to_string()))
}

/// Raw TOML of an embedded definition, for use as a template
pub fn embedded_source(code: &str) -> Option<&'static str> {
    EMBEDDED_SOURCES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, source)| *source)
}

/// Codes of all embedded definitions
pub fn embedded_codes() -> impl Iterator<Item = &'static str> {
    EMBEDDED_SOURCES.iter().map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_rules() {
        let latin = get_rules("en").unwrap();
        assert_eq!(latin.code(), "en");

        let cyrillic = get_rules("ru").unwrap();
        assert_eq!(cyrillic.name(), "Cyrillic");
    }

    #[test]
    fn test_rules_are_cached() {
        let a = get_rules("en").unwrap();
        let b = get_rules("en").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unknown_code() {
        let err = get_rules("de").err().unwrap();
        assert!(matches!(err, Error::InvalidScript(ref code) if code == "de"));
        assert!(get_rules("EN").is_err());
    }

    #[test]
    fn test_embedded_source() {
        assert!(embedded_source("ru").unwrap().contains("code = \"ru\""));
        assert!(embedded_source("hy").is_none());
        assert_eq!(embedded_codes().collect::<Vec<_>>(), vec!["en", "ru"]);
    }
}
