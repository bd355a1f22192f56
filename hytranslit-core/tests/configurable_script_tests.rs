//! Integration tests for script definitions loaded at runtime

use std::io::Write;
use std::sync::Arc;

use hytranslit_core::script::embedded_source;
use hytranslit_core::{Config, ConfigurableScriptRules, Error, ScriptRules, Transliterator};
use tempfile::NamedTempFile;

fn latin_source() -> &'static str {
    embedded_source("en").unwrap()
}

fn write_definition(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_custom_letters_from_file() {
    let source = latin_source()
        .replace("code = \"en\"", "code = \"en-x\"")
        .replace("\"Խ\" = \"kh\"", "\"Խ\" = \"x\"")
        .replace("\"խ\" = \"kh\"", "\"խ\" = \"x\"");
    let file = write_definition(&source);

    let config = Config::builder().script_file(file.path()).build().unwrap();
    let transliterator = Transliterator::with_config(config).unwrap();

    assert_eq!(transliterator.script_code(), "en-x");
    assert_eq!(transliterator.transliterate("Խաչ"), "Xach");
    assert_eq!(transliterator.transliterate("Երևան"), "Yerevan");
}

#[test]
fn test_definition_without_initial_rules() {
    let source = latin_source()
        .split("[[first_char_rules]]")
        .next()
        .unwrap()
        .to_string();
    let rules = ConfigurableScriptRules::from_toml_str(&source).unwrap();
    assert!(rules.rules().is_empty());

    let transliterator = Transliterator::from_rules(Arc::new(rules));
    assert_eq!(transliterator.transliterate("Երևան"), "Erevan");
    assert_eq!(transliterator.transliterate("ևազգի"), "evazgi");
    assert_eq!(transliterator.transliterate("Ոչ"), "Och");
}

#[test]
fn test_missing_letter_is_rejected() {
    let source = latin_source().replace("\"Ֆ\" = \"f\"\n", "");
    let err = ConfigurableScriptRules::from_toml_str(&source).unwrap_err();
    match err {
        Error::Configuration(message) => assert!(message.contains("Ֆ"), "{message}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_definition_is_rejected() {
    let file = write_definition("[metadata\ncode = ");
    let err = ConfigurableScriptRules::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_unknown_conjunction_sequence_is_rejected() {
    let source = latin_source().replace("sequence = \"ev\"", "sequence = \"nope\"");
    let err = ConfigurableScriptRules::from_toml_str(&source).unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_unreadable_file() {
    let err = ConfigurableScriptRules::from_file("/no/such/definition.toml").unwrap_err();
    assert!(matches!(err, Error::Infrastructure(_)));
}

#[test]
fn test_runtime_rules_match_embedded_rules() {
    let runtime = ConfigurableScriptRules::from_toml_str(latin_source()).unwrap();
    let embedded = hytranslit_core::script::get_rules("en").unwrap();

    for ch in ['Ա', 'ժ', 'ւ', 'Ֆ'] {
        assert_eq!(runtime.map_char(ch), embedded.map_char(ch));
    }
    assert_eq!(runtime.code(), embedded.code());
}
