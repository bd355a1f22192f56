//! Tests for the public API

#[cfg(test)]
mod api_tests {
    use crate::api::*;

    #[test]
    fn test_transliterator_creation() {
        let default = Transliterator::new();
        assert_eq!(default.config().script(), Script::Latin);
        assert_eq!(default.script_code(), "en");

        let ru = Transliterator::for_script("ru").unwrap();
        assert_eq!(ru.config().script(), Script::Cyrillic);
        assert_eq!(ru.script_name(), "Cyrillic");

        let config = Config::builder().with_script(Script::Cyrillic).build().unwrap();
        let custom = Transliterator::with_config(config).unwrap();
        assert_eq!(custom.script_code(), "ru");
    }

    #[test]
    fn test_unknown_script_tag() {
        let err = Transliterator::for_script("de").unwrap_err();
        assert!(matches!(err, Error::InvalidScript(ref tag) if tag == "de"));

        assert!(matches!(
            transliterate("Բարև", "EN"),
            Err(Error::InvalidScript(_))
        ));
        assert!(matches!(transliterate("Բարև", ""), Err(Error::InvalidScript(_))));
    }

    #[test]
    fn test_missing_script_file() {
        let err = Config::builder()
            .script_file("/definitely/not/here.toml")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_input_variants() {
        let text = Input::from_text("Բարև").into_text().unwrap();
        assert_eq!(text, "Բարև");

        let bytes = Input::from_bytes("Երևան".as_bytes().to_vec())
            .into_text()
            .unwrap();
        assert_eq!(bytes, "Երևան");

        let invalid = Input::from_bytes(vec![0xff, 0xfe, 0xfd]).into_text();
        assert!(matches!(invalid, Err(Error::InvalidInput(_))));

        let missing = Input::from_file("/nonexistent/input.txt").into_text();
        assert!(matches!(missing, Err(Error::Infrastructure(_))));
    }

    #[test]
    fn test_file_processing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Կենտրոն\n").unwrap();

        let output = Transliterator::new()
            .process(Input::from_file(&path))
            .unwrap();
        assert_eq!(output.text, "Kentron\n");
        assert_eq!(format!("{:?}", Input::from_file(&path)), format!("Input::File({})", path.display()));
    }

    #[test]
    fn test_top_level_functions() {
        assert_eq!(transliterate("Կենտրոն", "en").unwrap(), "Kentron");
        assert_eq!(transliterate("Երևան", "ru").unwrap(), "Ереван");
        assert_eq!(transliterate_default("Ոչ").unwrap(), "Voch");
    }

    #[test]
    fn test_basic_processing() {
        let transliterator = Transliterator::for_script("en").unwrap();
        let output = transliterator
            .process(Input::from_text("Ով է այնտեղ։"))
            .unwrap();

        assert_eq!(output.text, "Ov e ayntegh.");
        assert_eq!(output.metadata.script, "en");
        assert_eq!(output.metadata.stats.word_count, 3);
        assert_eq!(output.metadata.stats.bytes_processed, "Ով է այնտեղ։".len());
        assert_eq!(output.metadata.stats.chars_processed, 12);
    }

    #[test]
    fn test_stream_processing() {
        let transliterator = Transliterator::new();
        let reader = std::io::Cursor::new("ՄԱՍՍԵՐԼԻ՞".as_bytes().to_vec());
        let output = transliterator.process_stream(reader).unwrap();
        assert_eq!(output.text, "MASSERLI?");
    }

    #[test]
    fn test_word_entry_point() {
        let transliterator = Transliterator::new();
        assert_eq!(transliterator.transliterate_word("Երևան"), "Yerevan");
        assert_eq!(transliterator.transliterate_word(""), "");
    }

    #[test]
    fn test_script_parsing() {
        assert_eq!("en".parse::<Script>().unwrap(), Script::Latin);
        assert_eq!("ru".parse::<Script>().unwrap(), Script::Cyrillic);
        assert!("latin".parse::<Script>().is_err());
        assert_eq!(Script::Cyrillic.to_string(), "Cyrillic");
        assert_eq!(Script::all().len(), 2);
    }
}
