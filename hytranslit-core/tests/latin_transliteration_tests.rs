//! End-to-end tests for the Latin pipeline

use hytranslit_core::{transliterate, Input, Transliterator};

fn latin(text: &str) -> String {
    transliterate(text, "en").unwrap()
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(latin("Կենտրոն"), "Kentron");
    assert_eq!(latin("Ոչ"), "Voch");
    assert_eq!(latin("ևազգի"), "yevazgi");
    assert_eq!(latin("Ով է այնտեղ։"), "Ov e ayntegh.");
    assert_eq!(latin("ՄԱՍՍԵՐԼԻ՞"), "MASSERLI?");
}

#[test]
fn test_ye_initial_is_case_sensitive() {
    assert_eq!(latin("Երևան"), "Yerevan");
    assert_eq!(latin("ԵՐԵՎԱՆ"), "YEREVAN");
    // Lowercase initial letter keeps the plain vowel
    assert_eq!(latin("երեկ"), "erek");
    // Mid-word occurrences never take the onset
    assert_eq!(latin("Բերդ"), "Berd");
}

#[test]
fn test_vo_initial() {
    assert_eq!(latin("Որ"), "Vor");
    assert_eq!(latin("ոսկի"), "voski");
    // Before the letter v the onset is dropped
    assert_eq!(latin("Ով"), "Ov");
    assert_eq!(latin("Ոա"), "Oa");
    // A sequence rendered as a vowel counts as a vowel
    assert_eq!(latin("Ոու"), "Ou");
    assert_eq!(latin("Ո"), "VO");
}

#[test]
fn test_conjunction() {
    assert_eq!(latin("և"), "yev");
    assert_eq!(latin("Եւ"), "Yev");
    assert_eq!(latin("ԵՒ"), "YEV");
    // Mid-word the sequence renders without the onset
    assert_eq!(latin("Բարև"), "Barev");
    assert_eq!(latin("բարեւ"), "barev");
}

#[test]
fn test_u_sequence() {
    assert_eq!(latin("ՈՒՍՈՒՑԻՉ"), "USUTSICH");
    assert_eq!(latin("ուսուցիչ"), "usutsich");
    assert_eq!(latin("Ուր"), "Ur");
    assert_eq!(latin("յուղ"), "yugh");
}

#[test]
fn test_ligatures() {
    assert_eq!(latin("\u{FB13}"), "mn");
    assert_eq!(latin("ա\u{FB14}"), "ame");
}

#[test]
fn test_mixed_text() {
    assert_eq!(latin("Hi, Երևան 2024!"), "Hi, Yerevan 2024!");
    assert_eq!(latin("Բարև   աշխարհ"), "Barev   ashkharh");
    assert_eq!(latin("2024թ."), "2024t.");
    assert_eq!(latin("line one\nՄեկ\tերկու"), "line one\nMek\terku");
}

#[test]
fn test_punctuation_everywhere() {
    assert_eq!(latin("՞"), "?");
    assert_eq!(latin("Այո՝ ոչ"), "Ayo, voch");
    assert_eq!(latin("ա֊բ"), "a-b");
    assert_eq!(latin("Ուհ՜"), "Uh!");
}

#[test]
fn test_mixed_casing_discards_interior_capitals() {
    assert_eq!(latin("ԵրևանՔաղաք"), "Yerevankaghak");
    // The first character is capitalized even when it is not a letter
    assert_eq!(latin("«Երևան»"), "«erevan»");
}

#[test]
fn test_non_armenian_text_is_untouched() {
    let text = "Plain ASCII, кириллица и 123 - no Armenian here.";
    assert_eq!(latin(text), text);
    assert_eq!(latin(""), "");
}

#[test]
fn test_processing_stats() {
    let output = Transliterator::new()
        .process(Input::from_text("Բարև, աշխարհ"))
        .unwrap();

    assert_eq!(output.text, "Barev, ashkharh");
    assert_eq!(output.metadata.stats.segment_count, 3);
    assert_eq!(output.metadata.stats.armenian_segment_count, 2);
    assert_eq!(output.metadata.stats.word_count, 2);
}
