//! Basic usage of the transliteration API
//!
//! Run with: cargo run --example basic_usage

use hytranslit_core::{transliterate, Input, Script, Transliterator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Բարև, Երևան։ Ով է այնտեղ՞";

    // One-off calls by script tag
    for script in Script::all() {
        println!("{:>8}: {}", script.name(), transliterate(text, script.code())?);
    }

    // Reusable transliterator with statistics
    let transliterator = Transliterator::for_script("ru")?;
    let output = transliterator.process(Input::from_text(text))?;
    println!("\n{}", output.text);
    println!(
        "{} words in {} segments, {:?}",
        output.metadata.stats.word_count,
        output.metadata.stats.segment_count,
        output.metadata.duration
    );

    Ok(())
}
