pub mod cast;
pub mod check;
pub mod show;

use std::path::Path;

use colored::Colorize;

use yj_reading::{HexagramCatalog, HexagramRecord, ReadingConfig};

/// Build a catalog over `dir`, failing early if the directory is missing.
fn open_catalog(dir: &Path) -> Result<HexagramCatalog, String> {
    if !dir.is_dir() {
        return Err(format!("resource directory not found: {}", dir.display()));
    }
    tracing::debug!(dir = %dir.display(), "opening catalog");
    Ok(ReadingConfig::default().with_resources_dir(dir).catalog())
}

/// Print the header block of a record: name, trigrams, meaning, judgment, image.
fn print_record(number: u8, glyphs: &str, record: &HexagramRecord) {
    let info = &record.hexagram;
    println!(
        "  {} {} {}",
        format!("{number:>2}").dimmed(),
        info.name.bold(),
        glyphs
    );
    if !info.subtitle.is_empty() {
        println!("     {}", info.subtitle.dimmed());
    }
    println!();
    println!(
        "  above:    {} ({})",
        info.trigrams.above.name, info.trigrams.above.attributes
    );
    println!(
        "  below:    {} ({})",
        info.trigrams.below.name, info.trigrams.below.attributes
    );
    println!();
    println!("  {}", "Meaning".underline());
    println!("  {}", info.meaning.description);
    println!();
    println!("  {}", "Judgment".underline());
    println!("  {}", record.judgment.description);
    for point in &record.judgment.analysis {
        println!("    - {point}");
    }
    println!();
    println!("  {}", "Image".underline());
    println!("  {}", record.image.description);
    println!("  lesson:   {}", record.image.lesson);
    if let Some(warning) = &record.image.warning {
        println!("  warning:  {}", warning.yellow());
    }
}
