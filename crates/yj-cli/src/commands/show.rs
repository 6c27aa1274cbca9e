use std::path::Path;

use colored::Colorize;

use yj_core::{CatalogNumber, Hexagram};

pub fn run(dir: &Path, number: u32) -> Result<(), String> {
    let catalog = super::open_catalog(dir)?;
    let record = catalog.get(number).map_err(|e| e.to_string())?;

    let number = CatalogNumber::new(number).map_err(|e| e.to_string())?;
    let hexagram = Hexagram::from_catalog_number(number);
    super::print_record(number.get(), &hexagram.to_glyphs(), &record);

    println!();
    println!("  {}", "Lines".underline());
    for line in &record.lines {
        println!("  {}. {}", line.position, line.text.bold());
        println!("     {}", line.interpretation);
    }

    Ok(())
}
