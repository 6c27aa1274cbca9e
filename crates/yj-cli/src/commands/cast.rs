use std::path::Path;

use colored::Colorize;

use yj_core::{Casting, Figure, Hexagram};
use yj_reading::{ReadingBuilder, ReadingConfig};

pub fn run(dir: &Path, seed: Option<u64>, lines: Option<&[u8]>, json: bool) -> Result<(), String> {
    let catalog = super::open_catalog(dir)?;
    let builder = ReadingBuilder::new(&catalog);

    let casting = match lines {
        Some(values) => {
            let figure = Figure::from_values(values).map_err(|e| e.to_string())?;
            Casting::from_figure(figure)
        }
        None => {
            let mut config = ReadingConfig::default();
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            Casting::cast(&mut config.rng())
        }
    };

    let context = builder
        .build_casting(casting)
        .map_err(|e| format!("reading failed: {e}"))?;

    if json {
        let out = serde_json::to_string_pretty(&context).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let casting = &context.casting;
    println!("  {}  {}", "Cast".bold(), casting.figure());
    println!();
    print_hexagram("Before", casting.before(), &context.before.hexagram.name);
    if casting.is_stable() {
        println!();
        println!("  {}", "No changing lines.".dimmed());
        return Ok(());
    }
    print_hexagram("After", casting.after(), &context.after.hexagram.name);
    println!();
    println!("  {}", "Changing lines".underline());
    for line in &context.relevant_lines {
        println!("  {}. {}", line.position, line.text.bold());
        println!("     {}", line.interpretation);
    }

    Ok(())
}

fn print_hexagram(label: &str, hexagram: Hexagram, name: &str) {
    println!(
        "  {label:<7} {} {:>2}  {}  ({} over {})",
        hexagram.to_glyphs(),
        hexagram.catalog_number().get(),
        name.bold(),
        hexagram.upper_trigram(),
        hexagram.lower_trigram(),
    );
}
