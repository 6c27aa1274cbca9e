//! CLI frontend for the Yijing casting engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yj_reading::config::DEFAULT_RESOURCES_DIR;

#[derive(Parser)]
#[command(
    name = "yijing",
    about = "Cast a Yijing figure and look up its hexagrams",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a figure and print the reading
    Cast {
        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// Cast these six line values (bottom first) instead of random lines
        #[arg(long, value_delimiter = ',')]
        lines: Option<Vec<u8>>,

        /// Print the full reading context as JSON
        #[arg(long)]
        json: bool,

        /// Directory containing hexagram_NN.json records
        #[arg(short, long, env = "YIJING_RESOURCES", default_value = DEFAULT_RESOURCES_DIR)]
        dir: PathBuf,
    },

    /// Show the record for one hexagram
    Show {
        /// Catalog number (1-64)
        number: u32,

        /// Directory containing hexagram_NN.json records
        #[arg(short, long, env = "YIJING_RESOURCES", default_value = DEFAULT_RESOURCES_DIR)]
        dir: PathBuf,
    },

    /// Validate all 64 hexagram records
    Check {
        /// Directory containing hexagram_NN.json records
        #[arg(short, long, env = "YIJING_RESOURCES", default_value = DEFAULT_RESOURCES_DIR)]
        dir: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Cast {
            seed,
            lines,
            json,
            dir,
        } => commands::cast::run(&dir, seed, lines.as_deref(), json),
        Commands::Show { number, dir } => commands::show::run(&dir, number),
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
