//! Ancient Language Name Generator CLI
//!
//! Runs the interactive menu by default, or a one-shot command.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use namegen::shell::{write_json, write_numbered};
use namegen::{Gender, GeneratorConfig, NameComposer, NameTables, Shell};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "namegen", version, about = "Ancient Language Name Generator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file overriding count range, middle chance and seed
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible output (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate names for one category and exit
    Generate {
        /// Language category, e.g. Latin or Norse
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// How many names to generate (clamped to the configured range)
        #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,

        /// Gender preference: male, female or unisex (does not affect output)
        #[arg(short, long, default_value = "unisex")]
        gender: String,

        /// Print a JSON array instead of a numbered list
        #[arg(long)]
        json: bool,
    },

    /// List the available language categories
    List {
        /// Print the full fragment tables as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    debug!(?config, "Configuration resolved");

    let tables = NameTables::ancient();
    let composer = NameComposer::new(&tables).with_middle_chance(config.middle_chance);
    let mut rng = config.rng();

    match cli.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&composer, &config, &mut rng, stdin.lock(), stdout.lock()).run()?;
        }
        Some(Commands::Generate { category, count, gender, json }) => {
            let gender: Gender = gender.parse().unwrap_or_default();
            let count = config.clamp_count(count);
            let names = composer.generate(&mut rng, &category, gender, count)?;

            let mut stdout = io::stdout().lock();
            if json {
                write_json(&mut stdout, &names)?;
            } else {
                write_numbered(&mut stdout, &names)?;
            }
        }
        Some(Commands::List { json }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else {
                for category in tables.categories() {
                    println!("{}", category);
                }
            }
        }
    }

    Ok(())
}
