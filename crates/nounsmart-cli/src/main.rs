//! nounsmart CLI — practice regular plural nouns in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "nounsmart",
    version,
    about = "Practice regular plural nouns (-s, -es, -ies)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz
    Play {
        /// Level to start on: s, es or ies
        #[arg(long)]
        level: Option<String>,

        /// Seed for a repeatable noun order
        #[arg(long)]
        seed: Option<u64>,

        /// Noun list: "builtin", an http(s) URL, or a CSV file path
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show how many nouns each level has
    Levels {
        /// Noun list: "builtin", an http(s) URL, or a CSV file path
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the plural of one or more nouns
    Plural {
        /// Singular nouns
        words: Vec<String>,
    },

    /// Check a noun list for misfiled or duplicate nouns
    Validate {
        /// Noun list: "builtin", an http(s) URL, or a CSV file path
        #[arg(long)]
        source: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with the quiz on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            level,
            seed,
            source,
            config,
        } => commands::play::execute(level, seed, source, config).await,
        Commands::Levels {
            source,
            config,
            format,
        } => commands::levels::execute(source, config, format).await,
        Commands::Plural { words } => commands::plural::execute(words),
        Commands::Validate { source, config } => {
            commands::validate::execute(source, config).await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
