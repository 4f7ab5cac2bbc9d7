//! Beacon CLI - Command-line interface for composing and checking analytics directives.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{check, compose, emit, kinds};

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Analytics directive composition and checking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the client call for a single action
    Compose {
        /// Input action JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as a {kind, args} object instead of a positional row
        #[arg(long)]
        json: bool,
    },
    /// Check every action in a JSON Lines file
    Check {
        /// Path to JSON Lines action file
        file: String,
        /// Exit with error code if any action fails the check
        #[arg(long)]
        strict: bool,
        /// Output verdicts as JSON
        #[arg(long)]
        json: bool,
        /// Stop after checking N actions (default: unlimited)
        #[arg(long)]
        max_actions: Option<u64>,
    },
    /// Run actions through a tracker and print delivered rows
    Emit {
        /// Path to JSON Lines action file (or stdin if not provided)
        file: Option<String>,
        /// Drop contract-violating calls with a warning instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// List registered event kinds and their field contracts
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compose { input, json } => compose::run(input, json),
        Commands::Check {
            file,
            strict,
            json,
            max_actions,
        } => check::run(file, strict, json, max_actions),
        Commands::Emit { file, lenient } => emit::run(file, lenient),
        Commands::Kinds { json } => kinds::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
