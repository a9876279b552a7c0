//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use entlint::output::OutputMode;

/// entlint - Lint HTML documents for entity reference problems
#[derive(Parser, Debug)]
#[command(
    name = "entlint",
    version,
    about = "Lint HTML documents for entity reference problems",
    long_about = "Scan an HTML document line by line for malformed entity references\n\
                  and suspicious URL patterns.\n\n\
                  Findings stream to stdout as they are discovered; the exit code\n\
                  reports the overall verdict (0 = clean, 1 = issues found)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Document to validate (falls back to the `.entlint.toml` target, then
    /// the built-in default)
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in rules
    Rules,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Rules) => commands::rules(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("entlint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => commands::validate(cli.path.as_deref(), output_mode),
    }
}
