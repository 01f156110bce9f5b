//! palcheck CLI
//!
//! Command-line front end for the palindrome evaluator

use clap::{Parser, Subcommand};
use palcheck_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "palcheck")]
#[command(about = "palcheck - Palindrome evaluation", long_about = None)]
struct Cli {
    /// Human-readable logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON logs on stderr
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate one phrase with selectable normalization
    Check(commands::check::CheckArgs),
    /// Evaluate one phrase with every normalization step on
    Quick(commands::quick::QuickArgs),
    /// Evaluate phrases read line by line from stdin until `done`
    Session(commands::session::SessionArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logging_facility::init(Profile::Production);
    } else if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Quick(args) => commands::quick::execute(args),
        Commands::Session(args) => commands::session::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
