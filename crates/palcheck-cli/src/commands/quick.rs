//! Quick command: the simplified form, every normalization step on
//!
//! Usage: palcheck quick <TEXT> [--format <FORMAT>]

use clap::Args;
use palcheck_engine::{render, OutputFormat, Session};

#[derive(Debug, Args)]
pub struct QuickArgs {
    /// Text to evaluate
    pub text: String,

    /// Output format: text, html or json
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute quick command
pub fn execute(args: QuickArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::default();
    let submission = session.submit_quick(&args.text)?;

    println!("{}", render::render_quick(&submission, args.format)?);

    Ok(())
}
