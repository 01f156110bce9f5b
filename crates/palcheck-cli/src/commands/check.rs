//! Check command
//!
//! Usage: palcheck check <TEXT> [--ignore-spaces] [--ignore-punctuation] [--case-insensitive]

use clap::Args;
use palcheck_engine::{render, OutputFormat, Session};
use std::path::PathBuf;

use super::{load_profile, resolve_format, OptionArgs};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Text to evaluate
    pub text: String,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Output format: text, html or json (default: from profile)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Profile YAML file
    #[arg(short, long)]
    pub profile: Option<PathBuf>,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = load_profile(args.profile.as_deref())?;
    let opts = args.options.resolve(&profile);
    let format = resolve_format(args.format, &profile);

    let mut session = Session::from_profile(&profile);
    let submission = session.submit(&args.text, opts)?;

    println!("{}", render::render(&submission, format)?);

    Ok(())
}
