//! Session command
//!
//! Usage: palcheck session [--quick] [--profile <FILE>]
//!
//! Reads one phrase per line from stdin. A line reading `done` ends the
//! session; rejected lines print feedback and the session continues.

use clap::Args;
use palcheck_engine::errors::is_user_rejection;
use palcheck_engine::{render, OutputFormat, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::{load_profile, resolve_format, OptionArgs};

/// Line that ends the session
pub const DONE_COMMAND: &str = "done";

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Use the simplified form for every line
    #[arg(long)]
    pub quick: bool,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Output format: text, html or json (default: from profile)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Profile YAML file
    #[arg(short, long)]
    pub profile: Option<PathBuf>,
}

/// Execute session command
pub fn execute(args: SessionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = load_profile(args.profile.as_deref())?;
    let opts = args.options.resolve(&profile);
    let format = resolve_format(args.format, &profile);

    let mut session = Session::from_profile(&profile);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;

        if line.trim() == DONE_COMMAND {
            session.end_session();
            writeln!(stdout, "{}", render::render_session_ended(format))?;
            break;
        }

        let rendered = if args.quick {
            session
                .submit_quick(&line)
                .and_then(|sub| render::render_quick(&sub, format))
        } else {
            session
                .submit(&line, opts)
                .and_then(|sub| render::render(&sub, format))
        };

        match rendered {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) if is_user_rejection(&e) => {
                writeln!(stdout, "{}", render::render_rejection(&e, format))?
            }
            Err(e) => return Err(e.into()),
        }

        if format != OutputFormat::Json {
            writeln!(stdout)?;
        }
    }

    session.end_session();
    Ok(())
}
