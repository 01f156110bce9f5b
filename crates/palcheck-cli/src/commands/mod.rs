pub mod check;
pub mod quick;
pub mod session;

use std::path::Path;

use clap::Args;
use palcheck_core::NormalizationOptions;
use palcheck_engine::profile::parse_profile_file;
use palcheck_engine::{OutputFormat, Profile};

/// Normalization flags shared by the commands that take them
///
/// When none is given, the profile's options apply.
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// Remove whitespace before comparing
    #[arg(long)]
    pub ignore_spaces: bool,

    /// Remove everything but ASCII letters and digits before comparing
    #[arg(long)]
    pub ignore_punctuation: bool,

    /// Compare case-insensitively
    #[arg(long)]
    pub case_insensitive: bool,

    /// Enable every normalization step
    #[arg(long, conflicts_with_all = ["ignore_spaces", "ignore_punctuation", "case_insensitive", "strict"])]
    pub all: bool,

    /// Disable every normalization step
    #[arg(long, conflicts_with_all = ["ignore_spaces", "ignore_punctuation", "case_insensitive"])]
    pub strict: bool,
}

impl OptionArgs {
    pub fn resolve(&self, profile: &Profile) -> NormalizationOptions {
        if self.all {
            NormalizationOptions::all()
        } else if self.strict {
            NormalizationOptions::none()
        } else if self.ignore_spaces || self.ignore_punctuation || self.case_insensitive {
            NormalizationOptions::new(
                self.ignore_spaces,
                self.ignore_punctuation,
                self.case_insensitive,
            )
        } else {
            profile.options
        }
    }
}

/// Load the profile at `path`, or the built-in default
pub fn load_profile(path: Option<&Path>) -> Result<Profile, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(parse_profile_file(p)?),
        None => Ok(Profile::default()),
    }
}

/// Explicit `--format` wins over the profile's format
pub fn resolve_format(flag: Option<OutputFormat>, profile: &Profile) -> OutputFormat {
    flag.unwrap_or(profile.format)
}
