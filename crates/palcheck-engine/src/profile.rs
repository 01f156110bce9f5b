//! Evaluation profiles
//!
//! A profile is a small YAML file that fixes the defaults a front end uses:
//!
//! ```yaml
//! schema_version: 0
//! options:
//!   ignore_spaces: true
//!   ignore_punctuation: true
//!   case_insensitive: true
//! validation:
//!   min_length: 2
//! format: text
//! ```
//!
//! Every section except `schema_version` may be omitted.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use palcheck_core::{log_op_end, log_op_error, log_op_start, NormalizationOptions};
use palcheck_core_types::schema::OP_LOAD_PROFILE;
use serde::{Deserialize, Serialize};

use crate::errors::{invalid_profile, io_error, Result};
use crate::validation::ValidationPolicy;

/// The only profile schema version understood by this build
pub const PROFILE_SCHEMA_VERSION: u32 = 0;

/// How a submission is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{}', expected text, html or json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Options used when the caller does not pick any
    #[serde(default = "NormalizationOptions::all")]
    pub options: NormalizationOptions,

    #[serde(default)]
    pub validation: ValidationPolicy,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            options: NormalizationOptions::all(),
            validation: ValidationPolicy::default(),
            format: OutputFormat::Text,
        }
    }
}

/// Parse and validate a profile from YAML text
///
/// # Errors
/// `InvalidProfile` if the YAML does not parse or fails validation
pub fn parse_profile_str(content: &str) -> Result<Profile> {
    let profile: Profile = serde_yaml::from_str(content)
        .map_err(|e| invalid_profile(format!("YAML parse error: {}", e)))?;

    validate_profile(&profile)?;

    Ok(profile)
}

/// Read, parse and validate a profile file
///
/// # Errors
/// * `Io` - the file could not be read
/// * `InvalidProfile` - the content is not a valid profile
pub fn parse_profile_file(path: &Path) -> Result<Profile> {
    let path_str = path.display().to_string();
    log_op_start!(OP_LOAD_PROFILE, path = path_str.as_str());
    let start = Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|e| io_error(OP_LOAD_PROFILE, e))
        .and_then(|content| parse_profile_str(&content));

    match result {
        Ok(profile) => {
            log_op_end!(
                OP_LOAD_PROFILE,
                duration_ms = start.elapsed().as_millis() as u64,
                path = path_str.as_str(),
                format = %profile.format
            );
            Ok(profile)
        }
        Err(e) => {
            log_op_error!(
                OP_LOAD_PROFILE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = path_str.as_str()
            );
            Err(e)
        }
    }
}

fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.schema_version != PROFILE_SCHEMA_VERSION {
        return Err(invalid_profile(format!(
            "Unsupported schema_version: {}. Expected {}",
            profile.schema_version, PROFILE_SCHEMA_VERSION
        )));
    }

    if profile.validation.min_length == 0 {
        return Err(invalid_profile(
            "validation.min_length must be at least 1",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palcheck_core::errors::ExErrorKind;

    #[test]
    fn test_parse_full_profile() {
        let yaml = r#"
schema_version: 0
options:
  ignore_spaces: true
  ignore_punctuation: false
  case_insensitive: true
validation:
  min_length: 3
format: html
"#;

        let profile = parse_profile_str(yaml).unwrap();
        assert_eq!(profile.options, NormalizationOptions::new(true, false, true));
        assert_eq!(profile.validation.min_length, 3);
        assert_eq!(profile.format, OutputFormat::Html);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let profile = parse_profile_str("schema_version: 0\n").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_partial_validation_section() {
        let yaml = "schema_version: 0\nvalidation: {}\n";
        let profile = parse_profile_str(yaml).unwrap();
        assert_eq!(profile.validation, ValidationPolicy::default());
    }

    #[test]
    fn test_reject_invalid_schema_version() {
        let err = parse_profile_str("schema_version: 7\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidProfile);
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn test_reject_zero_min_length() {
        let yaml = "schema_version: 0\nvalidation:\n  min_length: 0\n";
        let err = parse_profile_str(yaml).unwrap_err();
        assert!(err.message().contains("min_length"));
    }

    #[test]
    fn test_reject_partial_options() {
        let yaml = "schema_version: 0\noptions:\n  ignore_spaces: true\n";
        let err = parse_profile_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidProfile);
        assert!(err.message().contains("YAML parse error"));
    }

    #[test]
    fn test_reject_unknown_format() {
        let err = parse_profile_str("schema_version: 0\nformat: pdf\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidProfile);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Html.to_string(), "html");
    }
}
