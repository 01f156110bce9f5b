use serde::{Deserialize, Serialize};

/// Flags selecting which normalization steps `clean` applies
///
/// The flags are independent. There is deliberately no `Default` impl: the
/// caller decides every flag for each request (from a profile, CLI flags, or
/// the fixed all-true simplified variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Remove every Unicode whitespace character
    pub ignore_spaces: bool,
    /// Remove every character that is not an ASCII letter or digit
    pub ignore_punctuation: bool,
    /// Fold to lowercase before any stripping
    pub case_insensitive: bool,
}

impl NormalizationOptions {
    pub fn new(ignore_spaces: bool, ignore_punctuation: bool, case_insensitive: bool) -> Self {
        Self {
            ignore_spaces,
            ignore_punctuation,
            case_insensitive,
        }
    }

    /// Every normalization step enabled (the simplified form's fixed setting)
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    /// No normalization: the raw text is compared as-is
    pub fn none() -> Self {
        Self::new(false, false, false)
    }

    /// All eight flag combinations, in a stable order
    pub fn combinations() -> impl Iterator<Item = Self> {
        (0u8..8).map(|bits| Self::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_none() {
        let all = NormalizationOptions::all();
        assert!(all.ignore_spaces && all.ignore_punctuation && all.case_insensitive);

        let none = NormalizationOptions::none();
        assert!(!none.ignore_spaces && !none.ignore_punctuation && !none.case_insensitive);
    }

    #[test]
    fn test_combinations_are_exhaustive_and_unique() {
        let combos: std::collections::HashSet<_> = NormalizationOptions::combinations().collect();
        assert_eq!(combos.len(), 8);
        assert!(combos.contains(&NormalizationOptions::all()));
        assert!(combos.contains(&NormalizationOptions::none()));
    }

    #[test]
    fn test_deserialize_snake_case_fields() {
        let json = r#"{"ignore_spaces":true,"ignore_punctuation":false,"case_insensitive":true}"#;
        let opts: NormalizationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts, NormalizationOptions::new(true, false, true));
    }
}
