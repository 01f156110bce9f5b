use crate::model::NormalizationOptions;

/// Normalize raw text according to `opts`
///
/// Steps run in a fixed order:
/// 1. `case_insensitive`: lowercase the whole string
/// 2. `ignore_spaces`: drop every Unicode whitespace character
/// 3. `ignore_punctuation`: drop everything that is not an ASCII letter or digit
///
/// Step 3 already removes whitespace, so with both 2 and 3 enabled the
/// output is identical to step 3 alone. The function is idempotent for a
/// fixed `opts`.
pub fn clean(raw: &str, opts: NormalizationOptions) -> String {
    let mut s = if opts.case_insensitive {
        raw.to_lowercase()
    } else {
        raw.to_string()
    };

    if opts.ignore_spaces {
        s.retain(|c| !c.is_whitespace());
    }

    if opts.ignore_punctuation {
        s.retain(|c| c.is_ascii_alphanumeric());
    }

    s
}
