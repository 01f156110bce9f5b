/// Reverse `s` one `char` (Unicode scalar value) at a time
///
/// Combining marks and multi-scalar grapheme clusters are not kept together:
/// `"e\u{301}"` reverses to `"\u{301}e"`. Reversal is a permutation, so the
/// output always has the same number of chars as the input.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
