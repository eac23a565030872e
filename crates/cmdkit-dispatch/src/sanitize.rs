//! Command name canonicalization.

/// Character substituted for anything that is not an ASCII letter or digit.
pub const SEPARATOR: char = '-';

/// Map a raw identifier to the name it is dispatched under.
///
/// ASCII letters and digits are kept, every other character becomes
/// [`SEPARATOR`]. The result has as many characters as the input, so
/// `add_two_values` is triggered by `add-two-values`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { SEPARATOR })
        .collect()
}
