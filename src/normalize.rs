//! Text canonicalization applied before every string comparison.
//!
//! Model output and curated ground truth disagree constantly on surface
//! form: curly quotes, em dashes in date ranges, `&` vs "and", stray
//! punctuation, doubled spaces. Every comparison in the scoring layer goes
//! through [`normalize`] first so those differences never count against a
//! prediction.

/// Canonicalize free text for comparison.
///
/// Lowercases, folds curly quotes to straight quotes, folds en/em dashes to
/// spaces, expands `&` to "and", strips sentence punctuation, collapses
/// whitespace runs, and trims. Total and deterministic; never fails.
///
/// The result is a fixed point: normalizing twice yields the same string.
///
/// # Examples
///
/// ```
/// use curio::normalize::normalize;
///
/// assert_eq!(normalize("  Arts & Crafts  "), "arts and crafts");
/// assert_eq!(normalize("Tiffany’s “Favrile” vase"), "tiffany's \"favrile\" vase");
/// assert_eq!(normalize("1920—1930, France."), "1920 1930 france");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' => folded.push('\''),
            '\u{201C}' | '\u{201D}' => folded.push('"'),
            '\u{2013}' | '\u{2014}' => folded.push(' '),
            '&' => folded.push_str(" and "),
            '.' | ',' | ';' | ':' | '!' | '?' | '(' | ')' => {}
            c => folded.extend(c.to_lowercase()),
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
