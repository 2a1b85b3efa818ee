// WHY: standalone token cleanup shared by the scanner and span parser
// Alias comparison and numeric parsing both need punctuation-free tokens

/// Strip leading and trailing punctuation from a token.
///
/// Interior punctuation is preserved: `"Gen."` becomes `"Gen"`, but
/// `"a.m."` keeps its interior dot as `"a.m"` loses only the trailing one.
/// Whitespace-split tokens never contain spaces, so no trimming of
/// whitespace is performed here.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Strip punctuation and lowercase in one pass, for alias comparison.
pub fn clean_for_compare(token: &str) -> String {
    strip_punctuation(token).to_lowercase()
}

/// Parse a token as a number after punctuation stripping.
///
/// Chapter and verse components arrive with trailing commas or periods
/// attached ("16," at the end of a clause); those must not defeat the parse.
pub fn parse_numeral(token: &str) -> Option<u32> {
    strip_punctuation(token).parse().ok()
}
