// WHY: span parsing is all-or-nothing
// A chat message is full of tokens that merely resemble references, so
// every failure here is silent: the caller drops the mention and moves on.
// Each parse step returns a value the caller checks; no state survives a
// failed component parse

use crate::normalize::parse_numeral;
use crate::reference::{BookMention, ReferenceSpan};
use crate::tokenize;
use tracing::debug;

/// Parse the token immediately following a mention as a chapter:verse span.
///
/// Accepted notations:
/// - `chapter:verse` — the verse applies to both ends of the span
/// - `chapter:verse-verse` — a verse range within one chapter
/// - `chapter:verse-chapter:verse` — a range spanning chapters
///
/// Anything else is `None`: no trailing token, no colon, more than two
/// colons, more than one dash in the verse part, or any component that does
/// not parse as a number after punctuation stripping. A dash with a missing
/// or unparsable second half never collapses the end back onto the start.
pub fn parse_span(mention: &BookMention, message: &str) -> Option<ReferenceSpan> {
    let token = tokenize::token_at(message, mention.token_index + 1)?;
    let span = parse_span_token(token.text);
    if span.is_none() {
        debug!("No usable span after {} in {:?}", mention.name, token.text);
    }
    span
}

/// Parse one candidate span token. Pure and deterministic; exposed to the
/// crate so property tests can hit it without assembling messages.
pub(crate) fn parse_span_token(token: &str) -> Option<ReferenceSpan> {
    let span = match token.matches(':').count() {
        1 => parse_single_chapter(token)?,
        2 => parse_chapter_range(token)?,
        _ => return None,
    };
    // A span that parsed but starts at zero is still unusable.
    span.is_valid().then_some(span)
}

/// `chapter:verse` or `chapter:verse-verse`.
fn parse_single_chapter(token: &str) -> Option<ReferenceSpan> {
    let (chapter_part, verse_part) = token.split_once(':')?;
    let chapter = parse_numeral(chapter_part)?;

    let verses: Vec<&str> = verse_part.split('-').collect();
    // Tracked from the split itself, not inferred from a zero ending verse:
    // "5-" has a dash and must fail, "5" has none and defaults the end.
    let dash_present = verses.len() > 1;
    if verses.len() > 2 {
        return None;
    }

    let starting_verse = parse_numeral(verses[0])?;
    let ending_verse = if dash_present {
        parse_numeral(verses[1])?
    } else {
        starting_verse
    };

    Some(ReferenceSpan {
        starting_chapter: chapter,
        starting_verse,
        ending_chapter: chapter,
        ending_verse,
    })
}

/// `chapter:verse-chapter:verse`.
fn parse_chapter_range(token: &str) -> Option<ReferenceSpan> {
    let pairs: Vec<&str> = token.split('-').collect();
    if pairs.len() != 2 {
        return None;
    }

    let (start_chapter, start_verse) = pairs[0].split_once(':')?;
    let (end_chapter, end_verse) = pairs[1].split_once(':')?;

    Some(ReferenceSpan {
        starting_chapter: parse_numeral(start_chapter)?,
        starting_verse: parse_numeral(start_verse)?,
        ending_chapter: parse_numeral(end_chapter)?,
        ending_verse: parse_numeral(end_verse)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(message: &str, mention_index: usize) -> Option<ReferenceSpan> {
        parse_span(&BookMention::new("John", mention_index), message)
    }

    fn span(sc: u32, sv: u32, ec: u32, ev: u32) -> ReferenceSpan {
        ReferenceSpan {
            starting_chapter: sc,
            starting_verse: sv,
            ending_chapter: ec,
            ending_verse: ev,
        }
    }

    #[test]
    fn test_bare_verse_defaults_end() {
        assert_eq!(parse("John 3:16", 0), Some(span(3, 16, 3, 16)));
    }

    #[test]
    fn test_verse_range_single_chapter() {
        assert_eq!(parse("1 Corinthians 13:4-7", 1), Some(span(13, 4, 13, 7)));
    }

    #[test]
    fn test_chapter_spanning_range() {
        assert_eq!(parse("Genesis 1:1-2:3", 0), Some(span(1, 1, 2, 3)));
    }

    #[test]
    fn test_no_colon_is_not_found() {
        assert_eq!(parse("2 John 5", 1), None);
        assert_eq!(parse("John chapter three", 0), None);
    }

    #[test]
    fn test_missing_trailing_token_is_not_found() {
        assert_eq!(parse("John", 0), None);
        assert_eq!(parse("Psalms 151", 1), None);
    }

    #[test]
    fn test_dangling_dash_never_collapses() {
        assert_eq!(parse("John 3:16-", 0), None);
        assert_eq!(parse("John 3:16-x", 0), None);
    }

    #[test]
    fn test_too_many_dashes_or_colons() {
        assert_eq!(parse("John 3:1-2-3", 0), None);
        assert_eq!(parse("John 1:2:3:4", 0), None);
        assert_eq!(parse("Genesis 1:1-2:3-4:5", 0), None);
    }

    #[test]
    fn test_unparsable_component_abandons_whole_span() {
        assert_eq!(parse("John three:16", 0), None);
        assert_eq!(parse("John 3:sixteen", 0), None);
        assert_eq!(parse("Genesis 1:1-two:3", 0), None);
    }

    #[test]
    fn test_zero_chapter_or_verse_is_invalid() {
        assert_eq!(parse("John 0:16", 0), None);
        assert_eq!(parse("John 3:0", 0), None);
    }

    #[test]
    fn test_trailing_punctuation_on_components() {
        assert_eq!(parse("John 3:16.", 0), Some(span(3, 16, 3, 16)));
        assert_eq!(parse("John (3:16)", 0), Some(span(3, 16, 3, 16)));
        assert_eq!(parse("Genesis 1:1-2:3,", 0), Some(span(1, 1, 2, 3)));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let message = "1 Corinthians 13:4-7 etc";
        let mention = BookMention::new("1 Corinthians", 1);
        let first = parse_span(&mention, message);
        let second = parse_span(&mention, message);
        assert_eq!(first, second);
        assert_eq!(first, Some(span(13, 4, 13, 7)));
    }

    #[test]
    fn test_chapter_range_missing_dash() {
        // Two colons but no dash: not two chapter:verse pairs.
        assert_eq!(parse_span_token("1:1:2"), None);
    }
}
