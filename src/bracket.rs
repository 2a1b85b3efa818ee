// WHY: callers excluding footnote-style citations need to know whether a
// mention sits inside a bracketed span. Every non-nested span is checked
// with an explicit loop; an early return from here aborts the whole scan,
// not just one iteration

use crate::reference::BookMention;
use crate::tokenize;
use regex::Regex;
use tracing::debug;

/// True iff the mention's surface token lies within a matched `open…close`
/// span of the message.
///
/// All non-nested bracket spans are examined, returning on the first one
/// containing the token's byte offset. An unmatched opening bracket never
/// forms a span.
pub fn is_bracketed(pair: (char, char), mention: &BookMention, message: &str) -> bool {
    let Some(token) = tokenize::token_at(message, mention.token_index) else {
        return false;
    };

    let (open, close) = pair;
    let open = regex::escape(&open.to_string());
    let close = regex::escape(&close.to_string());
    // Innermost spans only: the class excludes both brackets so nested or
    // ragged input degrades to the tightest matching pairs.
    let pattern = format!("{open}[^{open}{close}]*{close}");
    let Ok(spans) = Regex::new(&pattern) else {
        debug!("Bracket pattern failed to compile for pair {:?}", pair);
        return false;
    };

    for span in spans.find_iter(message) {
        if span.start() <= token.offset && token.offset < span.end() {
            return true;
        }
    }
    false
}
