// WHY: whitespace tokenization with byte offsets retained
// The bracket filter compares bracket-span offsets against token offsets,
// so plain split_whitespace (which discards positions) is not enough

/// A whitespace-delimited token and its byte offset in the source message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Split a message into whitespace-delimited tokens, keeping byte offsets.
///
/// Token texts are slices of the original message; the token sequence is
/// identical to `str::split_whitespace` output.
pub fn tokens(message: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in message.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                out.push(Token {
                    text: &message[s..i],
                    offset: s,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        out.push(Token {
            text: &message[s..],
            offset: s,
        });
    }

    out
}

/// Look up the token at a given index in the message's token sequence.
pub fn token_at(message: &str, index: usize) -> Option<Token<'_>> {
    tokens(message).get(index).copied()
}
