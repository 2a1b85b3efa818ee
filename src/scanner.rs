// WHY: one scanner, one explicit per-book policy table
// The disambiguation rules interact with neighboring tokens in different
// directions per book; keeping them in a single table avoids divergent
// special-casing spread across call sites

use crate::books::BookDictionary;
use crate::normalize::{clean_for_compare, parse_numeral};
use crate::reference::BookMention;
use crate::tokenize::{self, Token};
use tracing::debug;

/// What to do with an ordinal-prefixed book when no usable ordinal precedes it.
#[derive(Debug, Clone, Copy)]
enum BarePolicy {
    /// Emit the plain book name (the book also exists without an ordinal).
    Emit,
    /// Drop the mention (the book only exists in numbered form).
    Drop,
}

/// Disambiguation applied after an alias match, before a mention is emitted.
#[derive(Debug, Clone, Copy)]
enum Disambiguation {
    /// Every alias match is a mention, name unchanged.
    Plain,
    /// The preceding token, parsed as a number strictly inside `(0, upper)`,
    /// selects the numbered title `"<n> <base>"`. The mention keeps the alias
    /// token's own index.
    OrdinalPrefix {
        upper: u32,
        base: &'static str,
        bare: BarePolicy,
    },
    /// The following token equal to `trigger` renames the mention and shifts
    /// its index onto that numeral token; any other numeral (or none) emits
    /// the plain book name.
    NumeralSuffix {
        trigger: u32,
        renamed: &'static str,
    },
}

fn policy_for(book: &'static str) -> Disambiguation {
    match book {
        // John's epistles share the gospel's aliases; the ordinal picks one.
        "John" => Disambiguation::OrdinalPrefix {
            upper: 4,
            base: "John",
            bare: BarePolicy::Emit,
        },
        // Numbered Esdras is a distinct deuterocanonical title, not "1 Ezra".
        "Ezra" => Disambiguation::OrdinalPrefix {
            upper: 3,
            base: "Esdras",
            bare: BarePolicy::Emit,
        },
        // Psalm 151 is carried as its own single-chapter unit. Any other
        // following numeral still yields a plain Psalms mention.
        "Psalms" => Disambiguation::NumeralSuffix {
            trigger: 151,
            renamed: "Psalms 151",
        },
        // The Letter of Jeremiah is not distinguished from the prophet's
        // book; mentions pass through unchanged.
        "Jeremiah" => Disambiguation::Plain,
        // Titles that only exist in numbered form: a bare match without its
        // ordinal never becomes a mention.
        "Samuel" | "Kings" | "Chronicles" | "Corinthians" | "Thessalonians" | "Timothy"
        | "Peter" | "Maccabees" => Disambiguation::OrdinalPrefix {
            upper: 3,
            base: book,
            bare: BarePolicy::Drop,
        },
        _ => Disambiguation::Plain,
    }
}

/// Finds candidate book mentions in free-form message text.
pub struct MentionScanner {
    dictionary: &'static BookDictionary,
}

impl MentionScanner {
    pub fn new() -> Self {
        Self {
            dictionary: BookDictionary::builtin(),
        }
    }

    /// Scan a message for book mentions.
    ///
    /// Every book in the dictionary is checked independently per token, so a
    /// single token may yield more than one mention; downstream span parsing
    /// discards mentions with no usable trailing span. Every emitted
    /// `token_index` is a valid index into the message's whitespace-token
    /// sequence.
    pub fn scan(&self, message: &str) -> Vec<BookMention> {
        let tokens = tokenize::tokens(message);
        let mut mentions = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            let cleaned = clean_for_compare(token.text);
            if cleaned.is_empty() {
                continue;
            }

            for (book, aliases) in self.dictionary.entries() {
                if !aliases.contains(cleaned.as_str()) {
                    continue;
                }
                if let Some(mention) = apply_policy(book, index, &tokens) {
                    debug!("Book mention: {} at token {}", mention.name, mention.token_index);
                    mentions.push(mention);
                }
            }
        }

        mentions
    }
}

impl Default for MentionScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_policy(book: &'static str, index: usize, tokens: &[Token<'_>]) -> Option<BookMention> {
    match policy_for(book) {
        Disambiguation::Plain => Some(BookMention::new(book, index)),
        Disambiguation::OrdinalPrefix { upper, base, bare } => {
            let ordinal = index
                .checked_sub(1)
                .and_then(|prev| parse_numeral(tokens[prev].text))
                .filter(|n| *n > 0 && *n < upper);

            match (ordinal, bare) {
                (Some(n), _) => Some(BookMention::new(format!("{n} {base}"), index)),
                (None, BarePolicy::Emit) => Some(BookMention::new(book, index)),
                (None, BarePolicy::Drop) => {
                    debug!("Dropping bare {} with no usable ordinal", book);
                    None
                }
            }
        }
        Disambiguation::NumeralSuffix { trigger, renamed } => {
            let following = tokens.get(index + 1).and_then(|t| parse_numeral(t.text));
            if following == Some(trigger) {
                Some(BookMention::new(renamed, index + 1))
            } else {
                Some(BookMention::new(book, index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(message: &str) -> Vec<BookMention> {
        MentionScanner::new().scan(message)
    }

    #[test]
    fn test_plain_book_mention() {
        let mentions = scan("John 3:16");
        assert_eq!(mentions, vec![BookMention::new("John", 0)]);
    }

    #[test]
    fn test_numbered_john() {
        assert_eq!(scan("read 2 John 5"), vec![BookMention::new("2 John", 2)]);
        assert_eq!(scan("1 John 4:8"), vec![BookMention::new("1 John", 1)]);
        assert_eq!(scan("3 John 1:4"), vec![BookMention::new("3 John", 1)]);
    }

    #[test]
    fn test_john_ordinal_out_of_bounds_stays_plain() {
        assert_eq!(scan("4 John 1:1"), vec![BookMention::new("John", 1)]);
        assert_eq!(scan("0 John 1:1"), vec![BookMention::new("John", 1)]);
    }

    #[test]
    fn test_ezra_maps_to_esdras() {
        assert_eq!(scan("1 Ezra 2:1"), vec![BookMention::new("1 Esdras", 1)]);
        assert_eq!(scan("2 Ezra 2:1"), vec![BookMention::new("2 Esdras", 1)]);
        assert_eq!(scan("Ezra 2:1"), vec![BookMention::new("Ezra", 0)]);
        // 3 is outside (0, 3)
        assert_eq!(scan("3 Ezra 2:1"), vec![BookMention::new("Ezra", 1)]);
    }

    #[test]
    fn test_psalm_151_shifts_token_index() {
        assert_eq!(scan("Psalms 151"), vec![BookMention::new("Psalms 151", 1)]);
        assert_eq!(scan("see Psalms 151 1:3"), vec![BookMention::new("Psalms 151", 2)]);
    }

    #[test]
    fn test_psalms_other_numeral_stays_plain() {
        assert_eq!(scan("Psalms 23"), vec![BookMention::new("Psalms", 0)]);
        assert_eq!(scan("Psalms 23:1"), vec![BookMention::new("Psalms", 0)]);
        assert_eq!(scan("the Psalms generally"), vec![BookMention::new("Psalms", 1)]);
    }

    #[test]
    fn test_numbered_epistles_require_ordinal() {
        assert_eq!(
            scan("1 Corinthians 13:4-7"),
            vec![BookMention::new("1 Corinthians", 1)]
        );
        assert_eq!(
            scan("2 Thessalonians 2:1"),
            vec![BookMention::new("2 Thessalonians", 1)]
        );
        assert!(scan("Corinthians 13:4").is_empty());
        assert!(scan("3 Timothy 1:1").is_empty());
        assert!(scan("Peter said hello").is_empty());
    }

    #[test]
    fn test_numbered_histories_require_ordinal() {
        assert_eq!(scan("2 Kings 2:23"), vec![BookMention::new("2 Kings", 1)]);
        assert_eq!(scan("1 Samuel 17:4"), vec![BookMention::new("1 Samuel", 1)]);
        assert!(scan("the Kings of England").is_empty());
    }

    #[test]
    fn test_jeremiah_passes_through() {
        assert_eq!(scan("Jeremiah 29:11"), vec![BookMention::new("Jeremiah", 0)]);
    }

    #[test]
    fn test_case_insensitive_and_punctuation_stripped() {
        assert_eq!(scan("GENESIS 1:1"), vec![BookMention::new("Genesis", 0)]);
        assert_eq!(scan("(Gen. 1:1)"), vec![BookMention::new("Genesis", 0)]);
        assert_eq!(scan("rev. 21:4,"), vec![BookMention::new("Revelation", 0)]);
    }

    #[test]
    fn test_multiple_mentions_in_one_message() {
        let mentions = scan("compare Genesis 1:1 with John 1:1");
        assert_eq!(
            mentions,
            vec![BookMention::new("Genesis", 1), BookMention::new("John", 4)]
        );
    }

    #[test]
    fn test_token_indices_are_valid() {
        let messages = [
            "Psalms 151",
            "1 Corinthians 13:4-7 and 2 John 5",
            "nothing scriptural here",
            "Gen. Ex. Lev. Num.",
        ];
        for message in messages {
            let token_count = message.split_whitespace().count();
            for mention in scan(message) {
                assert!(
                    mention.token_index < token_count,
                    "{} emitted out-of-range index {}",
                    message,
                    mention.token_index
                );
            }
        }
    }

    #[test]
    fn test_no_mentions_in_plain_text() {
        assert!(scan("nothing to see here").is_empty());
        assert!(scan("").is_empty());
    }
}
