// WHY: the data model handed between pipeline stages
// A BookMention lives for one message-processing pass; a Reference is built
// once per accepted mention and never mutated afterwards

use crate::canon::{self, Section};
use crate::version::VersionCapability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book name located in a message, after disambiguation.
///
/// `token_index` is a position in the message's whitespace-token sequence.
/// For multi-token disambiguation it may be shifted off the alias token
/// itself: "Psalms 151" points at the numeral so the span parser reads the
/// token after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMention {
    pub name: String,
    pub token_index: usize,
}

impl BookMention {
    pub fn new(name: impl Into<String>, token_index: usize) -> Self {
        Self {
            name: name.into(),
            token_index,
        }
    }
}

/// A chapter/verse range, possibly spanning chapters.
///
/// Valid only when `starting_chapter >= 1 && starting_verse >= 1`; the
/// all-zero state is the "not parsed" sentinel and is never surfaced by the
/// parser, which returns `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSpan {
    pub starting_chapter: u32,
    pub starting_verse: u32,
    pub ending_chapter: u32,
    pub ending_verse: u32,
}

impl ReferenceSpan {
    pub fn is_valid(&self) -> bool {
        self.starting_chapter >= 1 && self.starting_verse >= 1
    }
}

impl fmt::Display for ReferenceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.starting_chapter != self.ending_chapter {
            write!(
                f,
                "{}:{}-{}:{}",
                self.starting_chapter, self.starting_verse, self.ending_chapter, self.ending_verse
            )
        } else if self.starting_verse != self.ending_verse {
            write!(
                f,
                "{}:{}-{}",
                self.starting_chapter, self.starting_verse, self.ending_verse
            )
        } else {
            write!(f, "{}:{}", self.starting_chapter, self.starting_verse)
        }
    }
}

/// A fully resolved scripture reference.
///
/// `section` is derived once from `book` at construction and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub book: String,
    pub span: ReferenceSpan,
    pub version: VersionCapability,
    pub section: Option<Section>,
}

impl Reference {
    pub fn new(book: impl Into<String>, span: ReferenceSpan, version: VersionCapability) -> Self {
        let book = book.into();
        let section = canon::section_of(&book);
        Self {
            book,
            span,
            version,
            section,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.book, self.span, self.version.abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{StaticVersionLookup, TextSource, VersionLookup};

    fn any_version() -> VersionCapability {
        VersionCapability {
            name: "Test Version".to_string(),
            abbreviation: "TST".to_string(),
            source: TextSource::BibleGateway,
            supports_old_testament: true,
            supports_new_testament: true,
            supports_deuterocanon: true,
        }
    }

    #[test]
    fn test_span_validity() {
        let valid = ReferenceSpan {
            starting_chapter: 3,
            starting_verse: 16,
            ending_chapter: 3,
            ending_verse: 16,
        };
        assert!(valid.is_valid());

        let zero_chapter = ReferenceSpan {
            starting_chapter: 0,
            starting_verse: 16,
            ending_chapter: 3,
            ending_verse: 16,
        };
        assert!(!zero_chapter.is_valid());

        let zero_verse = ReferenceSpan {
            starting_chapter: 3,
            starting_verse: 0,
            ending_chapter: 3,
            ending_verse: 16,
        };
        assert!(!zero_verse.is_valid());
    }

    #[test]
    fn test_span_display_forms() {
        let single = ReferenceSpan {
            starting_chapter: 3,
            starting_verse: 16,
            ending_chapter: 3,
            ending_verse: 16,
        };
        assert_eq!(single.to_string(), "3:16");

        let verse_range = ReferenceSpan {
            starting_chapter: 13,
            starting_verse: 4,
            ending_chapter: 13,
            ending_verse: 7,
        };
        assert_eq!(verse_range.to_string(), "13:4-7");

        let chapter_range = ReferenceSpan {
            starting_chapter: 1,
            starting_verse: 1,
            ending_chapter: 2,
            ending_verse: 3,
        };
        assert_eq!(chapter_range.to_string(), "1:1-2:3");
    }

    #[test]
    fn test_reference_derives_section_once() {
        let span = ReferenceSpan {
            starting_chapter: 1,
            starting_verse: 1,
            ending_chapter: 1,
            ending_verse: 1,
        };
        let reference = Reference::new("Tobit", span, any_version());
        assert_eq!(reference.section, Some(Section::Deuterocanon));

        let unknown = Reference::new("Enoch", span, any_version());
        assert_eq!(unknown.section, None);
    }

    #[tokio::test]
    async fn test_reference_display() {
        let lookup = StaticVersionLookup::builtin();
        let version = lookup.find_by_abbreviation("RSV").await.unwrap();
        let span = ReferenceSpan {
            starting_chapter: 13,
            starting_verse: 4,
            ending_chapter: 13,
            ending_verse: 7,
        };
        let reference = Reference::new("1 Corinthians", span, version);
        assert_eq!(reference.to_string(), "1 Corinthians 13:4-7 (RSV)");
    }
}
