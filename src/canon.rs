// WHY: section resolution and capability checks in one place
// Both the pre-construction candidate check and the Reference check must
// agree on a book's section, so they share one membership function

use crate::books;
use crate::reference::Reference;
use crate::version::VersionCapability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canon section a book belongs to. The three tables are disjoint, so every
/// known book has exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    OldTestament,
    NewTestament,
    Deuterocanon,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::OldTestament => "Old Testament",
            Section::NewTestament => "New Testament",
            Section::Deuterocanon => "Deuterocanon",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve the section of a canonical book name, `None` for unknown books.
pub fn section_of(book: &str) -> Option<Section> {
    if books::old_testament().contains(book) {
        Some(Section::OldTestament)
    } else if books::new_testament().contains(book) {
        Some(Section::NewTestament)
    } else if books::deuterocanon().contains(book) {
        Some(Section::Deuterocanon)
    } else {
        None
    }
}

/// The two shapes a support check accepts: a constructed `Reference`, or a
/// raw candidate book name checked before construction.
#[derive(Debug, Clone, Copy)]
pub enum BookQuery<'a> {
    Resolved(&'a Reference),
    Candidate(&'a str),
}

/// Result of a capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportCheck {
    pub ok: bool,
    pub section: Option<Section>,
}

/// Check whether a version carries the section the queried book belongs to.
///
/// `ok` is true iff the book resolves to a section and the version's
/// matching capability flag is set. A `Resolved` query reuses the section
/// derived at `Reference` construction; both query shapes agree for the
/// same book because construction uses `section_of` as well.
pub fn check_support(query: BookQuery<'_>, version: &VersionCapability) -> SupportCheck {
    let section = match query {
        BookQuery::Resolved(reference) => reference.section,
        BookQuery::Candidate(book) => section_of(book),
    };

    let ok = match section {
        Some(Section::OldTestament) => version.supports_old_testament,
        Some(Section::NewTestament) => version.supports_new_testament,
        Some(Section::Deuterocanon) => version.supports_deuterocanon,
        None => false,
    };

    SupportCheck { ok, section }
}
