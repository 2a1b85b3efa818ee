// WHY: the pipeline owns the one ordering rule the stages cannot see:
// the version override is resolved once, after the first successful span
// parse, and the result applies to every reference in the message

use crate::bracket;
use crate::canon::{self, BookQuery, Section};
use crate::reference::Reference;
use crate::scanner::MentionScanner;
use crate::span;
use crate::tokenize;
use crate::version::{VersionCapability, VersionLookup};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Per-call options for a recognition pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecognizerOptions {
    /// Exclude mentions whose surface token sits inside this bracket pair.
    pub exclude_bracketed: Option<(char, char)>,
}

/// A correctly parsed reference the target version cannot serve.
///
/// Parse-level failures are silent, but this condition must reach the end
/// user: the reference itself is fine, the version just lacks the section.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{version} does not include the {section} section, so {book} cannot be looked up")]
pub struct SectionRejection {
    pub book: String,
    pub section: Section,
    pub version: String,
}

/// Result of one recognition pass over a message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecognizerOutput {
    pub references: Vec<Reference>,
    pub rejections: Vec<SectionRejection>,
}

/// Free-text scripture reference recognizer.
///
/// Stateless across calls; all per-message state is local to `recognize`,
/// so one instance may serve concurrent callers.
pub struct Recognizer {
    scanner: MentionScanner,
}

impl Recognizer {
    pub fn new() -> Self {
        Self {
            scanner: MentionScanner::new(),
        }
    }

    /// Recognize scripture references in a message.
    ///
    /// Pipeline: scan for mentions, optionally drop bracketed ones, parse
    /// each mention's trailing span, resolve a version override from the
    /// message's last token, then validate each candidate against the
    /// effective version's canon capabilities. Mentions failing any parse
    /// step are dropped silently; section mismatches are surfaced as
    /// rejections.
    pub async fn recognize(
        &self,
        message: &str,
        version: &VersionCapability,
        lookup: &dyn VersionLookup,
        options: RecognizerOptions,
    ) -> RecognizerOutput {
        let mut output = RecognizerOutput::default();
        let mentions = self.scanner.scan(message);
        debug!("Scanned {} candidate mention(s)", mentions.len());

        // Resolved lazily: the lookup only runs once a span has parsed, and
        // a miss (or no trailing abbreviation at all) keeps the caller's
        // version. The lookup is read-only, so abandoning it mid-flight on
        // cancellation has no side effects.
        let mut effective: Option<VersionCapability> = None;

        for mention in mentions {
            if let Some(pair) = options.exclude_bracketed {
                if bracket::is_bracketed(pair, &mention, message) {
                    debug!("Excluding bracketed mention: {}", mention.name);
                    continue;
                }
            }

            let Some(span) = span::parse_span(&mention, message) else {
                continue;
            };

            let version = match &effective {
                Some(v) => v.clone(),
                None => {
                    let resolved = version_override(message, version, lookup).await;
                    effective = Some(resolved.clone());
                    resolved
                }
            };

            let check = canon::check_support(BookQuery::Candidate(&mention.name), &version);
            match (check.ok, check.section) {
                (true, _) => {
                    output
                        .references
                        .push(Reference::new(mention.name, span, version));
                }
                (false, Some(section)) => {
                    output.rejections.push(SectionRejection {
                        book: mention.name,
                        section,
                        version: version.abbreviation.clone(),
                    });
                }
                (false, None) => {
                    // A name outside every canon table is a false positive,
                    // not a serviceable reference.
                    debug!("Dropping {}: not in any canon table", mention.name);
                }
            }
        }

        output
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the message's last token as a version abbreviation, keeping the
/// supplied version on a miss.
async fn version_override(
    message: &str,
    fallback: &VersionCapability,
    lookup: &dyn VersionLookup,
) -> VersionCapability {
    let tokens = tokenize::tokens(message);
    let Some(last) = tokens.last() else {
        return fallback.clone();
    };

    let candidate = crate::normalize::strip_punctuation(last.text);
    match lookup.find_by_abbreviation(candidate).await {
        Some(version) => {
            debug!("Version override: {} -> {}", fallback.abbreviation, version.abbreviation);
            version
        }
        None => fallback.clone(),
    }
}
