// WHY: version capability records and the async override-lookup seam
// The recognizer core reads these records and never mutates them; the real
// system resolves overrides from a database, so the lookup is a trait object

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Closed enumeration of verse-text backends a version can declare.
///
/// Replaces a stringly-keyed source map: every call site matches exhaustively,
/// and backends without a provider carry an explicit unimplemented status
/// rather than a null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    BibleGateway,
    ApiBible,
    BibleHub,
    BibleServer,
}

/// Whether a concrete text provider exists for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Implemented,
    Unimplemented,
}

impl TextSource {
    /// Short identifier used in version records and configuration.
    pub fn identifier(self) -> &'static str {
        match self {
            TextSource::BibleGateway => "bg",
            TextSource::ApiBible => "ab",
            TextSource::BibleHub => "bh",
            TextSource::BibleServer => "bs",
        }
    }

    /// Parse a short source identifier.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "bg" => Some(TextSource::BibleGateway),
            "ab" => Some(TextSource::ApiBible),
            "bh" => Some(TextSource::BibleHub),
            "bs" => Some(TextSource::BibleServer),
            _ => None,
        }
    }

    /// Provider availability for this source.
    pub fn provider_status(self) -> ProviderStatus {
        match self {
            TextSource::BibleGateway | TextSource::ApiBible => ProviderStatus::Implemented,
            TextSource::BibleHub | TextSource::BibleServer => ProviderStatus::Unimplemented,
        }
    }
}

/// Per-translation capability record: which canon sections the translation
/// carries, its lookup abbreviation, and the backend serving its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCapability {
    pub name: String,
    pub abbreviation: String,
    pub source: TextSource,
    pub supports_old_testament: bool,
    pub supports_new_testament: bool,
    pub supports_deuterocanon: bool,
}

/// Asynchronous, read-only resolution of a version abbreviation.
///
/// A miss is not an error: the recognizer keeps whatever version it was
/// handed. Implementations must have no side effects so an abandoned
/// lookup (cancelled pipeline) is harmless.
#[async_trait]
pub trait VersionLookup: Send + Sync {
    async fn find_by_abbreviation(&self, abbreviation: &str) -> Option<VersionCapability>;
}

/// In-memory `VersionLookup` backed by a fixed table.
///
/// Used by the CLI and tests; production deployments put a database-backed
/// implementation behind the same trait.
pub struct StaticVersionLookup {
    versions: HashMap<String, VersionCapability>,
}

impl StaticVersionLookup {
    pub fn new(versions: Vec<VersionCapability>) -> Self {
        Self {
            versions: versions
                .into_iter()
                .map(|v| (v.abbreviation.to_uppercase(), v))
                .collect(),
        }
    }

    /// Lookup with no entries; every query misses.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Built-in table of common English translations.
    pub fn builtin() -> Self {
        fn version(
            name: &str,
            abbreviation: &str,
            source: TextSource,
            ot: bool,
            nt: bool,
            deu: bool,
        ) -> VersionCapability {
            VersionCapability {
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
                source,
                supports_old_testament: ot,
                supports_new_testament: nt,
                supports_deuterocanon: deu,
            }
        }

        Self::new(vec![
            version("Revised Standard Version", "RSV", TextSource::BibleGateway, true, true, true),
            version("New Revised Standard Version", "NRSV", TextSource::BibleGateway, true, true, true),
            version("King James Version", "KJV", TextSource::BibleGateway, true, true, false),
            version("English Standard Version", "ESV", TextSource::BibleGateway, true, true, false),
            version("New International Version", "NIV", TextSource::BibleGateway, true, true, false),
            version("World English Bible", "WEB", TextSource::ApiBible, true, true, false),
            version("Luther Bibel 2017", "LU17", TextSource::BibleServer, true, true, true),
        ])
    }
}

#[async_trait]
impl VersionLookup for StaticVersionLookup {
    async fn find_by_abbreviation(&self, abbreviation: &str) -> Option<VersionCapability> {
        let hit = self.versions.get(&abbreviation.to_uppercase()).cloned();
        if hit.is_some() {
            debug!("Resolved version abbreviation: {}", abbreviation);
        }
        hit
    }
}
