pub mod books;
pub mod bracket;
pub mod canon;
pub mod normalize;
pub mod recognizer;
pub mod reference;
pub mod scanner;
pub mod span;
pub mod tokenize;
pub mod version;

// Re-export main types for convenient access
pub use canon::{check_support, section_of, BookQuery, Section, SupportCheck};
pub use recognizer::{Recognizer, RecognizerOptions, RecognizerOutput, SectionRejection};
pub use reference::{BookMention, Reference, ReferenceSpan};
pub use scanner::MentionScanner;
pub use span::parse_span;
pub use version::{
    ProviderStatus, StaticVersionLookup, TextSource, VersionCapability, VersionLookup,
};
