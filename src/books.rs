// WHY: centralized book dictionary and canon tables
// The scanner, canon validator, and tests all read from the same static data,
// loaded once at first use and immutable thereafter

use std::collections::HashSet;
use std::sync::OnceLock;

/// Dictionary entries: canonical (or base, for ordinal-prefixed titles) book name
/// mapped to its accepted single-token surface forms. Aliases are stored lowercase
/// and punctuation-free; tokens are cleaned the same way before comparison.
///
/// Doubly-numbered titles (Samuel, Kings, Corinthians, ...) appear once under the
/// base name; the scanner's disambiguation table attaches the required ordinal.
pub const BOOK_ALIASES: &[(&str, &[&str])] = &[
    // Old Testament
    ("Genesis", &["genesis", "gen", "ge", "gn"]),
    ("Exodus", &["exodus", "exod", "exo", "ex"]),
    ("Leviticus", &["leviticus", "lev", "le", "lv"]),
    ("Numbers", &["numbers", "num", "nu", "nm", "nb"]),
    ("Deuteronomy", &["deuteronomy", "deut", "deu", "dt"]),
    ("Joshua", &["joshua", "josh", "jos", "jsh"]),
    ("Judges", &["judges", "judg", "jdg", "jg"]),
    ("Ruth", &["ruth", "rth", "ru"]),
    ("Samuel", &["samuel", "sam", "sa", "sm"]),
    ("Kings", &["kings", "kgs", "kin", "ki"]),
    ("Chronicles", &["chronicles", "chron", "chr", "ch"]),
    ("Ezra", &["ezra", "ezr", "esdras", "esd"]),
    ("Nehemiah", &["nehemiah", "neh", "ne"]),
    ("Esther", &["esther", "esth", "est", "es"]),
    ("Job", &["job", "jb"]),
    ("Psalms", &["psalms", "psalm", "pslm", "psa", "psm", "pss", "ps"]),
    ("Proverbs", &["proverbs", "prov", "pro", "prv", "pr"]),
    ("Ecclesiastes", &["ecclesiastes", "eccles", "eccl", "ecc", "ec", "qoheleth"]),
    ("Song of Solomon", &["canticles", "canticle", "songofsolomon", "songofsongs", "sos"]),
    ("Isaiah", &["isaiah", "isa", "is"]),
    ("Jeremiah", &["jeremiah", "jer", "je", "jr"]),
    ("Lamentations", &["lamentations", "lam", "la"]),
    ("Ezekiel", &["ezekiel", "ezek", "eze", "ezk"]),
    ("Daniel", &["daniel", "dan", "da", "dn"]),
    ("Hosea", &["hosea", "hos", "ho"]),
    ("Joel", &["joel", "jl"]),
    ("Amos", &["amos", "am"]),
    ("Obadiah", &["obadiah", "obad", "ob"]),
    ("Jonah", &["jonah", "jnh", "jon"]),
    ("Micah", &["micah", "mic", "mc"]),
    ("Nahum", &["nahum", "nah", "na"]),
    ("Habakkuk", &["habakkuk", "hab", "hb"]),
    ("Zephaniah", &["zephaniah", "zeph", "zep", "zp"]),
    ("Haggai", &["haggai", "hag", "hg"]),
    ("Zechariah", &["zechariah", "zech", "zec", "zc"]),
    ("Malachi", &["malachi", "mal", "ml"]),
    // New Testament
    ("Matthew", &["matthew", "matt", "mat", "mt"]),
    ("Mark", &["mark", "mrk", "mk", "mr"]),
    ("Luke", &["luke", "luk", "lk"]),
    ("John", &["john", "jhn", "jn"]),
    ("Acts", &["acts", "act", "ac"]),
    ("Romans", &["romans", "rom", "ro", "rm"]),
    ("Corinthians", &["corinthians", "cor", "co"]),
    ("Galatians", &["galatians", "gal", "ga"]),
    ("Ephesians", &["ephesians", "ephes", "eph"]),
    ("Philippians", &["philippians", "phil", "php", "pp"]),
    ("Colossians", &["colossians", "col", "cl"]),
    ("Thessalonians", &["thessalonians", "thess", "thes", "th"]),
    ("Timothy", &["timothy", "tim", "ti"]),
    ("Titus", &["titus", "tit"]),
    ("Philemon", &["philemon", "philem", "phm", "pm"]),
    ("Hebrews", &["hebrews", "heb"]),
    ("James", &["james", "jas", "jm"]),
    ("Peter", &["peter", "pet", "pe", "pt"]),
    ("Jude", &["jude", "jud"]),
    ("Revelation", &["revelation", "rev", "re", "apocalypse"]),
    // Deuterocanon (Esdras and Psalm 151 are reached through Ezra/Psalms)
    ("Tobit", &["tobit", "tob", "tb"]),
    ("Judith", &["judith", "jdth", "jdt", "jth"]),
    ("Wisdom", &["wisdom", "wis", "ws"]),
    ("Sirach", &["sirach", "sir", "ecclesiasticus"]),
    ("Baruch", &["baruch", "bar"]),
    ("Maccabees", &["maccabees", "macc", "mac", "ma"]),
    ("Prayer of Manasseh", &["manasseh", "manasses", "prman"]),
];

/// Old Testament canon, canonical names as emitted by the scanner.
pub const OLD_TESTAMENT: &[&str] = &[
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel",
    "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles",
    "Ezra", "Nehemiah", "Esther", "Job", "Psalms", "Proverbs",
    "Ecclesiastes", "Song of Solomon", "Isaiah", "Jeremiah",
    "Lamentations", "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
    "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah",
    "Haggai", "Zechariah", "Malachi",
];

/// New Testament canon.
pub const NEW_TESTAMENT: &[&str] = &[
    "Matthew", "Mark", "Luke", "John", "Acts", "Romans",
    "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians",
    "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians",
    "1 Timothy", "2 Timothy", "Titus", "Philemon", "Hebrews",
    "James", "1 Peter", "2 Peter", "1 John", "2 John", "3 John",
    "Jude", "Revelation",
];

/// Deuterocanonical books. Psalm 151 is carried as its own single-chapter
/// unit, distinct from the Old Testament Psalter.
pub const DEUTEROCANON: &[&str] = &[
    "Tobit", "Judith", "Wisdom", "Sirach", "Baruch",
    "1 Maccabees", "2 Maccabees", "1 Esdras", "2 Esdras",
    "Prayer of Manasseh", "Psalms 151",
];

/// Book dictionary: canonical/base names with their alias sets.
///
/// Loaded once at first use; read-only thereafter. Entry order is the
/// declaration order of `BOOK_ALIASES`, so scan results are deterministic
/// when a single token matches aliases of more than one book.
pub struct BookDictionary {
    entries: Vec<(&'static str, HashSet<&'static str>)>,
}

impl BookDictionary {
    fn new() -> Self {
        Self {
            entries: BOOK_ALIASES
                .iter()
                .map(|(name, aliases)| (*name, aliases.iter().copied().collect()))
                .collect(),
        }
    }

    /// Shared built-in dictionary instance.
    pub fn builtin() -> &'static BookDictionary {
        static DICTIONARY: OnceLock<BookDictionary> = OnceLock::new();
        DICTIONARY.get_or_init(BookDictionary::new)
    }

    /// Iterate dictionary entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &HashSet<&'static str>)> + '_ {
        self.entries.iter().map(|(name, aliases)| (*name, aliases))
    }

    /// Alias set for one book, if the book is in the dictionary.
    pub fn lookup(&self, book: &str) -> Option<&HashSet<&'static str>> {
        self.entries
            .iter()
            .find(|(name, _)| *name == book)
            .map(|(_, aliases)| aliases)
    }
}

fn canon_set(table: &'static [&'static str], cell: &'static OnceLock<HashSet<&'static str>>) -> &'static HashSet<&'static str> {
    cell.get_or_init(|| table.iter().copied().collect())
}

/// Old Testament membership set.
pub fn old_testament() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    canon_set(OLD_TESTAMENT, &SET)
}

/// New Testament membership set.
pub fn new_testament() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    canon_set(NEW_TESTAMENT, &SET)
}

/// Deuterocanon membership set.
pub fn deuterocanon() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    canon_set(DEUTEROCANON, &SET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_tables_are_disjoint() {
        let ot = old_testament();
        let nt = new_testament();
        let deu = deuterocanon();

        for book in ot {
            assert!(!nt.contains(book), "{book} appears in both OT and NT");
            assert!(!deu.contains(book), "{book} appears in both OT and DEU");
        }
        for book in nt {
            assert!(!deu.contains(book), "{book} appears in both NT and DEU");
        }
    }

    #[test]
    fn test_canon_table_sizes() {
        assert_eq!(OLD_TESTAMENT.len(), 39);
        assert_eq!(NEW_TESTAMENT.len(), 27);
        assert_eq!(DEUTEROCANON.len(), 11);
    }

    #[test]
    fn test_aliases_are_lowercase_and_punctuation_free() {
        for (book, aliases) in BookDictionary::builtin().entries() {
            for alias in aliases {
                assert_eq!(
                    *alias,
                    crate::normalize::clean_for_compare(alias),
                    "alias {alias} of {book} is not in cleaned form"
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        let dict = BookDictionary::builtin();
        assert!(dict.lookup("Genesis").unwrap().contains("gen"));
        assert!(dict.lookup("Corinthians").unwrap().contains("cor"));
        assert!(dict.lookup("1 Corinthians").is_none());
        assert!(dict.lookup("Klingon").is_none());
    }

    #[test]
    fn test_entry_order_is_declaration_order() {
        let first = BookDictionary::builtin().entries().next().map(|(name, _)| name);
        assert_eq!(first, Some("Genesis"));
    }
}
