use crate::charinfo::CharacterInfo;
use crate::languages::Classification;
use crate::ranges::CodePointRange;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Everything derived from one scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub path: PathBuf,
    /// Character count of the whole source, ASCII included.
    pub total_chars: usize,
    /// Sum of the per-character counts in `characters`.
    pub non_ascii_total: usize,
    /// Ordered by code point.
    pub characters: Vec<CharacterInfo>,
    pub languages: Classification,
    pub ranges: Vec<CodePointRange>,
    pub top: Vec<Frequency>,
    /// `None` for an empty source file.
    pub literal_chars: Option<BTreeSet<char>>,
    pub recommended: BTreeSet<char>,
    pub missing: BTreeSet<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frequency {
    pub character: char,
    pub count: usize,
}

impl ScanReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.characters.len()
    }

    /// All found characters concatenated in code point order.
    #[must_use]
    pub fn char_list(&self) -> String {
        self.characters.iter().map(|info| info.character).collect()
    }

    #[must_use]
    pub fn char_set(&self) -> BTreeSet<char> {
        self.characters.iter().map(|info| info.character).collect()
    }
}

/// Concatenate a set in code point order.
#[must_use]
pub fn join_chars(chars: &BTreeSet<char>) -> String {
    chars.iter().collect()
}
