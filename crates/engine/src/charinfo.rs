use crate::scanner::FrequencyTable;
use serde::Serialize;
use std::fmt;

/// `U+XXXX` notation, zero-padded to at least four hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CodePoint(pub u32);

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl Serialize for CodePoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the character detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterInfo {
    pub character: char,
    pub code_point: CodePoint,
    pub name: Option<String>,
    pub count: usize,
}

impl CharacterInfo {
    #[must_use]
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or("UNKNOWN")
    }
}

#[must_use]
pub fn unicode_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|name| name.to_string())
}

/// Detail rows for every character in `table`, ordered by code point.
#[must_use]
pub fn describe(table: &FrequencyTable) -> Vec<CharacterInfo> {
    table
        .sorted_chars()
        .into_iter()
        .map(|c| CharacterInfo {
            character: c,
            code_point: CodePoint::from(c),
            name: unicode_name(c),
            count: table.count(c),
        })
        .collect()
}
