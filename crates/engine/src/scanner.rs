use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// Highest code point still considered ASCII.
pub const ASCII_MAX: u32 = 127;

#[must_use]
pub const fn is_non_ascii(c: char) -> bool {
    c as u32 > ASCII_MAX
}

/// Occurrence counts of non-ASCII characters, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<char, usize>,
}

impl FrequencyTable {
    pub fn record(&mut self, c: char) {
        *self.counts.entry(c).or_insert(0) += 1;
    }

    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The distinct characters, ordered by code point.
    #[must_use]
    pub fn char_set(&self) -> BTreeSet<char> {
        self.counts.keys().copied().collect()
    }

    #[must_use]
    pub fn sorted_chars(&self) -> Vec<char> {
        self.char_set().into_iter().collect()
    }

    /// The `n` most frequent characters.
    ///
    /// Equal counts keep the order in which the characters were first seen.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.iter().collect();
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &count)| (c, count))
    }
}

/// Count every non-ASCII character of `text` in a single pass.
#[must_use]
pub fn scan(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for c in text.chars().filter(|&c| is_non_ascii(c)) {
        table.record(c);
    }
    log::debug!(
        "scanned {} non-ASCII characters ({} unique)",
        table.total(),
        table.len()
    );
    table
}
