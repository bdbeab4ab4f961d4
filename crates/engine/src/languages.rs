//! Language-group classification of the characters found in a source.
//!
//! The reference sets overlap on purpose (ü is Spanish, German and French),
//! so a character can be reported under several groups.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageGroup {
    pub name: &'static str,
    pub chars: &'static str,
}

impl LanguageGroup {
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }
}

/// Groups checked against the source, in report order.
pub const LANGUAGE_GROUPS: [LanguageGroup; 4] = [
    LanguageGroup {
        name: "Spanish",
        chars: "ñáéíóúüÑÁÉÍÓÚÜ¿¡",
    },
    LanguageGroup {
        name: "German",
        chars: "äöüßÄÖÜ",
    },
    LanguageGroup {
        name: "French",
        chars: "àâäçéèêëïîôùûüÿæœÀÂÄÇÉÈÊËÏÎÔÙÛÜŸÆŒ",
    },
    LanguageGroup {
        name: "Scandinavian",
        chars: "åæøÅÆØ",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMatch {
    pub name: &'static str,
    pub chars: BTreeSet<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Non-empty matches only, in [`LANGUAGE_GROUPS`] order.
    pub groups: Vec<GroupMatch>,
    /// Characters outside every group.
    pub other: BTreeSet<char>,
}

#[must_use]
pub fn classify(chars: &BTreeSet<char>) -> Classification {
    let groups: Vec<GroupMatch> = LANGUAGE_GROUPS
        .iter()
        .map(|group| GroupMatch {
            name: group.name,
            chars: chars.iter().copied().filter(|&c| group.contains(c)).collect(),
        })
        .filter(|m| !m.chars.is_empty())
        .collect();

    let other = chars
        .iter()
        .copied()
        .filter(|&c| !LANGUAGE_GROUPS.iter().any(|g| g.contains(c)))
        .collect();

    let result = Classification { groups, other };
    log::debug!(
        "classified into {} language groups, {} other",
        result.groups.len(),
        result.other.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    fn covered(c: &Classification) -> BTreeSet<char> {
        c.groups
            .iter()
            .flat_map(|g| g.chars.iter().copied())
            .chain(c.other.iter().copied())
            .collect()
    }

    fn group<'a>(c: &'a Classification, name: &str) -> Option<&'a GroupMatch> {
        c.groups.iter().find(|g| g.name == name)
    }

    #[test]
    fn cafe_example_is_spanish_and_french() {
        let result = classify(&set("éñ"));
        assert_eq!(group(&result, "Spanish").unwrap().chars, set("éñ"));
        assert_eq!(group(&result, "French").unwrap().chars, set("é"));
        assert!(group(&result, "German").is_none());
        assert!(result.other.is_empty());
    }

    #[test]
    fn overlapping_char_fans_out() {
        let result = classify(&set("ü"));
        let names: Vec<_> = result.groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Spanish", "German", "French"]);
    }

    #[test]
    fn unknown_chars_go_to_other() {
        let result = classify(&set("°→ł"));
        assert!(result.groups.is_empty());
        assert_eq!(result.other, set("°→ł"));
    }

    #[test]
    fn groups_keep_priority_order() {
        let result = classify(&set("øß¿"));
        let names: Vec<_> = result.groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Spanish", "German", "Scandinavian"]);
    }

    proptest! {
        #[test]
        fn union_of_groups_equals_input(
            chars in prop::collection::btree_set(prop::char::range('\u{80}', '\u{24F}'), 0..40)
        ) {
            prop_assert_eq!(covered(&classify(&chars)), chars);
        }
    }
}
