use crate::scanner::is_non_ascii;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// A C-style double-quoted literal; the body may contain escaped characters.
fn string_literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x22((?:[^\x22\\]|\\.)*?)\x22").unwrap())
}

/// Bodies of every double-quoted literal in `text`, without the quotes.
pub fn literal_bodies(text: &str) -> impl Iterator<Item = &str> {
    string_literal_re()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Non-ASCII characters appearing inside string literals.
///
/// These are the ones most likely to reach the display.
#[must_use]
pub fn non_ascii_in_literals(text: &str) -> BTreeSet<char> {
    literal_bodies(text)
        .flat_map(str::chars)
        .filter(|&c| is_non_ascii(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use proptest::prelude::*;

    #[test]
    fn finds_chars_in_simple_literal() {
        let found = non_ascii_in_literals(r#"const char* city = "Malmö";"#);
        assert!(found.contains(&'ö'));
    }

    #[test]
    fn ignores_chars_in_comments() {
        let src = "// Zürich\nconst char* s = \"Spånga\";\n";
        let found = non_ascii_in_literals(src);
        assert!(found.contains(&'å'));
        assert!(!found.contains(&'ü'));
    }

    #[test]
    fn escaped_quote_does_not_end_literal() {
        let src = r#"label = "say \"héllo\" to Tromsø";"#;
        let found = non_ascii_in_literals(src);
        assert_eq!(found, ['é', 'ø'].into_iter().collect::<BTreeSet<char>>());
    }

    #[test]
    fn multiple_literals_on_one_line() {
        let bodies: Vec<_> = literal_bodies(r#"{ "Hoy", "Mañana" }"#).collect();
        assert_eq!(bodies, vec!["Hoy", "Mañana"]);
    }

    #[test]
    fn no_literals_yields_empty_set() {
        assert!(non_ascii_in_literals("int x = 42; // café").is_empty());
    }

    proptest! {
        #[test]
        fn literal_chars_subset_of_all_non_ascii(text in "[a-zé\"\\\\ñ ü]{0,80}") {
            let all = scan(&text).char_set();
            prop_assert!(non_ascii_in_literals(&text).is_subset(&all));
        }
    }
}
