// crates/engine/src/lib.rs
pub mod charinfo;
pub mod config;
pub mod error;
pub mod languages;
pub mod literals;
pub mod locations;
pub mod options;
pub mod ranges;
pub mod report;
pub mod scanner;
pub mod source;

use crate::config::Config;
use crate::error::Result;
use crate::report::{Frequency, ScanReport};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan the configured file and build its report.
///
/// # Errors
///
/// Fails only while loading the file: a missing path, a read failure, or
/// content that is not valid UTF-8. Nothing after the load can fail.
pub fn run(config: &Config) -> Result<ScanReport> {
    log::info!("scanning {}", config.path.display());
    let text = source::load(&config.path)?;
    Ok(analyze(config, &text))
}

/// Build a report for already-loaded source text.
#[must_use]
pub fn analyze(config: &Config, text: &str) -> ScanReport {
    let table = scanner::scan(text);
    let chars = table.char_set();

    let top = table
        .most_common(config.top_n)
        .into_iter()
        .map(|(character, count)| Frequency { character, count })
        .collect();

    let literal_chars = (!text.is_empty()).then(|| literals::non_ascii_in_literals(text));

    ScanReport {
        path: config.path.clone(),
        total_chars: text.chars().count(),
        non_ascii_total: table.total(),
        characters: charinfo::describe(&table),
        languages: languages::classify(&chars),
        ranges: ranges::merge(chars.iter().copied()),
        top,
        literal_chars,
        recommended: locations::recommended_set(),
        missing: locations::missing(&config.supported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::error::ScanError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn report_for(text: &str) -> ScanReport {
        analyze(&Config::default(), text)
    }

    #[test]
    fn cafe_report() {
        let report = report_for("café ñ café");
        assert_eq!(report.char_list(), "éñ");
        assert_eq!(report.non_ascii_total, 3);
        assert_eq!(
            report.ranges.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["U+00E9", "U+00F1"]
        );
        assert_eq!(report.top[0], Frequency { character: 'é', count: 2 });
        assert_eq!(report.top[1], Frequency { character: 'ñ', count: 1 });
    }

    #[test]
    fn ascii_only_report_is_empty() {
        let report = report_for("int main() { return 0; }");
        assert!(report.is_empty());
        assert!(report.ranges.is_empty());
        assert!(report.top.is_empty());
        assert_eq!(report.literal_chars, Some(std::collections::BTreeSet::new()));
    }

    #[test]
    fn empty_text_skips_literal_scan() {
        assert_eq!(report_for("").literal_chars, None);
    }

    #[test]
    fn literal_chars_subset_of_found() {
        let report = report_for("// Zürich\nlv_label_set_text(l, \"Malmö\");");
        let literals = report.literal_chars.clone().unwrap();
        assert!(literals.contains(&'ö'));
        assert!(!literals.contains(&'ü'));
        assert!(literals.is_subset(&report.char_set()));
    }

    #[test]
    fn top_n_is_configurable() {
        let config = ConfigBuilder::default().top_n(1usize).build().unwrap();
        let report = analyze(&config, "ääöü");
        assert_eq!(report.top, vec![Frequency { character: 'ä', count: 2 }]);
    }

    #[test]
    fn custom_supported_set_shrinks_missing() {
        let supported = locations::recommended_set();
        let config = ConfigBuilder::default().supported(supported).build().unwrap();
        assert!(analyze(&config, "").missing.is_empty());
    }

    #[test]
    fn run_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\"Malmö\"").unwrap();
        let config = ConfigBuilder::default()
            .path(file.path())
            .build()
            .unwrap();

        let report = run(&config).unwrap();
        assert_eq!(report.char_list(), "ö");
        assert_eq!(report.total_chars, 7);
    }

    #[test]
    fn run_reports_missing_file() {
        let config = ConfigBuilder::default()
            .path("./does-not-exist.ino")
            .build()
            .unwrap();
        assert!(matches!(run(&config), Err(ScanError::NotFound { .. })));
    }
}
