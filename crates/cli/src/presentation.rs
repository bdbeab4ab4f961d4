// crates/cli/src/presentation.rs
use crate::error::Result;
use glyph_scan_engine::locations::{LOCATION_REGIONS, SAMPLE_LOCATIONS};
use glyph_scan_engine::options::OutputFormat;
use glyph_scan_engine::report::{ScanReport, join_chars};
use std::fmt::Write as _;
use std::io::Write as _;

const RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 30;
const TABLE_RULE_WIDTH: usize = 45;

/// Render the report in the requested format.
///
/// # Errors
///
/// Returns an error if structured serialization fails.
pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

/// Write the rendered report to stdout.
///
/// # Errors
///
/// Returns an error if rendering or writing to stdout fails.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    let rendered = render(report, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(SECTION_RULE_WIDTH));
    out.push('\n');
}

fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("No non-ASCII characters found in the file.\n");
    } else {
        write_analysis(&mut out, report);
    }

    if let Some(literals) = &report.literal_chars {
        section(&mut out, "7. STRING LITERALS ANALYSIS:");
        if literals.is_empty() {
            out.push_str("No non-ASCII characters found in string literals.\n");
        } else {
            let _ = writeln!(out, "Non-ASCII chars in strings: {}", join_chars(literals));
            out.push_str("These are the characters most likely to be displayed to users.\n");
        }
    }

    write_locations(&mut out, report);

    if !report.missing.is_empty() {
        section(&mut out, "9. MISSING CHARACTERS FOR LOCATION SUPPORT:");
        let _ = writeln!(out, "Characters to add: '{}'", join_chars(&report.missing));
        out.push_str("These characters are commonly used in international location names\n");
        out.push_str("but are not included in the current font character set.\n");
    }

    let _ = writeln!(
        out,
        "\n✅ Analysis complete! Found {} unique non-ASCII characters.",
        report.unique_count()
    );
    out.push_str("Use the character list above with LVGL's font converter tool.\n");
    out
}

fn write_analysis(out: &mut String, report: &ScanReport) {
    let rule = "=".repeat(RULE_WIDTH);
    let char_list = report.char_list();

    let _ = writeln!(out, "{rule}");
    out.push_str("NON-ASCII CHARACTER ANALYSIS FOR LVGL FONT\n");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "\nTotal unique non-ASCII characters found: {}",
        report.unique_count()
    );

    section(out, "1. COMPLETE CHARACTER LIST:");
    let _ = writeln!(out, "Characters: {char_list}");

    section(out, "2. DETAILED CHARACTER INFO:");
    let _ = writeln!(out, "{:<4} {:<8} {:<25} {:<6}", "Char", "Unicode", "Name", "Count");
    let _ = writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH));
    for info in &report.characters {
        let _ = writeln!(
            out,
            "'{}'  {:<8} {:<25} {:<6}",
            info.character,
            info.code_point.to_string(),
            info.name_or_unknown(),
            info.count
        );
    }

    section(out, "3. CHARACTERS BY LANGUAGE:");
    for group in &report.languages.groups {
        let label = format!("{}:", group.name);
        let _ = writeln!(out, "{label:<8} {}", join_chars(&group.chars));
    }
    if !report.languages.other.is_empty() {
        let _ = writeln!(out, "{:<8} {}", "Other:", join_chars(&report.languages.other));
    }

    section(out, "4. LVGL FONT CONVERTER INPUT:");
    out.push_str("Copy this character range for LVGL font converter:\n");
    let _ = writeln!(out, "'{char_list}'");

    section(out, "5. UNICODE RANGES:");
    for range in &report.ranges {
        let _ = writeln!(out, "{range}");
    }

    section(out, "6. CHARACTER FREQUENCY:");
    for freq in &report.top {
        let _ = writeln!(out, "'{}' appears {} times", freq.character, freq.count);
    }

    let _ = writeln!(out, "\n{rule}");
}

fn write_locations(out: &mut String, report: &ScanReport) {
    section(out, "8. LOCATION NAME CHARACTER ANALYSIS:");
    out.push_str("Common location name characters by region:\n");
    for (region, chars) in LOCATION_REGIONS {
        let _ = writeln!(out, "{region:<20}: {chars}");
    }

    out.push_str("\nSample problematic location names:\n");
    for location in SAMPLE_LOCATIONS {
        let _ = writeln!(out, "  {location}");
    }

    out.push_str("\nRecommended character set for international locations:\n");
    let _ = writeln!(out, "'{}'", join_chars(&report.recommended));
}
