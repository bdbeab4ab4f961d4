// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "glyph_scan",
    version = crate::VERSION,
    about = "List the non-ASCII characters of a source file for embedded font generation"
)]
pub struct Args {
    /// Source file to scan (e.g. weather.ino). Put `--` before a path that starts with '-'
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Number of entries in the frequency list
    #[arg(long, default_value_t = glyph_scan_engine::config::DEFAULT_TOP_N, help_heading = "Output")]
    pub top: usize,

    /// Characters the font already contains (replaces the built-in set)
    #[arg(long, value_name = "CHARS", help_heading = "Output")]
    pub supported: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
