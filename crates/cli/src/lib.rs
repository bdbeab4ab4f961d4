// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan the configured file and print its report to stdout.
///
/// # Errors
///
/// Returns [`error::AppError::Scan`] when the file cannot be loaded, and an
/// output error when rendering or writing the report fails.
pub fn execute(config: &Config) -> Result<()> {
    let report = glyph_scan_engine::run(config)?;
    presentation::print_report(&report, config.format)
}
