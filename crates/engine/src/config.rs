use crate::locations::CURRENTLY_SUPPORTED;
use crate::options::OutputFormat;
use derive_builder::Builder;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Number of entries in the frequency list unless overridden.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub path: PathBuf,
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,
    /// Glyphs the target font already contains.
    #[builder(default = "CURRENTLY_SUPPORTED.chars().collect()")]
    pub supported: BTreeSet<char>,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            top_n: DEFAULT_TOP_N,
            supported: CURRENTLY_SUPPORTED.chars().collect(),
            format: OutputFormat::default(),
        }
    }
}
