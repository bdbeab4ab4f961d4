// crates/cli/src/config.rs
use crate::args::Args;
pub use glyph_scan_engine::config::{Config, ConfigBuilder};
use glyph_scan_engine::options as engine_options;
use std::collections::BTreeSet;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let format: engine_options::OutputFormat = args.format.into();
        let mut builder = ConfigBuilder::default();
        builder.path(args.path).top_n(args.top).format(format);

        if let Some(chars) = args.supported {
            builder.supported(chars.chars().collect::<BTreeSet<char>>());
        }

        // every field has a default, so build() cannot fail
        builder.build().unwrap_or_default()
    }
}
