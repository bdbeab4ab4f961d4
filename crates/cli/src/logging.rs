// crates/cli/src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Map `-v`/`-q` onto a log level. Warnings and errors show by default.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbose, quiet));
    builder.parse_env(Env::default());
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    // a second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}
