use clap::Parser;
use glyph_scan_cli::args::Args;
use glyph_scan_cli::config::Config;
use glyph_scan_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help / --version land here too and are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(args.verbose, args.quiet);
    log::info!(
        "glyph_scan v{} (engine v{})",
        glyph_scan_cli::VERSION,
        glyph_scan_engine::VERSION
    );
    let config = Config::from(args);
    log::debug!("config: {config:?}");

    match glyph_scan_cli::execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
