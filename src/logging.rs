// src/logging.rs
use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `env_logger` backend once. `RUST_LOG` overrides `level`.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .format_target(false)
            .init();
    });
}

/// Map `-q` / `-v` counts to a level; warnings are shown by default.
pub fn level_from_flags(quiet: bool, verbose: u8) -> LevelFilter {
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
