use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Set up `env_logger` once for the process.
///
/// Warnings and errors are shown by default; `RUST_LOG` overrides the
/// filter, e.g. `RUST_LOG=word_htable=debug`.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("word_htable", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed (e.g. by a test harness).
        let _ = builder.try_init();
    });
}
