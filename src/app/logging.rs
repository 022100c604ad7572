//! Logger initialization.

use log::LevelFilter;

/// Initializes the global logger at the given level.
///
/// Respects `RUST_LOG` overrides from the environment. Safe to call more
/// than once (subsequent calls are no-ops), which keeps tests simple.
pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .try_init();
}
