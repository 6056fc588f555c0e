//! Logger initialization

use log::LevelFilter;
use std::env;

/// Initialize the global logger
///
/// Defaults to warnings only; `debug_enabled` raises the level to `Debug`,
/// which surfaces the consolidated rule map. An explicit `RUST_LOG` spec
/// overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}
