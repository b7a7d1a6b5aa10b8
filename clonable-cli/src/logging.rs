//! Logger setup for the `clonable` binary.

use crate::config::LoggingConfig;

/// Install `env_logger`. `RUST_LOG` wins over the configured level; calling
/// this twice is harmless.
pub fn init(config: &LoggingConfig) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level.to_ascii_lowercase()),
    )
    .format_timestamp_millis()
    .format_module_path(false)
    .try_init();
}
