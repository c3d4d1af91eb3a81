//! Logger setup. Call `init` once at startup; later calls are no-ops.

use crate::config::AppConfig;

pub fn init(config: &AppConfig) {
  // try_init fails if a logger is already installed (tests, re-entry)
  let _ = env_logger::Builder::new()
    .parse_filters(&config.log_filter)
    .format_timestamp_millis()
    .try_init();
}
