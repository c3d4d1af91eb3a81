//! Runtime configuration from the environment (and `.env`, if present)

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const DB_FILE_NAME: &str = "fitlog.db";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const ENV_DB_PATH: &str = "FITLOG_DB_PATH";
const ENV_LOG: &str = "FITLOG_LOG";
const ENV_MAX_CONNECTIONS: &str = "FITLOG_MAX_CONNECTIONS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  /// Explicit database file; `None` means "next to the app data"
  pub db_path: Option<PathBuf>,
  pub log_filter: String,
  pub max_connections: u32,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      db_path: None,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
      max_connections: DEFAULT_MAX_CONNECTIONS,
    }
  }
}

impl AppConfig {
  /// Read `.env` (if any) into the process environment, then `from_env`
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    let db_path = env::var(ENV_DB_PATH)
      .ok()
      .filter(|v| !v.trim().is_empty())
      .map(PathBuf::from);

    let log_filter = env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let max_connections = match env::var(ENV_MAX_CONNECTIONS) {
      Ok(raw) => match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
          return Err(ConfigError::InvalidValue {
            name: ENV_MAX_CONNECTIONS.to_string(),
            value: raw,
          })
        }
      },
      Err(_) => DEFAULT_MAX_CONNECTIONS,
    };

    Ok(Self {
      db_path,
      log_filter,
      max_connections,
    })
  }

  /// Database file to open: the override, else `fitlog.db` inside `data_dir`
  pub fn resolve_db_path(&self, data_dir: &Path) -> PathBuf {
    self
      .db_path
      .clone()
      .unwrap_or_else(|| data_dir.join(DB_FILE_NAME))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_without_env() {
    temp_env::with_vars_unset([ENV_DB_PATH, ENV_LOG, ENV_MAX_CONNECTIONS], || {
      let config = AppConfig::from_env().expect("defaults should load");
      assert_eq!(config, AppConfig::default());
      assert_eq!(
        config.resolve_db_path(Path::new("/data")),
        PathBuf::from("/data").join(DB_FILE_NAME)
      );
    });
  }

  #[test]
  #[serial]
  fn test_env_overrides() {
    temp_env::with_vars(
      [
        (ENV_DB_PATH, Some("/tmp/custom.db")),
        (ENV_LOG, Some("fitlog_lib=debug")),
        (ENV_MAX_CONNECTIONS, Some("2")),
      ],
      || {
        let config = AppConfig::from_env().expect("overrides should load");
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(config.log_filter, "fitlog_lib=debug");
        assert_eq!(config.max_connections, 2);
        assert_eq!(
          config.resolve_db_path(Path::new("/data")),
          PathBuf::from("/tmp/custom.db")
        );
      },
    );
  }

  #[test]
  #[serial]
  fn test_blank_db_path_is_ignored() {
    temp_env::with_var(ENV_DB_PATH, Some("  "), || {
      let config = AppConfig::from_env().unwrap();
      assert_eq!(config.db_path, None);
    });
  }

  #[test]
  #[serial]
  fn test_invalid_max_connections() {
    for bad in ["zero", "0", "-3"] {
      temp_env::with_var(ENV_MAX_CONNECTIONS, Some(bad), || {
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_MAX_CONNECTIONS), "{}", err);
      });
    }
  }
}
