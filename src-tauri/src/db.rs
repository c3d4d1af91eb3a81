use log::info;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::StoreError;

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool
pub struct AppState {
  pub db: DbPool,
}

/// Open (creating if needed) the database at `db_path` and run migrations
pub async fn initialize_db(db_path: &Path, config: &AppConfig) -> Result<DbPool, StoreError> {
  if let Some(parent) = db_path.parent() {
    fs::create_dir_all(parent)
      .map_err(|e| StoreError::Invalid(format!("Failed to create {}: {}", parent.display(), e)))?;
  }
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  info!("Initializing database at: {}", db_path.display());

  let pool = SqlitePoolOptions::new()
    .max_connections(config.max_connections)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  info!("Database initialized successfully");

  Ok(pool)
}
