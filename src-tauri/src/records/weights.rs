use log::debug;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::{NewWeightSample, WeightSample};

pub async fn insert_weight(pool: &SqlitePool, sample: &NewWeightSample) -> Result<WeightSample, StoreError> {
  if !sample.weight.is_finite() || sample.weight <= 0.0 {
    return Err(StoreError::Invalid(format!("Weight must be positive, got {}", sample.weight)));
  }

  let result = sqlx::query("INSERT INTO weight_samples (date, weight) VALUES (?1, ?2)")
    .bind(sample.date)
    .bind(sample.weight)
    .execute(pool)
    .await?;

  let id = result.last_insert_rowid();
  debug!("Recorded weight {} kg on {}", sample.weight, sample.date);

  Ok(WeightSample {
    id,
    date: sample.date,
    weight: sample.weight,
  })
}

pub async fn delete_weight(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
  let result = sqlx::query("DELETE FROM weight_samples WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(format!("Weight sample {}", id)));
  }
  Ok(())
}

/// Full weight history, oldest first
pub async fn list_weights(pool: &SqlitePool) -> Result<Vec<WeightSample>, StoreError> {
  let samples = sqlx::query_as::<_, WeightSample>(
    "SELECT id, date, weight FROM weight_samples ORDER BY date, id",
  )
  .fetch_all(pool)
  .await?;

  Ok(samples)
}

/// Most recent sample; the last one entered wins when a day has several
pub async fn latest_weight(pool: &SqlitePool) -> Result<Option<WeightSample>, StoreError> {
  let sample = sqlx::query_as::<_, WeightSample>(
    "SELECT id, date, weight FROM weight_samples ORDER BY date DESC, id DESC LIMIT 1",
  )
  .fetch_optional(pool)
  .await?;

  Ok(sample)
}
