//! Pull-based report queries
//!
//! The frontend asks for a series or the heat map whenever it needs one;
//! each call reads a fresh snapshot from the store and aggregates it. Only
//! store failures can surface here, aggregation itself always succeeds.

use sqlx::SqlitePool;

use crate::analysis::{cardio_series, chart_series, weight_series, ChartDataPoint, ChartMode, Granularity};
use crate::catalog::BodyPartCatalog;
use crate::error::StoreError;
use crate::heatmap::{build_heat_map, HeatMap};
use crate::models::Category;
use crate::records::{list_tasks, list_templates, list_weights, TaskFilter};

/// Series for the tasks matching `filter`
pub async fn get_chart_series(
  pool: &SqlitePool,
  filter: &TaskFilter,
  mode: ChartMode,
  granularity: Granularity,
) -> Result<Vec<ChartDataPoint>, StoreError> {
  let tasks = list_tasks(pool, filter).await?;
  Ok(chart_series(&tasks, mode, granularity))
}

/// Body-weight history as a series
pub async fn get_weight_series(
  pool: &SqlitePool,
  granularity: Granularity,
) -> Result<Vec<ChartDataPoint>, StoreError> {
  let samples = list_weights(pool).await?;
  Ok(weight_series(&samples, granularity))
}

/// Minutes of completed cardio per bucket
pub async fn get_cardio_series(
  pool: &SqlitePool,
  granularity: Granularity,
) -> Result<Vec<ChartDataPoint>, StoreError> {
  let tasks = list_tasks(pool, &TaskFilter::by_category(Category::Cardio).completed()).await?;
  Ok(cardio_series(&tasks, granularity))
}

/// Heat map over the completed history, using the default body-part table
/// and each template's logging mode
pub async fn get_heat_map(pool: &SqlitePool) -> Result<HeatMap, StoreError> {
  get_heat_map_with(pool, BodyPartCatalog::default()).await
}

pub async fn get_heat_map_with(pool: &SqlitePool, catalog: BodyPartCatalog) -> Result<HeatMap, StoreError> {
  let templates = list_templates(pool).await?;
  let tasks = list_tasks(pool, &TaskFilter::default().completed()).await?;

  let catalog = catalog.with_templates(&templates);
  Ok(build_heat_map(&tasks, &catalog))
}
