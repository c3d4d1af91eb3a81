//! Tauri commands for charts and the heat map

use std::sync::Arc;
use tauri::State;

use crate::analysis::{ChartDataPoint, ChartMode, Granularity};
use crate::db::AppState;
use crate::heatmap::HeatMap;
use crate::records::TaskFilter;
use crate::reports;

/// Series for the tasks matching `filter` (all tasks when omitted)
#[tauri::command]
pub async fn get_chart_series(
  state: State<'_, Arc<AppState>>,
  filter: Option<TaskFilter>,
  mode: ChartMode,
  granularity: Granularity,
) -> Result<Vec<ChartDataPoint>, String> {
  reports::get_chart_series(&state.db, &filter.unwrap_or_default(), mode, granularity)
    .await
    .map_err(|e| format!("Failed to build chart: {}", e))
}

#[tauri::command]
pub async fn get_weight_series(
  state: State<'_, Arc<AppState>>,
  granularity: Granularity,
) -> Result<Vec<ChartDataPoint>, String> {
  reports::get_weight_series(&state.db, granularity)
    .await
    .map_err(|e| format!("Failed to build weight chart: {}", e))
}

#[tauri::command]
pub async fn get_cardio_series(
  state: State<'_, Arc<AppState>>,
  granularity: Granularity,
) -> Result<Vec<ChartDataPoint>, String> {
  reports::get_cardio_series(&state.db, granularity)
    .await
    .map_err(|e| format!("Failed to build cardio chart: {}", e))
}

#[tauri::command]
pub async fn get_heat_map(state: State<'_, Arc<AppState>>) -> Result<HeatMap, String> {
  reports::get_heat_map(&state.db)
    .await
    .map_err(|e| format!("Failed to build heat map: {}", e))
}
