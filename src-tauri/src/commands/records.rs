//! Tauri commands for body weight, exercise templates and the weekly routine

use chrono::NaiveDate;
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::{
  ExerciseTemplate, NewExerciseTemplate, NewWeightSample, RoutineItem, WeightSample, WorkoutTask,
};
use crate::records as store;

/// ---------------------------------------------------------------------------
/// Body Weight
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn add_weight(
  state: State<'_, Arc<AppState>>,
  sample: NewWeightSample,
) -> Result<WeightSample, String> {
  store::insert_weight(&state.db, &sample)
    .await
    .map_err(|e| format!("Failed to record weight: {}", e))
}

#[tauri::command]
pub async fn delete_weight(state: State<'_, Arc<AppState>>, id: i64) -> Result<(), String> {
  store::delete_weight(&state.db, id)
    .await
    .map_err(|e| format!("Failed to delete weight {}: {}", id, e))
}

#[tauri::command]
pub async fn get_weights(state: State<'_, Arc<AppState>>) -> Result<Vec<WeightSample>, String> {
  store::list_weights(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch weights: {}", e))
}

#[tauri::command]
pub async fn get_latest_weight(
  state: State<'_, Arc<AppState>>,
) -> Result<Option<WeightSample>, String> {
  store::latest_weight(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch latest weight: {}", e))
}

/// ---------------------------------------------------------------------------
/// Exercise Templates
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_templates(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<ExerciseTemplate>, String> {
  store::list_templates(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch templates: {}", e))
}

#[tauri::command]
pub async fn add_template(
  state: State<'_, Arc<AppState>>,
  template: NewExerciseTemplate,
) -> Result<ExerciseTemplate, String> {
  store::insert_template(&state.db, &template)
    .await
    .map_err(|e| format!("Failed to add template: {}", e))
}

#[tauri::command]
pub async fn update_template(
  state: State<'_, Arc<AppState>>,
  template: ExerciseTemplate,
) -> Result<(), String> {
  store::update_template(&state.db, &template)
    .await
    .map_err(|e| format!("Failed to update template: {}", e))
}

#[tauri::command]
pub async fn delete_template(state: State<'_, Arc<AppState>>, id: i64) -> Result<(), String> {
  store::delete_template(&state.db, id)
    .await
    .map_err(|e| format!("Failed to delete template {}: {}", id, e))
}

/// ---------------------------------------------------------------------------
/// Weekly Routine
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_routine(state: State<'_, Arc<AppState>>) -> Result<Vec<RoutineItem>, String> {
  store::list_routine(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch routine: {}", e))
}

#[tauri::command]
pub async fn set_routine_day(
  state: State<'_, Arc<AppState>>,
  day_of_week: u32,
  day_type: String,
) -> Result<RoutineItem, String> {
  store::set_routine_day(&state.db, day_of_week, &day_type)
    .await
    .map_err(|e| format!("Failed to set routine day: {}", e))
}

#[tauri::command]
pub async fn clear_routine_day(
  state: State<'_, Arc<AppState>>,
  day_of_week: u32,
) -> Result<bool, String> {
  store::clear_routine_day(&state.db, day_of_week)
    .await
    .map_err(|e| format!("Failed to clear routine day: {}", e))
}

/// Create the pending tasks for `date` from the routine
#[tauri::command]
pub async fn schedule_day(
  state: State<'_, Arc<AppState>>,
  date: NaiveDate,
) -> Result<Vec<WorkoutTask>, String> {
  store::schedule_day(&state.db, date)
    .await
    .map_err(|e| format!("Failed to schedule {}: {}", date, e))
}
