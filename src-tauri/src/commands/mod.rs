pub mod records;
pub mod reports;

use crate::db::AppState;
use crate::models::{NewWorkoutTask, WorkoutTask};
use crate::records::{self as store, TaskFilter};
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub async fn get_tasks(
  state: State<'_, Arc<AppState>>,
  filter: Option<TaskFilter>,
) -> Result<Vec<WorkoutTask>, String> {
  store::list_tasks(&state.db, &filter.unwrap_or_default())
    .await
    .map_err(|e| format!("Failed to fetch tasks: {}", e))
}

#[tauri::command]
pub async fn add_task(
  state: State<'_, Arc<AppState>>,
  task: NewWorkoutTask,
) -> Result<WorkoutTask, String> {
  store::insert_task(&state.db, &task)
    .await
    .map_err(|e| format!("Failed to add task: {}", e))
}

#[tauri::command]
pub async fn update_task(
  state: State<'_, Arc<AppState>>,
  task: WorkoutTask,
) -> Result<(), String> {
  store::update_task(&state.db, &task)
    .await
    .map_err(|e| format!("Failed to update task: {}", e))
}

#[tauri::command]
pub async fn complete_task(
  state: State<'_, Arc<AppState>>,
  id: i64,
  completed: bool,
) -> Result<(), String> {
  store::set_task_completed(&state.db, id, completed)
    .await
    .map_err(|e| format!("Failed to update task {}: {}", id, e))
}

#[tauri::command]
pub async fn delete_task(
  state: State<'_, Arc<AppState>>,
  id: i64,
) -> Result<(), String> {
  store::delete_task(&state.db, id)
    .await
    .map_err(|e| format!("Failed to delete task {}: {}", id, e))
}
