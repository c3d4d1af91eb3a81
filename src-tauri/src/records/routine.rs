//! Exercise templates, the weekly routine, and scheduling a day from them

use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashSet;

use super::tasks::{insert_task, list_tasks, TaskFilter};
use crate::error::StoreError;
use crate::models::{
  Category, ExerciseTemplate, LoggingMode, NewExerciseTemplate, NewWorkoutTask, RoutineItem,
  WorkoutTask,
};

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

fn template_from_row(row: &SqliteRow) -> Result<ExerciseTemplate, StoreError> {
  let id: i64 = row.try_get("id")?;
  let category_str: String = row.try_get("category")?;
  let mode_str: String = row.try_get("logging_mode")?;

  let category: Category = category_str
    .parse()
    .map_err(|e| StoreError::Corrupt(format!("template {}: {}", id, e)))?;
  let logging_mode: LoggingMode = mode_str
    .parse()
    .map_err(|e| StoreError::Corrupt(format!("template {}: {}", id, e)))?;

  Ok(ExerciseTemplate {
    id,
    name: row.try_get("name")?,
    category,
    body_part: row.try_get("body_part")?,
    logging_mode,
    day_type: row.try_get("day_type")?,
    default_target: row.try_get("default_target")?,
  })
}

/// All templates by name. Unreadable rows are logged and skipped.
pub async fn list_templates(pool: &SqlitePool) -> Result<Vec<ExerciseTemplate>, StoreError> {
  let rows = sqlx::query(
    r#"
    SELECT id, name, category, body_part, logging_mode, day_type, default_target
    FROM exercise_templates
    ORDER BY name
    "#,
  )
  .fetch_all(pool)
  .await?;

  let mut templates = Vec::with_capacity(rows.len());
  for row in &rows {
    match template_from_row(row) {
      Ok(t) => templates.push(t),
      Err(e) => warn!("Skipping unreadable template row: {}", e),
    }
  }
  Ok(templates)
}

pub async fn insert_template(
  pool: &SqlitePool,
  template: &NewExerciseTemplate,
) -> Result<ExerciseTemplate, StoreError> {
  if template.name.trim().is_empty() {
    return Err(StoreError::Invalid("Template name is empty".into()));
  }
  let logging_mode = template.effective_logging_mode();

  let result = sqlx::query(
    r#"
    INSERT INTO exercise_templates
      (name, category, body_part, logging_mode, day_type, default_target)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
  )
  .bind(&template.name)
  .bind(template.category.to_string())
  .bind(&template.body_part)
  .bind(logging_mode.to_string())
  .bind(&template.day_type)
  .bind(&template.default_target)
  .execute(pool)
  .await?;

  Ok(ExerciseTemplate {
    id: result.last_insert_rowid(),
    name: template.name.clone(),
    category: template.category,
    body_part: template.body_part.clone(),
    logging_mode,
    day_type: template.day_type.clone(),
    default_target: template.default_target.clone(),
  })
}

pub async fn update_template(pool: &SqlitePool, template: &ExerciseTemplate) -> Result<(), StoreError> {
  let result = sqlx::query(
    r#"
    UPDATE exercise_templates
    SET name = ?1,
        category = ?2,
        body_part = ?3,
        logging_mode = ?4,
        day_type = ?5,
        default_target = ?6
    WHERE id = ?7
    "#,
  )
  .bind(&template.name)
  .bind(template.category.to_string())
  .bind(&template.body_part)
  .bind(template.logging_mode.to_string())
  .bind(&template.day_type)
  .bind(&template.default_target)
  .bind(template.id)
  .execute(pool)
  .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(format!("Template {}", template.id)));
  }
  Ok(())
}

pub async fn delete_template(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
  let result = sqlx::query("DELETE FROM exercise_templates WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(format!("Template {}", id)));
  }
  Ok(())
}

// ---------------------------------------------------------------------------
// Weekly Routine
// ---------------------------------------------------------------------------

fn check_weekday(day_of_week: u32) -> Result<(), StoreError> {
  if (1..=7).contains(&day_of_week) {
    Ok(())
  } else {
    Err(StoreError::Invalid(format!(
      "day_of_week must be 1-7, got {}",
      day_of_week
    )))
  }
}

/// Assign a day type to a weekday, replacing any previous assignment
pub async fn set_routine_day(
  pool: &SqlitePool,
  day_of_week: u32,
  day_type: &str,
) -> Result<RoutineItem, StoreError> {
  check_weekday(day_of_week)?;

  sqlx::query(
    r#"
    INSERT INTO routine_items (day_of_week, day_type)
    VALUES (?1, ?2)
    ON CONFLICT(day_of_week) DO UPDATE SET day_type = excluded.day_type
    "#,
  )
  .bind(day_of_week)
  .bind(day_type)
  .execute(pool)
  .await?;

  routine_for_weekday(pool, day_of_week)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("Routine day {}", day_of_week)))
}

/// Remove a weekday's assignment. Returns whether anything was removed.
pub async fn clear_routine_day(pool: &SqlitePool, day_of_week: u32) -> Result<bool, StoreError> {
  check_weekday(day_of_week)?;

  let result = sqlx::query("DELETE FROM routine_items WHERE day_of_week = ?1")
    .bind(day_of_week)
    .execute(pool)
    .await?;

  Ok(result.rows_affected() > 0)
}

pub async fn list_routine(pool: &SqlitePool) -> Result<Vec<RoutineItem>, StoreError> {
  let items = sqlx::query_as::<_, RoutineItem>(
    "SELECT id, day_of_week, day_type FROM routine_items ORDER BY day_of_week",
  )
  .fetch_all(pool)
  .await?;

  Ok(items)
}

pub async fn routine_for_weekday(
  pool: &SqlitePool,
  day_of_week: u32,
) -> Result<Option<RoutineItem>, StoreError> {
  let item = sqlx::query_as::<_, RoutineItem>(
    "SELECT id, day_of_week, day_type FROM routine_items WHERE day_of_week = ?1",
  )
  .bind(day_of_week)
  .fetch_optional(pool)
  .await?;

  Ok(item)
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

/// Create the day's pending tasks from the routine: one per template whose
/// day type matches the weekday's. Exercises already on that date are left
/// alone, so calling this twice is harmless.
pub async fn schedule_day(pool: &SqlitePool, date: NaiveDate) -> Result<Vec<WorkoutTask>, StoreError> {
  let weekday = date.weekday().number_from_monday();
  let Some(routine) = routine_for_weekday(pool, weekday).await? else {
    debug!("No routine for {} (weekday {}), nothing to schedule", date, weekday);
    return Ok(Vec::new());
  };

  let existing: HashSet<String> = list_tasks(pool, &TaskFilter::default().on(date))
    .await?
    .into_iter()
    .map(|t| t.name)
    .collect();

  let mut created = Vec::new();
  for template in list_templates(pool).await? {
    if template.day_type.as_deref() != Some(routine.day_type.as_str()) {
      continue;
    }
    if existing.contains(&template.name) {
      continue;
    }

    let task = NewWorkoutTask {
      date,
      category: template.category,
      name: template.name.clone(),
      body_part: template.body_part.clone(),
      sets: Vec::new(),
      target: template.default_target.clone(),
      actual_weight: String::new(),
      is_completed: false,
    };
    created.push(insert_task(pool, &task).await?);
  }

  info!(
    "Scheduled {} task(s) for {} ({})",
    created.len(),
    date,
    routine.day_type
  );
  Ok(created)
}
