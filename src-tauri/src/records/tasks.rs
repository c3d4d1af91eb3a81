//! Workout task storage
//!
//! Sets are kept as a JSON array in `sets_json`, the way step configs are
//! stored elsewhere: the app never queries inside a set.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::StoreError;
use crate::models::{Category, NewWorkoutTask, SetEntry, WorkoutTask};

const TASK_COLUMNS: &str =
  "id, date, category, name, body_part, sets_json, target, actual_weight, is_completed";

// ---------------------------------------------------------------------------
/// Task Filter: which tasks a read returns
// ---------------------------------------------------------------------------

/// Every field is optional; `None` means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFilter {
  pub name: Option<String>,
  pub category: Option<Category>,
  pub completed: Option<bool>,
  /// Inclusive lower date bound
  pub from: Option<NaiveDate>,
  /// Inclusive upper date bound
  pub to: Option<NaiveDate>,
}

impl TaskFilter {
  pub fn by_name(name: &str) -> Self {
    Self {
      name: Some(name.to_string()),
      ..Self::default()
    }
  }

  pub fn by_category(category: Category) -> Self {
    Self {
      category: Some(category),
      ..Self::default()
    }
  }

  pub fn completed(mut self) -> Self {
    self.completed = Some(true);
    self
  }

  pub fn on(mut self, date: NaiveDate) -> Self {
    self.from = Some(date);
    self.to = Some(date);
    self
  }

  pub fn matches(&self, task: &WorkoutTask) -> bool {
    self.name.as_ref().is_none_or(|n| *n == task.name)
      && self.category.is_none_or(|c| c == task.category)
      && self.completed.is_none_or(|c| c == task.is_completed)
      && self.from.is_none_or(|d| task.date >= d)
      && self.to.is_none_or(|d| task.date <= d)
  }
}

// ---------------------------------------------------------------------------
// Row Mapping
// ---------------------------------------------------------------------------

fn task_from_row(row: &SqliteRow) -> Result<WorkoutTask, StoreError> {
  let id: i64 = row.try_get("id")?;

  let category_str: String = row.try_get("category")?;
  let category: Category = category_str
    .parse()
    .map_err(|e| StoreError::Corrupt(format!("task {}: {}", id, e)))?;

  let sets_json: String = row.try_get("sets_json")?;
  let sets: Vec<SetEntry> = serde_json::from_str(&sets_json)
    .map_err(|e| StoreError::Corrupt(format!("task {}: bad sets: {}", id, e)))?;

  Ok(WorkoutTask {
    id,
    date: row.try_get("date")?,
    category,
    name: row.try_get("name")?,
    body_part: row.try_get("body_part")?,
    sets,
    target: row.try_get("target")?,
    actual_weight: row.try_get("actual_weight")?,
    is_completed: row.try_get("is_completed")?,
  })
}

fn sets_to_json(sets: &[SetEntry]) -> Result<String, StoreError> {
  serde_json::to_string(sets).map_err(|e| StoreError::Invalid(format!("Failed to encode sets: {}", e)))
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Load tasks matching `filter`, oldest first. Rows that can't be decoded are
/// logged and skipped so one bad record doesn't blank every chart.
pub async fn list_tasks(pool: &SqlitePool, filter: &TaskFilter) -> Result<Vec<WorkoutTask>, StoreError> {
  let sql = format!(
    r#"
    SELECT {}
    FROM workout_tasks
    WHERE (?1 IS NULL OR name = ?1)
      AND (?2 IS NULL OR category = ?2)
      AND (?3 IS NULL OR is_completed = ?3)
      AND (?4 IS NULL OR date >= ?4)
      AND (?5 IS NULL OR date <= ?5)
    ORDER BY date, id
    "#,
    TASK_COLUMNS
  );

  let rows = sqlx::query(&sql)
    .bind(filter.name.as_deref())
    .bind(filter.category.map(|c| c.to_string()))
    .bind(filter.completed)
    .bind(filter.from)
    .bind(filter.to)
    .fetch_all(pool)
    .await?;

  let mut tasks = Vec::with_capacity(rows.len());
  for row in &rows {
    match task_from_row(row) {
      Ok(task) => tasks.push(task),
      Err(e) => warn!("Skipping unreadable task row: {}", e),
    }
  }

  Ok(tasks)
}

pub async fn get_task(pool: &SqlitePool, id: i64) -> Result<WorkoutTask, StoreError> {
  let sql = format!("SELECT {} FROM workout_tasks WHERE id = ?1", TASK_COLUMNS);
  let row = sqlx::query(&sql)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("Task {}", id)))?;

  task_from_row(&row)
}

pub async fn insert_task(pool: &SqlitePool, task: &NewWorkoutTask) -> Result<WorkoutTask, StoreError> {
  let sets_json = sets_to_json(&task.sets)?;

  let result = sqlx::query(
    r#"
    INSERT INTO workout_tasks
      (date, category, name, body_part, sets_json, target, actual_weight, is_completed)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#,
  )
  .bind(task.date)
  .bind(task.category.to_string())
  .bind(&task.name)
  .bind(&task.body_part)
  .bind(&sets_json)
  .bind(&task.target)
  .bind(&task.actual_weight)
  .bind(task.is_completed)
  .execute(pool)
  .await?;

  let id = result.last_insert_rowid();
  debug!("Inserted task {} ({} on {})", id, task.name, task.date);

  Ok(WorkoutTask {
    id,
    date: task.date,
    category: task.category,
    name: task.name.clone(),
    body_part: task.body_part.clone(),
    sets: task.sets.clone(),
    target: task.target.clone(),
    actual_weight: task.actual_weight.clone(),
    is_completed: task.is_completed,
  })
}

pub async fn update_task(pool: &SqlitePool, task: &WorkoutTask) -> Result<(), StoreError> {
  let sets_json = sets_to_json(&task.sets)?;

  let result = sqlx::query(
    r#"
    UPDATE workout_tasks
    SET date = ?1,
        category = ?2,
        name = ?3,
        body_part = ?4,
        sets_json = ?5,
        target = ?6,
        actual_weight = ?7,
        is_completed = ?8
    WHERE id = ?9
    "#,
  )
  .bind(task.date)
  .bind(task.category.to_string())
  .bind(&task.name)
  .bind(&task.body_part)
  .bind(&sets_json)
  .bind(&task.target)
  .bind(&task.actual_weight)
  .bind(task.is_completed)
  .bind(task.id)
  .execute(pool)
  .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(format!("Task {}", task.id)));
  }
  debug!("Updated task {}", task.id);
  Ok(())
}

pub async fn set_task_completed(pool: &SqlitePool, id: i64, completed: bool) -> Result<(), StoreError> {
  let result = sqlx::query("UPDATE workout_tasks SET is_completed = ?1 WHERE id = ?2")
    .bind(completed)
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(format!("Task {}", id)));
  }
  Ok(())
}

pub async fn delete_task(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
  let result = sqlx::query("DELETE FROM workout_tasks WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(format!("Task {}", id)));
  }
  debug!("Deleted task {}", id);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{date, new_task, seed_test_tasks, setup_test_db, teardown_test_db};

  #[tokio::test]
  async fn test_insert_and_get_roundtrip() {
    let pool = setup_test_db().await;

    let mut new = new_task(date(2024, 1, 1), "Squat", Category::Strength, &[("100kg", "5"), ("105kg", "3")]);
    new.sets[1].right_weight = Some("100kg".to_string());
    let inserted = insert_task(&pool, &new).await.expect("Should insert");

    let loaded = get_task(&pool, inserted.id).await.expect("Should load");
    assert_eq!(loaded, inserted);
    assert_eq!(loaded.sets.len(), 2);
    assert_eq!(loaded.sets[1].right_weight.as_deref(), Some("100kg"));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_list_tasks_filters() {
    let pool = setup_test_db().await;
    seed_test_tasks(&pool).await;

    let all = list_tasks(&pool, &TaskFilter::default()).await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].date <= w[1].date));

    let squats = list_tasks(&pool, &TaskFilter::by_name("Squat")).await.unwrap();
    assert_eq!(squats.len(), 3);

    let cardio = list_tasks(&pool, &TaskFilter::by_category(Category::Cardio)).await.unwrap();
    assert_eq!(cardio.len(), 1);
    assert_eq!(cardio[0].name, "Run");

    let done = list_tasks(&pool, &TaskFilter::default().completed()).await.unwrap();
    assert_eq!(done.len(), 4);

    let jan_first = list_tasks(&pool, &TaskFilter::default().on(date(2024, 1, 1))).await.unwrap();
    assert_eq!(jan_first.len(), 2);

    // SQL and in-memory filtering agree
    let filter = TaskFilter::by_name("Squat").completed();
    let from_db = list_tasks(&pool, &filter).await.unwrap();
    let in_memory: Vec<_> = all.into_iter().filter(|t| filter.matches(t)).collect();
    assert_eq!(from_db, in_memory);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_list_tasks_skips_corrupt_rows() {
    let pool = setup_test_db().await;
    seed_test_tasks(&pool).await;

    sqlx::query("INSERT INTO workout_tasks (date, category, name, sets_json) VALUES ('2024-01-09', 'YOGA', 'Flow', '[]')")
      .execute(&pool)
      .await
      .unwrap();
    sqlx::query("INSERT INTO workout_tasks (date, category, name, sets_json) VALUES ('2024-01-09', 'CORE', 'Plank', 'not json')")
      .execute(&pool)
      .await
      .unwrap();

    let all = list_tasks(&pool, &TaskFilter::default()).await.unwrap();
    assert_eq!(all.len(), 5);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_update_and_complete_task() {
    let pool = setup_test_db().await;

    let new = new_task(date(2024, 3, 1), "Bench Press", Category::Strength, &[("60", "8")]);
    let mut task = insert_task(&pool, &NewWorkoutTask { is_completed: false, ..new })
      .await
      .unwrap();

    task.sets.push(SetEntry::new(2, "65", "6"));
    update_task(&pool, &task).await.expect("Should update");
    set_task_completed(&pool, task.id, true).await.expect("Should complete");

    let reloaded = get_task(&pool, task.id).await.unwrap();
    assert_eq!(reloaded.sets.len(), 2);
    assert!(reloaded.is_completed);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_missing_task_is_not_found() {
    let pool = setup_test_db().await;

    assert!(matches!(get_task(&pool, 42).await, Err(StoreError::NotFound(_))));
    assert!(matches!(delete_task(&pool, 42).await, Err(StoreError::NotFound(_))));
    assert!(matches!(set_task_completed(&pool, 42, true).await, Err(StoreError::NotFound(_))));

    let err = get_task(&pool, 42).await.unwrap_err();
    assert!(err.to_string().contains("not found"));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_delete_task() {
    let pool = setup_test_db().await;
    let ids = seed_test_tasks(&pool).await;

    delete_task(&pool, ids[0]).await.expect("Should delete");
    let all = list_tasks(&pool, &TaskFilter::default()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|t| t.id != ids[0]));

    teardown_test_db(pool).await;
  }
}
