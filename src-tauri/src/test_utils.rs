//! Test utilities and helpers for unit and integration testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Seed data for the record store
//! - Mock data factories
//! - Helper assertions

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{
  Category, LoggingMode, NewExerciseTemplate, NewWorkoutTask, SetEntry, WeightSample, WorkoutTask,
};
use crate::records::{insert_task, insert_template};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed five tasks:
/// - Squat 2024-01-01 100x5 (done)
/// - Squat 2024-01-01 110x5 (done)
/// - Squat 2024-02-01 120x5 (done)
/// - Run 2024-01-02 30min (done)
/// - Bench Press 2024-01-03 60x8 (pending)
///
/// Returns the ids in that order.
pub async fn seed_test_tasks(pool: &SqlitePool) -> Vec<i64> {
  let tasks = vec![
    (date(2024, 1, 1), "Squat", Category::Strength, "part_legs", ("100", "5"), true),
    (date(2024, 1, 1), "Squat", Category::Strength, "part_legs", ("110", "5"), true),
    (date(2024, 2, 1), "Squat", Category::Strength, "part_legs", ("120", "5"), true),
    (date(2024, 1, 2), "Run", Category::Cardio, "part_cardio", ("30min", ""), true),
    (date(2024, 1, 3), "Bench Press", Category::Strength, "part_chest", ("60", "8"), false),
  ];

  let mut ids = Vec::new();
  for (d, name, category, body_part, set, done) in tasks {
    let task = NewWorkoutTask {
      body_part: body_part.to_string(),
      is_completed: done,
      ..new_task(d, name, category, &[set])
    };
    let saved = insert_task(pool, &task)
      .await
      .expect("Failed to seed test task");
    ids.push(saved.id);
  }

  ids
}

/// Seed four templates. Squat and Plank belong to the "legs" day type,
/// Bench Press to "push", Run to none.
pub async fn seed_test_templates(pool: &SqlitePool) -> Vec<i64> {
  let templates = vec![
    ("Bench Press", Category::Strength, "part_chest", None, Some("push"), "3x10"),
    ("Plank", Category::Core, "part_abs", Some(LoggingMode::Duration), Some("legs"), "60s"),
    ("Run", Category::Cardio, "part_cardio", None, None, "30min"),
    ("Squat", Category::Strength, "part_legs", None, Some("legs"), "3x8"),
  ];

  let mut ids = Vec::new();
  for (name, category, body_part, logging_mode, day_type, default_target) in templates {
    let template = NewExerciseTemplate {
      name: name.to_string(),
      category,
      body_part: body_part.to_string(),
      logging_mode,
      day_type: day_type.map(str::to_string),
      default_target: default_target.to_string(),
    };
    let saved = insert_template(pool, &template)
      .await
      .expect("Failed to seed test template");
    ids.push(saved.id);
  }

  ids
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}

fn sets_from(sets: &[(&str, &str)]) -> Vec<SetEntry> {
  sets
    .iter()
    .enumerate()
    .map(|(i, (load, reps))| SetEntry::new(i as u32 + 1, load, reps))
    .collect()
}

/// A completed insert-form task with numbered sets
pub fn new_task(date: NaiveDate, name: &str, category: Category, sets: &[(&str, &str)]) -> NewWorkoutTask {
  NewWorkoutTask {
    date,
    category,
    name: name.to_string(),
    body_part: String::new(),
    sets: sets_from(sets),
    target: String::new(),
    actual_weight: String::new(),
    is_completed: true,
  }
}

/// A completed task on the given date
pub fn mock_task_on(
  date: NaiveDate,
  name: &str,
  category: Category,
  body_part: &str,
  sets: &[(&str, &str)],
) -> WorkoutTask {
  WorkoutTask {
    id: 0,
    date,
    category,
    name: name.to_string(),
    body_part: body_part.to_string(),
    sets: sets_from(sets),
    target: String::new(),
    actual_weight: String::new(),
    is_completed: true,
  }
}

/// A completed task on 2024-01-01
pub fn mock_task(name: &str, category: Category, body_part: &str, sets: &[(&str, &str)]) -> WorkoutTask {
  mock_task_on(date(2024, 1, 1), name, category, body_part, sets)
}

pub fn mock_weight(date: NaiveDate, weight: f64) -> WeightSample {
  WeightSample { id: 0, date, weight }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff: f64 = (($left) - ($right)).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('workout_tasks', 'weight_samples', 'exercise_templates', 'routine_items')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 4, "Expected 4 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_tasks_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_tasks(&pool).await;
    assert_eq!(ids.len(), 5);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_tasks")
      .fetch_one(&pool)
      .await
      .expect("Failed to count tasks");

    assert_eq!(count, 5);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_number_sets() {
    let task = mock_task("Squat", Category::Strength, "part_legs", &[("100", "5"), ("110", "3")]);
    assert_eq!(task.date, date(2024, 1, 1));
    assert_eq!(task.sets[0].set_number, 1);
    assert_eq!(task.sets[1].set_number, 2);
    assert_eq!(task.sets[1].weight_or_duration, "110");
    assert!(task.is_completed);
  }
}
