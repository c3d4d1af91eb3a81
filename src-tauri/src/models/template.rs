use serde::{Deserialize, Serialize};

use super::task::{Category, LoggingMode};

/// Exercise template: what an exercise trains and how its sets are logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
  pub id: i64,
  pub name: String,
  pub category: Category,
  pub body_part: String,
  pub logging_mode: LoggingMode,
  /// Routine day type this exercise belongs to ("push", "legs", ...)
  pub day_type: Option<String>,
  pub default_target: String,
}

/// For inserting new templates (without id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseTemplate {
  pub name: String,
  pub category: Category,
  #[serde(default)]
  pub body_part: String,
  pub logging_mode: Option<LoggingMode>,
  pub day_type: Option<String>,
  #[serde(default)]
  pub default_target: String,
}

impl NewExerciseTemplate {
  pub fn effective_logging_mode(&self) -> LoggingMode {
    self
      .logging_mode
      .unwrap_or_else(|| LoggingMode::for_category(self.category))
  }
}

/// Weekly routine slot. `day_of_week` runs 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoutineItem {
  pub id: i64,
  pub day_of_week: u32,
  pub day_type: String,
}
