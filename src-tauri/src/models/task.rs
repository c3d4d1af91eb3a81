use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ---------------------------------------------------------------------------
/// Category: broad kind of exercise
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
  Strength,
  Cardio,
  Core,
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Strength => write!(f, "STRENGTH"),
      Self::Cardio => write!(f, "CARDIO"),
      Self::Core => write!(f, "CORE"),
    }
  }
}

impl std::str::FromStr for Category {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "STRENGTH" => Ok(Self::Strength),
      "CARDIO" => Ok(Self::Cardio),
      "CORE" => Ok(Self::Core),
      _ => Err(format!("Unknown category: {}", s)),
    }
  }
}

// ---------------------------------------------------------------------------
/// Logging Mode: how the sets of an exercise are recorded
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingMode {
  /// Load in `weight_or_duration`, repetitions in `reps`
  WeightReps,
  /// Time in `weight_or_duration`, reps ignored
  Duration,
  /// Bodyweight work, only `reps` matters
  RepsOnly,
}

impl LoggingMode {
  /// Mode assumed when no template says otherwise
  pub fn for_category(category: Category) -> Self {
    match category {
      Category::Cardio => Self::Duration,
      Category::Strength | Category::Core => Self::WeightReps,
    }
  }
}

impl std::fmt::Display for LoggingMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::WeightReps => write!(f, "weight_reps"),
      Self::Duration => write!(f, "duration"),
      Self::RepsOnly => write!(f, "reps_only"),
    }
  }
}

impl std::str::FromStr for LoggingMode {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "weight_reps" => Ok(Self::WeightReps),
      "duration" => Ok(Self::Duration),
      "reps_only" => Ok(Self::RepsOnly),
      _ => Err(format!("Unknown logging mode: {}", s)),
    }
  }
}

// ---------------------------------------------------------------------------
/// Sets and Tasks
// ---------------------------------------------------------------------------

/// One performed set. Fields are free text exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
  pub set_number: u32,
  pub weight_or_duration: String,
  pub reps: String,
  /// Right-side load for unilateral exercises
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub right_weight: Option<String>,
}

impl SetEntry {
  pub fn new(set_number: u32, weight_or_duration: &str, reps: &str) -> Self {
    Self {
      set_number,
      weight_or_duration: weight_or_duration.to_string(),
      reps: reps.to_string(),
      right_weight: None,
    }
  }
}

/// One exercise on one date, scheduled or done
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTask {
  pub id: i64,
  pub date: NaiveDate,
  pub category: Category,
  pub name: String,
  pub body_part: String,
  pub sets: Vec<SetEntry>,
  /// Legacy scalar, only read when `sets` is empty
  pub target: String,
  /// Legacy scalar, only read when `sets` is empty
  pub actual_weight: String,
  pub is_completed: bool,
}

impl WorkoutTask {
  /// Sets to aggregate over. Tasks logged before per-set entry existed get a
  /// single set built from the legacy fields: the load is `actual_weight`,
  /// except that duration exercises kept their time in `target`.
  pub fn effective_sets(&self, mode: LoggingMode) -> Cow<'_, [SetEntry]> {
    if !self.sets.is_empty() {
      return Cow::Borrowed(&self.sets);
    }
    if self.target.trim().is_empty() && self.actual_weight.trim().is_empty() {
      return Cow::Owned(Vec::new());
    }

    let load = if !self.actual_weight.trim().is_empty() {
      self.actual_weight.as_str()
    } else if mode == LoggingMode::Duration {
      self.target.as_str()
    } else {
      ""
    };
    Cow::Owned(vec![SetEntry::new(1, load, &self.target)])
  }
}

/// For inserting new tasks (without id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutTask {
  pub date: NaiveDate,
  pub category: Category,
  pub name: String,
  #[serde(default)]
  pub body_part: String,
  #[serde(default)]
  pub sets: Vec<SetEntry>,
  #[serde(default)]
  pub target: String,
  #[serde(default)]
  pub actual_weight: String,
  #[serde(default)]
  pub is_completed: bool,
}
