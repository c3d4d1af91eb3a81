//! Body-part lookup table for the heat map
//!
//! The set of recognised body parts and the per-exercise logging mode are
//! configuration, not aggregation logic, so they live here and get handed to
//! the heat-map aggregator as a value.

use std::collections::HashMap;

use crate::models::{ExerciseTemplate, LoggingMode, WorkoutTask};

/// Catch-all bucket for empty or unrecognised body-part keys
pub const OTHER_PART: &str = "part_other";

pub const DEFAULT_BODY_PARTS: &[&str] = &[
  "part_chest",
  "part_back",
  "part_shoulders",
  "part_arms",
  "part_abs",
  "part_legs",
  "part_glutes",
  "part_cardio",
  OTHER_PART,
];

#[derive(Debug, Clone)]
pub struct BodyPartCatalog {
  parts: Vec<String>,
  modes: HashMap<String, LoggingMode>,
}

impl Default for BodyPartCatalog {
  fn default() -> Self {
    Self::new(DEFAULT_BODY_PARTS.iter().map(|p| p.to_string()))
  }
}

impl BodyPartCatalog {
  /// Build a catalog from a list of part keys. `part_other` is always added.
  pub fn new(parts: impl IntoIterator<Item = String>) -> Self {
    let mut parts: Vec<String> = parts.into_iter().collect();
    if !parts.iter().any(|p| p == OTHER_PART) {
      parts.push(OTHER_PART.to_string());
    }
    Self {
      parts,
      modes: HashMap::new(),
    }
  }

  /// Record the logging mode of every template, keyed by exercise name
  pub fn with_templates(mut self, templates: &[ExerciseTemplate]) -> Self {
    for template in templates {
      self
        .modes
        .insert(template.name.clone(), template.logging_mode);
    }
    self
  }

  pub fn parts(&self) -> &[String] {
    &self.parts
  }

  /// Map a stored key onto a known part, falling back to `part_other`
  pub fn resolve_part<'a>(&'a self, key: &str) -> &'a str {
    let key = key.trim();
    self
      .parts
      .iter()
      .find(|p| p.as_str() == key)
      .map(String::as_str)
      .unwrap_or(OTHER_PART)
  }

  /// Template mode for the task's exercise, else the category default
  pub fn mode_for(&self, task: &WorkoutTask) -> LoggingMode {
    self
      .modes
      .get(&task.name)
      .copied()
      .unwrap_or_else(|| LoggingMode::for_category(task.category))
  }
}
