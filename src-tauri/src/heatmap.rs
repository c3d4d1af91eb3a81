//! Per-body-part training volume for the muscle heat map
//!
//! Full-history reduction over completed tasks. Volume is weight x reps,
//! minutes, or reps depending on how the exercise is logged; intensity is
//! volume relative to the most-trained part.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::BodyPartCatalog;
use crate::models::{LoggingMode, SetEntry, WorkoutTask};
use crate::parse::{parse_duration, parse_value};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct HeatMapEntry {
  pub volume: f64,
  /// `volume / max volume`, in [0, 1]
  pub intensity: f64,
}

pub type HeatMap = BTreeMap<String, HeatMapEntry>;

/// Volume contributed by one set under the given logging mode. A product too
/// large for an f64 counts as 0.
pub fn set_volume(set: &SetEntry, mode: LoggingMode) -> f64 {
  let volume = match mode {
    LoggingMode::WeightReps => parse_value(&set.weight_or_duration) * parse_value(&set.reps),
    LoggingMode::Duration => parse_duration(&set.weight_or_duration),
    LoggingMode::RepsOnly => parse_value(&set.reps),
  };
  if volume.is_finite() {
    volume
  } else {
    0.0
  }
}

/// Fold completed tasks into a heat map. Every part in the catalog shows up
/// in the result, untrained ones at zero.
pub fn build_heat_map(tasks: &[WorkoutTask], catalog: &BodyPartCatalog) -> HeatMap {
  let mut volumes: BTreeMap<String, f64> = catalog
    .parts()
    .iter()
    .map(|part| (part.clone(), 0.0))
    .collect();

  for task in tasks.iter().filter(|t| t.is_completed) {
    let mode = catalog.mode_for(task);
    let task_volume: f64 = task
      .effective_sets(mode)
      .iter()
      .fold(0.0_f64, |acc, set| (acc + set_volume(set, mode)).min(f64::MAX));

    // Sums saturate at f64::MAX, keeping every intensity within [0, 1]
    let part = catalog.resolve_part(&task.body_part);
    let total = volumes.entry(part.to_string()).or_insert(0.0);
    *total = (*total + task_volume).min(f64::MAX);
  }

  let max_volume = volumes.values().copied().fold(0.0_f64, f64::max);

  volumes
    .into_iter()
    .map(|(part, volume)| {
      let intensity = if max_volume > 0.0 {
        volume / max_volume
      } else {
        0.0
      };
      (part, HeatMapEntry { volume, intensity })
    })
    .collect()
}
