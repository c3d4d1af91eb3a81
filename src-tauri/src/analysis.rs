//! Chart aggregation for logged workouts and body weight
//!
//! Turns a caller-filtered list of records into a date-ordered series of
//! points: records are grouped by calendar day, each day collapses to one
//! number, and days are optionally folded into months. Everything here is
//! pure; the frontend only renders what comes out.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Category, WeightSample, WorkoutTask};
use crate::parse::{parse_duration, parse_value};

/// ---------------------------------------------------------------------------
/// Series Parameters
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
  Daily,
  Monthly,
}

/// Which number to pull out of each task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
  /// Heaviest set of the day (left/primary side)
  MaxWeight,
  /// Heaviest set of the day, right side of a unilateral exercise
  MaxWeightRight,
  /// Minutes summed over every set of the day
  TotalDuration,
  /// Reps summed over every set of the day
  TotalReps,
}

/// How one day's values collapse into a single number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayReduction {
  Max,
  Sum,
  Mean,
}

/// How day results combine inside a month bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BucketReduction {
  Sum,
  Mean,
}

impl ChartMode {
  fn day_reduction(self) -> DayReduction {
    match self {
      ChartMode::MaxWeight | ChartMode::MaxWeightRight => DayReduction::Max,
      ChartMode::TotalDuration | ChartMode::TotalReps => DayReduction::Sum,
    }
  }

  /// Values a single task contributes to its day. Tasks without sets fall
  /// back to the legacy scalar fields.
  fn task_values(self, task: &WorkoutTask) -> Vec<f64> {
    if task.sets.is_empty() {
      let legacy = match self {
        ChartMode::MaxWeight | ChartMode::MaxWeightRight => parse_value(&task.actual_weight),
        ChartMode::TotalDuration => parse_duration(&task.target),
        ChartMode::TotalReps => parse_value(&task.target),
      };
      return vec![legacy];
    }

    task
      .sets
      .iter()
      .map(|set| match self {
        ChartMode::MaxWeight => parse_value(&set.weight_or_duration),
        ChartMode::MaxWeightRight => parse_value(set.right_weight.as_deref().unwrap_or("")),
        ChartMode::TotalDuration => parse_duration(&set.weight_or_duration),
        ChartMode::TotalReps => parse_value(&set.reps),
      })
      .collect()
  }
}

/// ---------------------------------------------------------------------------
/// Output
/// ---------------------------------------------------------------------------

/// A single point for chart rendering. `date` is the bucket start: the day
/// itself, or the first of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
  pub date: NaiveDate,
  pub value: f64,
  pub label: String,
}

impl ChartDataPoint {
  fn new(date: NaiveDate, value: f64) -> Self {
    Self {
      date,
      value,
      label: date.format("%m/%d").to_string(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Aggregation
/// ---------------------------------------------------------------------------

/// Series for one exercise metric over the given tasks
pub fn chart_series(
  tasks: &[WorkoutTask],
  mode: ChartMode,
  granularity: Granularity,
) -> Vec<ChartDataPoint> {
  let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
  for task in tasks {
    by_day
      .entry(task.date)
      .or_default()
      .extend(mode.task_values(task));
  }

  let days = reduce_days(by_day, mode.day_reduction());
  bucket(days, granularity, BucketReduction::Sum)
}

/// Minutes of cardio per day (or month), ignoring non-cardio tasks
pub fn cardio_series(tasks: &[WorkoutTask], granularity: Granularity) -> Vec<ChartDataPoint> {
  let cardio: Vec<WorkoutTask> = tasks
    .iter()
    .filter(|t| t.category == Category::Cardio)
    .cloned()
    .collect();
  chart_series(&cardio, ChartMode::TotalDuration, granularity)
}

/// Body weight per day as the mean of that day's samples. Monthly buckets
/// average the daily means; summing body weight would be meaningless.
pub fn weight_series(samples: &[WeightSample], granularity: Granularity) -> Vec<ChartDataPoint> {
  let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
  for sample in samples {
    by_day.entry(sample.date).or_default().push(sample.weight);
  }

  let days = reduce_days(by_day, DayReduction::Mean);
  bucket(days, granularity, BucketReduction::Mean)
}

fn reduce_days(
  by_day: BTreeMap<NaiveDate, Vec<f64>>,
  reduction: DayReduction,
) -> BTreeMap<NaiveDate, f64> {
  by_day
    .into_iter()
    .map(|(day, values)| (day, reduce(&values, reduction)))
    .collect()
}

fn reduce(values: &[f64], reduction: DayReduction) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  match reduction {
    DayReduction::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    DayReduction::Sum => values.iter().sum(),
    DayReduction::Mean => values.iter().sum::<f64>() / values.len() as f64,
  }
}

fn month_start(day: NaiveDate) -> NaiveDate {
  NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day)
}

fn bucket(
  days: BTreeMap<NaiveDate, f64>,
  granularity: Granularity,
  reduction: BucketReduction,
) -> Vec<ChartDataPoint> {
  match granularity {
    Granularity::Daily => days
      .into_iter()
      .map(|(day, value)| ChartDataPoint::new(day, value))
      .collect(),
    Granularity::Monthly => {
      let mut months: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
      for (day, value) in days {
        months.entry(month_start(day)).or_default().push(value);
      }

      months
        .into_iter()
        .map(|(month, values)| {
          let value = match reduction {
            BucketReduction::Sum => values.iter().sum(),
            BucketReduction::Mean => values.iter().sum::<f64>() / values.len() as f64,
          };
          ChartDataPoint::new(month, value)
        })
        .collect()
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
