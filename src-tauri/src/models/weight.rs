use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One body-weight reading in kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeightSample {
  pub id: i64,
  pub date: NaiveDate,
  pub weight: f64,
}

/// For inserting new weight samples (without id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWeightSample {
  pub date: NaiveDate,
  pub weight: f64,
}
