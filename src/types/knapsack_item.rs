//! Items of the fractional knapsack problem.

use serde::{Deserialize, Serialize};

/// An item that can be put (wholly or partially) into the knapsack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackItem {
  pub id: String,
  pub label: String,
  pub value: f64,
  pub weight: f64,
}

impl KnapsackItem {
  pub fn new(id: impl Into<String>, value: f64, weight: f64) -> Self {
    let id = id.into();
    Self {
      label: id.clone(),
      id,
      value,
      weight,
    }
  }

  /// Value per unit of weight. Zero-weight items rank first when they carry
  /// any value and last otherwise.
  pub fn ratio(&self) -> f64 {
    if self.weight == 0.0 {
      if self.value > 0.0 { f64::INFINITY } else { 0.0 }
    } else {
      self.value / self.weight
    }
  }
}

/// An item decision recorded in a knapsack step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
  pub id: String,
  pub value: f64,
  pub weight: f64,
  /// `+inf` for a zero-weight item with value; stored as `"inf"` in JSON.
  #[serde(with = "super::distance::unbounded")]
  pub ratio: f64,
  /// Share of the item taken, in `0.0..=1.0` (`0.0` for rejected items).
  pub fraction: f64,
}

impl SelectedItem {
  /// Value contributed by the taken fraction.
  pub fn taken_value(&self) -> f64 {
    self.value * self.fraction
  }
}
