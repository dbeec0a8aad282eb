//! Lifecycle status of an edge within one algorithm run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an edge within one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStatus {
  #[default]
  Unvisited,
  Processing,
  Finalized,
  Rejected,
}

impl fmt::Display for EdgeStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EdgeStatus::Unvisited => write!(f, "unvisited"),
      EdgeStatus::Processing => write!(f, "processing"),
      EdgeStatus::Finalized => write!(f, "finalized"),
      EdgeStatus::Rejected => write!(f, "rejected"),
    }
  }
}
