//! Lifecycle status of a node within one algorithm run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a node within one algorithm run.
///
/// Every node starts `Unvisited`. `Rejected` is only used by greedy executors
/// for permanently excluded items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
  #[default]
  Unvisited,
  Current,
  Processing,
  Finalized,
  Rejected,
}

impl fmt::Display for NodeStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NodeStatus::Unvisited => write!(f, "unvisited"),
      NodeStatus::Current => write!(f, "current"),
      NodeStatus::Processing => write!(f, "processing"),
      NodeStatus::Finalized => write!(f, "finalized"),
      NodeStatus::Rejected => write!(f, "rejected"),
    }
  }
}
