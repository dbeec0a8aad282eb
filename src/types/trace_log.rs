//! DTOs for trace.json: the complete step list of one executor invocation.

use serde::{Deserialize, Serialize};

use super::Step;

/// Inputs that produced a trace, recorded alongside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceParameters {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub capacity: Option<f64>,
  pub node_count: usize,
  pub edge_count: usize,
}

/// Root structure for trace.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLog {
  /// Log format version.
  pub version: u32,
  /// Algorithm name (e.g. "dijkstra", "floyd_warshall").
  pub algorithm: String,
  pub parameters: TraceParameters,
  /// RFC 3339 timestamp when generation started.
  pub started_at: String,
  /// RFC 3339 timestamp when generation finished.
  pub finished_at: Option<String>,
  pub step_count: usize,
  /// Recorded steps in order.
  pub steps: Vec<Step>,
}

impl TraceLog {
  pub const VERSION: u32 = 1;

  pub fn final_step(&self) -> Option<&Step> {
    self.steps.last()
  }
}
