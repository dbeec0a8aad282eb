//! Immutable snapshot of one instant of an algorithm run.
//!
//! A step owns full copies of every status map; producing a later step never
//! alters an earlier one. The Floyd-Warshall matrix is shared through an `Arc`
//! between consecutive steps that leave it unchanged, which keeps the
//! snapshot guarantee without copying `n²` cells per step.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Distance, EdgeStatus, NodeStatus, SelectedItem};

/// Node id -> status.
pub type NodeStatusMap = BTreeMap<String, NodeStatus>;
/// Canonical edge key -> status.
pub type EdgeStatusMap = BTreeMap<String, EdgeStatus>;
/// Node id -> best known distance.
pub type DistanceMap = BTreeMap<String, Distance>;
/// All-pairs distances in `graph.nodes` order.
pub type DistanceMatrix = Vec<Vec<Distance>>;

/// The edge being highlighted, in the orientation the algorithm traversed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentEdge {
  pub source: String,
  pub target: String,
}

impl CurrentEdge {
  pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
    }
  }

  pub fn key(&self) -> String {
    super::canonical_edge_key(&self.source, &self.target)
  }
}

/// One recorded instant of an algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
  pub description: String,
  pub node_statuses: NodeStatusMap,
  pub edge_statuses: EdgeStatusMap,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_node_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_edge: Option<CurrentEdge>,
  /// Dijkstra / Bellman-Ford running distances.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub distance_map: Option<DistanceMap>,
  /// Floyd-Warshall all-pairs matrix.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub distance_matrix: Option<Arc<DistanceMatrix>>,
  /// Prim running tree weight.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mst_cost: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total_value: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub selected_items: Option<Vec<SelectedItem>>,
  /// Bellman-Ford terminal flag.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub negative_cycle_detected: Option<bool>,
}

impl Step {
  pub fn new(
    description: impl Into<String>,
    node_statuses: NodeStatusMap,
    edge_statuses: EdgeStatusMap,
  ) -> Self {
    Self {
      description: description.into(),
      node_statuses,
      edge_statuses,
      current_node_id: None,
      current_edge: None,
      distance_map: None,
      distance_matrix: None,
      mst_cost: None,
      total_value: None,
      selected_items: None,
      negative_cycle_detected: None,
    }
  }

  pub fn with_current_node(mut self, id: impl Into<String>) -> Self {
    self.current_node_id = Some(id.into());
    self
  }

  pub fn with_current_edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
    self.current_edge = Some(CurrentEdge::new(source, target));
    self
  }

  pub fn with_distances(mut self, distances: DistanceMap) -> Self {
    self.distance_map = Some(distances);
    self
  }

  pub fn with_matrix(mut self, matrix: Arc<DistanceMatrix>) -> Self {
    self.distance_matrix = Some(matrix);
    self
  }

  pub fn with_mst_cost(mut self, cost: f64) -> Self {
    self.mst_cost = Some(cost);
    self
  }

  pub fn with_knapsack(mut self, total_value: f64, selected: Vec<SelectedItem>) -> Self {
    self.total_value = Some(total_value);
    self.selected_items = Some(selected);
    self
  }

  pub fn with_negative_cycle(mut self, detected: bool) -> Self {
    self.negative_cycle_detected = Some(detected);
    self
  }

  pub fn node_status(&self, id: &str) -> Option<NodeStatus> {
    self.node_statuses.get(id).copied()
  }

  /// Status of the edge between `a` and `b`, looked up by canonical key.
  pub fn edge_status(&self, a: &str, b: &str) -> Option<EdgeStatus> {
    self
      .edge_statuses
      .get(&super::canonical_edge_key(a, b))
      .copied()
  }

  /// Canonical keys of every edge with the given status, in key order.
  pub fn edges_with_status(&self, status: EdgeStatus) -> Vec<&str> {
    self
      .edge_statuses
      .iter()
      .filter(|(_, s)| **s == status)
      .map(|(k, _)| k.as_str())
      .collect()
  }
}
