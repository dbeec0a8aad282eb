//! Working status state shared by every executor.
//!
//! Executors mutate the recorder's private maps and call [`StepRecorder::snapshot`]
//! whenever they want to emit a step; the snapshot clones the maps, so later
//! mutation never reaches an already recorded step.

use std::collections::BTreeMap;

use crate::types::{EdgeStatus, EdgeStatusMap, Graph, NodeStatus, NodeStatusMap, Step};

/// Collects steps for one executor invocation.
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
  nodes: NodeStatusMap,
  edges: EdgeStatusMap,
  steps: Vec<Step>,
}

impl StepRecorder {
  /// Every node and edge of `graph` starts `Unvisited`.
  pub fn for_graph(graph: &Graph) -> Self {
    let nodes = graph
      .nodes
      .iter()
      .map(|n| (n.id.clone(), NodeStatus::Unvisited))
      .collect();
    let edges = graph
      .edges
      .iter()
      .map(|e| (e.key(), EdgeStatus::Unvisited))
      .collect();
    Self {
      nodes,
      edges,
      steps: Vec::new(),
    }
  }

  /// Recorder over bare ids without edges (knapsack items).
  pub fn for_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
    Self {
      nodes: ids
        .into_iter()
        .map(|id| (id.to_string(), NodeStatus::Unvisited))
        .collect(),
      edges: BTreeMap::new(),
      steps: Vec::new(),
    }
  }

  /// Sets a node status; ids unknown to the recorder are ignored.
  pub fn set_node(&mut self, id: &str, status: NodeStatus) {
    if let Some(s) = self.nodes.get_mut(id) {
      *s = status;
    }
  }

  /// Sets the status of the edge between `a` and `b`; unknown edges are ignored.
  pub fn set_edge(&mut self, a: &str, b: &str, status: EdgeStatus) {
    self.set_edge_key(&crate::types::canonical_edge_key(a, b), status);
  }

  pub fn set_edge_key(&mut self, key: &str, status: EdgeStatus) {
    if let Some(s) = self.edges.get_mut(key) {
      *s = status;
    }
  }

  pub fn set_all_nodes(&mut self, status: NodeStatus) {
    for s in self.nodes.values_mut() {
      *s = status;
    }
  }

  pub fn node(&self, id: &str) -> Option<NodeStatus> {
    self.nodes.get(id).copied()
  }

  pub fn edge(&self, a: &str, b: &str) -> Option<EdgeStatus> {
    self
      .edges
      .get(&crate::types::canonical_edge_key(a, b))
      .copied()
  }

  /// A step carrying full copies of the current status maps.
  pub fn snapshot(&self, description: impl Into<String>) -> Step {
    Step::new(description, self.nodes.clone(), self.edges.clone())
  }

  pub fn push(&mut self, step: Step) {
    self.steps.push(step);
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn finish(self) -> Vec<Step> {
    self.steps
  }
}
