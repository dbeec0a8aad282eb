//! Static input graph: uniquely identified nodes and undirected weighted edges.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{AdjacencyMatrix, Edge, GraphError, Node};

/// Static input graph. Executors only ever read it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
  pub nodes: Vec<Node>,
  pub edges: Vec<Edge>,
}

impl Graph {
  /// Builds a graph and validates it (unique ids, known endpoints, finite weights).
  pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
    let graph = Self { nodes, edges };
    graph.validate()?;
    Ok(graph)
  }

  /// Checks the structural invariants the executors assume.
  #[instrument(level = "trace", skip(self))]
  pub fn validate(&self) -> Result<(), GraphError> {
    let mut seen = HashSet::new();
    for n in &self.nodes {
      if !seen.insert(n.id.as_str()) {
        return Err(GraphError::DuplicateNode(n.id.clone()));
      }
    }
    for e in &self.edges {
      for endpoint in [&e.source, &e.target] {
        if !seen.contains(endpoint.as_str()) {
          return Err(GraphError::UnknownEndpoint {
            from: e.source.clone(),
            to: e.target.clone(),
            missing: endpoint.clone(),
          });
        }
      }
      if !e.weight.is_finite() {
        return Err(GraphError::InvalidWeight {
          from: e.source.clone(),
          to: e.target.clone(),
          weight: e.weight,
        });
      }
    }
    Ok(())
  }

  pub fn contains_node(&self, id: &str) -> bool {
    self.nodes.iter().any(|n| n.id == id)
  }

  pub fn node(&self, id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == id)
  }

  /// Position of `id` in `nodes` (the row/column order of matrices).
  pub fn index_of(&self, id: &str) -> Option<usize> {
    self.nodes.iter().position(|n| n.id == id)
  }

  /// Edges touching `id`, paired with the opposite endpoint, in `edges` order.
  pub fn incident_edges<'a, 'b>(
    &'a self,
    id: &'b str,
  ) -> impl Iterator<Item = (&'a str, &'a Edge)> + use<'a, 'b> {
    self
      .edges
      .iter()
      .filter_map(move |e| e.other(id).map(|other| (other, e)))
  }

  /// First edge joining `a` and `b` in either orientation.
  pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
    self
      .edges
      .iter()
      .find(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
  }

  /// Label row and symmetric weight matrix in `nodes` order.
  ///
  /// Parallel edges keep the lighter weight; cells without an edge are `None`.
  pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
    let n = self.nodes.len();
    let mut weights = vec![vec![None; n]; n];
    for e in &self.edges {
      let (Some(i), Some(j)) = (self.index_of(&e.source), self.index_of(&e.target)) else {
        continue;
      };
      let w = match weights[i][j] {
        Some(existing) if existing <= e.weight => existing,
        _ => e.weight,
      };
      weights[i][j] = Some(w);
      weights[j][i] = Some(w);
    }
    AdjacencyMatrix {
      labels: self.nodes.iter().map(|n| n.label.clone()).collect(),
      ids: self.nodes.iter().map(|n| n.id.clone()).collect(),
      weights,
    }
  }
}
