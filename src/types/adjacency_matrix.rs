//! Label/weight matrix pair derived once per graph for tabular views.

use serde::{Deserialize, Serialize};

use super::canonical_edge_key;

/// Symmetric adjacency matrix in `graph.nodes` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
  pub labels: Vec<String>,
  pub ids: Vec<String>,
  pub weights: Vec<Vec<Option<f64>>>,
}

impl AdjacencyMatrix {
  /// Canonical edge key for cell `(row, col)`, used to recolor cells from step statuses.
  pub fn edge_key(&self, row: usize, col: usize) -> Option<String> {
    self.weights.get(row)?.get(col)?.as_ref()?;
    Some(canonical_edge_key(&self.ids[row], &self.ids[col]))
  }
}
