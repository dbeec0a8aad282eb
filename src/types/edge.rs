//! An undirected weighted edge.

use serde::{Deserialize, Serialize};

/// Canonical, direction-independent key for the edge between `a` and `b`.
///
/// The two endpoints are ordered lexicographically and joined with `-`, so
/// `canonical_edge_key("B", "A") == canonical_edge_key("A", "B") == "A-B"`.
pub fn canonical_edge_key(a: &str, b: &str) -> String {
  if a <= b {
    format!("{}-{}", a, b)
  } else {
    format!("{}-{}", b, a)
  }
}

/// An undirected weighted edge. `source`/`target` naming carries no direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  pub source: String,
  pub target: String,
  pub weight: f64,
}

impl Edge {
  pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
      weight,
    }
  }

  /// Canonical key used for every status lookup of this edge.
  pub fn key(&self) -> String {
    canonical_edge_key(&self.source, &self.target)
  }

  /// Returns the endpoint opposite to `id`, or `None` if `id` is not an endpoint.
  pub fn other(&self, id: &str) -> Option<&str> {
    if self.source == id {
      Some(&self.target)
    } else if self.target == id {
      Some(&self.source)
    } else {
      None
    }
  }

  pub fn touches(&self, id: &str) -> bool {
    self.source == id || self.target == id
  }
}
