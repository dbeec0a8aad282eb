//! A vertex of the input graph.

use serde::{Deserialize, Serialize};

/// A vertex of the input graph. Identity is `id`; `label` is display text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  pub label: String,
}

impl Node {
  pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      label: label.into(),
    }
  }

  /// Node whose label is its id.
  pub fn unlabeled(id: impl Into<String>) -> Self {
    let id = id.into();
    Self {
      label: id.clone(),
      id,
    }
  }
}
