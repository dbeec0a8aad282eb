//! Structural errors reported by boundary validation.

use thiserror::Error;

/// Why a graph (or an algorithm input built on one) was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
  #[error("duplicate node id: {0}")]
  DuplicateNode(String),
  #[error("edge {from}-{to} references unknown node {missing}")]
  UnknownEndpoint {
    from: String,
    to: String,
    missing: String,
  },
  #[error("edge {from}-{to} has non-finite weight {weight}")]
  InvalidWeight { from: String, to: String, weight: f64 },
  #[error("start node not found: {0}")]
  UnknownStart(String),
  #[error("knapsack item {id} is invalid: {reason}")]
  InvalidItem { id: String, reason: String },
  #[error("knapsack capacity must be finite and non-negative, got {0}")]
  InvalidCapacity(f64),
}
