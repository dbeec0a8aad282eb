//! Step-trace executors for the supported algorithms.
//!
//! Each executor is a pure function from its input to a complete, ordered
//! `Vec<Step>`. [`AlgorithmRun`] bundles one invocation's input so callers
//! (the runner, the playback controller) can hold and re-run any of them
//! through a single `run` method.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, instrument};

use crate::types::{Graph, GraphError, KnapsackItem, Step, TraceParameters};

pub mod bellman_ford;
pub mod dijkstra;
#[cfg(test)]
mod dijkstra_test;
pub mod floyd_warshall;
pub mod knapsack;
#[cfg(test)]
mod knapsack_test;
pub mod prim;
mod recorder;

pub use recorder::StepRecorder;

/// Closed set of algorithms with a step-trace executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
  Dijkstra,
  BellmanFord,
  FloydWarshall,
  Prim,
  Knapsack,
}

impl AlgorithmKind {
  pub const ALL: [AlgorithmKind; 5] = [
    AlgorithmKind::Dijkstra,
    AlgorithmKind::BellmanFord,
    AlgorithmKind::FloydWarshall,
    AlgorithmKind::Prim,
    AlgorithmKind::Knapsack,
  ];

  /// Whether the executor needs a start node.
  pub fn needs_start(self) -> bool {
    matches!(
      self,
      AlgorithmKind::Dijkstra | AlgorithmKind::BellmanFord | AlgorithmKind::Prim
    )
  }
}

impl fmt::Display for AlgorithmKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AlgorithmKind::Dijkstra => write!(f, "dijkstra"),
      AlgorithmKind::BellmanFord => write!(f, "bellman_ford"),
      AlgorithmKind::FloydWarshall => write!(f, "floyd_warshall"),
      AlgorithmKind::Prim => write!(f, "prim"),
      AlgorithmKind::Knapsack => write!(f, "knapsack"),
    }
  }
}

/// Returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm: {0} (expected dijkstra, bellman_ford, floyd_warshall, prim or knapsack)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for AlgorithmKind {
  type Err = UnknownAlgorithm;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
      "dijkstra" => Ok(AlgorithmKind::Dijkstra),
      "bellman_ford" | "bellmanford" => Ok(AlgorithmKind::BellmanFord),
      "floyd_warshall" | "floydwarshall" => Ok(AlgorithmKind::FloydWarshall),
      "prim" => Ok(AlgorithmKind::Prim),
      "knapsack" | "fractional_knapsack" => Ok(AlgorithmKind::Knapsack),
      _ => Err(UnknownAlgorithm(s.to_string())),
    }
  }
}

/// The complete input of one executor invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmRun {
  Dijkstra { graph: Graph, start: String },
  BellmanFord { graph: Graph, start: String },
  FloydWarshall { graph: Graph },
  Prim { graph: Graph, start: String },
  Knapsack { items: Vec<KnapsackItem>, capacity: f64 },
}

impl AlgorithmRun {
  pub fn kind(&self) -> AlgorithmKind {
    match self {
      AlgorithmRun::Dijkstra { .. } => AlgorithmKind::Dijkstra,
      AlgorithmRun::BellmanFord { .. } => AlgorithmKind::BellmanFord,
      AlgorithmRun::FloydWarshall { .. } => AlgorithmKind::FloydWarshall,
      AlgorithmRun::Prim { .. } => AlgorithmKind::Prim,
      AlgorithmRun::Knapsack { .. } => AlgorithmKind::Knapsack,
    }
  }

  pub fn graph(&self) -> Option<&Graph> {
    match self {
      AlgorithmRun::Dijkstra { graph, .. }
      | AlgorithmRun::BellmanFord { graph, .. }
      | AlgorithmRun::FloydWarshall { graph }
      | AlgorithmRun::Prim { graph, .. } => Some(graph),
      AlgorithmRun::Knapsack { .. } => None,
    }
  }

  pub fn start(&self) -> Option<&str> {
    match self {
      AlgorithmRun::Dijkstra { start, .. }
      | AlgorithmRun::BellmanFord { start, .. }
      | AlgorithmRun::Prim { start, .. } => Some(start.as_str()),
      _ => None,
    }
  }

  /// Boundary validation: graph structure, start node, knapsack inputs.
  pub fn validate(&self) -> Result<(), GraphError> {
    if let Some(graph) = self.graph() {
      graph.validate()?;
    }
    if let (Some(graph), Some(start)) = (self.graph(), self.start())
      && !graph.contains_node(start)
    {
      return Err(GraphError::UnknownStart(start.to_string()));
    }
    if let AlgorithmRun::Knapsack { items, capacity } = self {
      if !capacity.is_finite() || *capacity < 0.0 {
        return Err(GraphError::InvalidCapacity(*capacity));
      }
      let mut seen = std::collections::HashSet::new();
      for item in items {
        if !seen.insert(item.id.as_str()) {
          return Err(GraphError::DuplicateNode(item.id.clone()));
        }
        if !item.weight.is_finite() || item.weight < 0.0 {
          return Err(GraphError::InvalidItem {
            id: item.id.clone(),
            reason: format!("weight {} must be finite and non-negative", item.weight),
          });
        }
        if !item.value.is_finite() || item.value < 0.0 {
          return Err(GraphError::InvalidItem {
            id: item.id.clone(),
            reason: format!("value {} must be finite and non-negative", item.value),
          });
        }
      }
    }
    Ok(())
  }

  /// Executes the algorithm to completion and returns every step in order.
  #[instrument(level = "trace", skip(self), fields(algorithm = %self.kind()))]
  pub fn run(&self) -> Vec<Step> {
    let steps = match self {
      AlgorithmRun::Dijkstra { graph, start } => dijkstra::run(graph, start),
      AlgorithmRun::BellmanFord { graph, start } => bellman_ford::run(graph, start),
      AlgorithmRun::FloydWarshall { graph } => floyd_warshall::run(graph),
      AlgorithmRun::Prim { graph, start } => prim::run(graph, start),
      AlgorithmRun::Knapsack { items, capacity } => knapsack::run(items, *capacity),
    };
    info!(algorithm = %self.kind(), steps = steps.len(), "trace generated");
    steps
  }

  /// Parameters recorded next to a trace of this run.
  pub fn parameters(&self) -> TraceParameters {
    match self {
      AlgorithmRun::Knapsack { items, capacity } => TraceParameters {
        start: None,
        capacity: Some(*capacity),
        node_count: items.len(),
        edge_count: 0,
      },
      _ => TraceParameters {
        start: self.start().map(String::from),
        capacity: None,
        node_count: self.graph().map_or(0, |g| g.nodes.len()),
        edge_count: self.graph().map_or(0, |g| g.edges.len()),
      },
    }
  }
}
