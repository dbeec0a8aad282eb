//! Floyd-Warshall all-pairs shortest paths.
//!
//! Matrix rows and columns follow `graph.nodes` order, not ids. Every
//! `(k, i, j)` combination with `i != k` and `j != k` emits exactly one step,
//! so a graph of `n` nodes yields `n·(n-1)² + 2` steps.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::recorder::StepRecorder;
use crate::types::{Distance, DistanceMatrix, EdgeStatus, Graph, NodeStatus, Step};

fn to_matrix(dist: &[Vec<f64>]) -> DistanceMatrix {
  dist
    .iter()
    .map(|row| row.iter().map(|d| Distance(*d)).collect())
    .collect()
}

/// Initial matrix: 0 on the diagonal, the lightest direct edge elsewhere, ∞ otherwise.
pub(crate) fn initial_distances(graph: &Graph) -> Vec<Vec<f64>> {
  let n = graph.nodes.len();
  let mut index: HashMap<&str, usize> = HashMap::new();
  for (i, node) in graph.nodes.iter().enumerate() {
    index.entry(node.id.as_str()).or_insert(i);
  }
  let mut dist = vec![vec![f64::INFINITY; n]; n];
  for (i, row) in dist.iter_mut().enumerate() {
    row[i] = 0.0;
  }
  for e in &graph.edges {
    let (Some(&i), Some(&j)) = (index.get(e.source.as_str()), index.get(e.target.as_str())) else {
      continue;
    };
    if e.weight < dist[i][j] {
      dist[i][j] = e.weight;
      dist[j][i] = e.weight;
    }
  }
  dist
}

/// Runs Floyd-Warshall and returns the full step trace.
///
/// No negative-cycle check is made; a negative diagonal entry in the final
/// matrix is left for the caller to interpret.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn run(graph: &Graph) -> Vec<Step> {
  let mut rec = StepRecorder::for_graph(graph);
  let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
  let n = ids.len();
  let mut dist = initial_distances(graph);
  let mut matrix = Arc::new(to_matrix(&dist));

  let step = rec
    .snapshot("Initialize distance matrix: 0 on the diagonal, direct edge weights, ∞ elsewhere")
    .with_matrix(Arc::clone(&matrix));
  rec.push(step);

  for k in 0..n {
    let via = ids[k];
    rec.set_node(via, NodeStatus::Current);
    for i in 0..n {
      if i == k {
        continue;
      }
      for j in 0..n {
        if j == k {
          continue;
        }
        let (from, to) = (ids[i], ids[j]);
        let through = dist[i][k] + dist[k][j];
        let step = if through < dist[i][j] {
          let old = dist[i][j];
          dist[i][j] = through;
          if graph.edge_between(from, via).is_some() {
            rec.set_edge(from, via, EdgeStatus::Finalized);
          }
          if graph.edge_between(via, to).is_some() {
            rec.set_edge(via, to, EdgeStatus::Finalized);
          }
          if i != j && graph.edge_between(from, to).is_some() {
            rec.set_edge(from, to, EdgeStatus::Rejected);
          }
          matrix = Arc::new(to_matrix(&dist));
          rec.snapshot(format!(
            "Improved {} → {} via {}: {} → {}",
            from,
            to,
            via,
            Distance(old),
            through
          ))
        } else {
          rec.snapshot(format!(
            "No improvement for {} → {} via {}: {} + {} ≥ {}",
            from,
            to,
            via,
            Distance(dist[i][k]),
            Distance(dist[k][j]),
            Distance(dist[i][j])
          ))
        };
        let step = step
          .with_current_node(via)
          .with_current_edge(from, to)
          .with_matrix(Arc::clone(&matrix));
        rec.push(step);
      }
    }
    rec.set_node(via, NodeStatus::Finalized);
  }

  rec.set_all_nodes(NodeStatus::Finalized);
  let step = rec
    .snapshot("Floyd-Warshall complete: all-pairs shortest distances")
    .with_matrix(Arc::clone(&matrix));
  rec.push(step);

  debug!(steps = rec.len(), "floyd-warshall trace complete");
  rec.finish()
}
