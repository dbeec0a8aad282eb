//! Prim's minimum spanning tree, grown from a start node.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, instrument};

use super::recorder::StepRecorder;
use crate::types::{Edge, EdgeStatus, Graph, NodeStatus, Step};

/// True when `candidate` beats `best`: lighter weight, then smaller canonical key.
pub(crate) fn is_better(candidate: &Edge, best: &Edge) -> bool {
  match candidate.weight.total_cmp(&best.weight) {
    std::cmp::Ordering::Less => true,
    std::cmp::Ordering::Equal => candidate.key() < best.key(),
    std::cmp::Ordering::Greater => false,
  }
}

/// Runs Prim from `start` and returns the full step trace.
///
/// Crossing edges are scanned tree node by tree node (insertion order), each
/// node's edges in `graph.edges` order. A start node that cannot reach every
/// other node ends the trace with a "disconnected" step.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn run(graph: &Graph, start: &str) -> Vec<Step> {
  let mut rec = StepRecorder::for_graph(graph);
  if !graph.contains_node(start) {
    debug!(start, "prim start node missing");
    let step = rec.snapshot(format!("Start node {} not found in graph", start));
    rec.push(step);
    return rec.finish();
  }

  let mut tree: Vec<String> = vec![start.to_string()];
  let mut in_tree: HashSet<String> = HashSet::from([start.to_string()]);
  let mut mst_edges: BTreeSet<String> = BTreeSet::new();
  let mut cost = 0.0;

  rec.set_node(start, NodeStatus::Finalized);
  let step = rec
    .snapshot(format!("Start Prim's algorithm at {}", start))
    .with_current_node(start)
    .with_mst_cost(cost);
  rec.push(step);

  while tree.len() < graph.nodes.len() {
    let mut best: Option<(&Edge, String, &str)> = None;
    let mut considered: Vec<String> = Vec::new();

    for member in &tree {
      for (other, edge) in graph.incident_edges(member) {
        if in_tree.contains(other) {
          continue;
        }
        rec.set_edge(member, other, EdgeStatus::Processing);
        considered.push(edge.key());
        let step = rec
          .snapshot(format!(
            "Considering edge {} — {} (weight {})",
            member, other, edge.weight
          ))
          .with_current_node(member.as_str())
          .with_current_edge(member.as_str(), other)
          .with_mst_cost(cost);
        rec.push(step);

        let better = best.as_ref().is_none_or(|(b, _, _)| is_better(edge, b));
        if better {
          best = Some((edge, member.clone(), other));
          let step = rec
            .snapshot(format!(
              "New minimum crossing edge: {} — {} (weight {})",
              member, other, edge.weight
            ))
            .with_current_node(member.as_str())
            .with_current_edge(member.as_str(), other)
            .with_mst_cost(cost);
          rec.push(step);
        }
      }
    }

    let Some((edge, from, to)) = best else {
      let unreachable: Vec<&str> = graph
        .nodes
        .iter()
        .map(|n| n.id.as_str())
        .filter(|id| !in_tree.contains(*id))
        .collect();
      debug!(unreachable = ?unreachable, "prim graph disconnected");
      let step = rec
        .snapshot(format!(
          "Graph is disconnected: no edge leaves the tree, {} unreachable from {}",
          unreachable.join(", "),
          start
        ))
        .with_mst_cost(cost);
      rec.push(step);
      return rec.finish();
    };

    let winner = edge.key();
    for key in &considered {
      if *key != winner {
        rec.set_edge_key(key, EdgeStatus::Unvisited);
      }
    }
    rec.set_edge_key(&winner, EdgeStatus::Finalized);
    mst_edges.insert(winner);
    cost += edge.weight;
    tree.push(to.to_string());
    in_tree.insert(to.to_string());
    rec.set_node(to, NodeStatus::Finalized);
    for (other, e) in graph.incident_edges(to) {
      if in_tree.contains(other) && !mst_edges.contains(&e.key()) {
        rec.set_edge(to, other, EdgeStatus::Rejected);
      }
    }

    let step = rec
      .snapshot(format!(
        "Added edge {} — {} (weight {}) to the tree, total cost {}",
        from, to, edge.weight, cost
      ))
      .with_current_node(to)
      .with_current_edge(from.as_str(), to)
      .with_mst_cost(cost);
    rec.push(step);
  }

  for id in &tree {
    rec.set_node(id, NodeStatus::Finalized);
  }
  let step = rec
    .snapshot(format!(
      "Prim complete: spanning tree with {} edges, total cost {}",
      mst_edges.len(),
      cost
    ))
    .with_mst_cost(cost);
  rec.push(step);

  debug!(steps = rec.len(), cost, "prim trace complete");
  rec.finish()
}
