//! Dijkstra's single-source shortest paths, recorded step by step.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, instrument};

use super::recorder::StepRecorder;
use crate::types::{Distance, DistanceMap, EdgeStatus, Graph, NodeStatus, Step};

pub(crate) fn distance_map(dist: &BTreeMap<String, f64>) -> DistanceMap {
  dist
    .iter()
    .map(|(id, d)| (id.clone(), Distance(*d)))
    .collect()
}

/// Unvisited node with the smallest distance; ties go to the smallest id.
pub(crate) fn closest_unvisited<'a>(
  unvisited: &'a BTreeSet<String>,
  dist: &BTreeMap<String, f64>,
) -> Option<(&'a str, f64)> {
  unvisited
    .iter()
    .map(|id| (id.as_str(), dist.get(id).copied().unwrap_or(f64::INFINITY)))
    .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)))
}

/// Runs Dijkstra from `start` and returns the full step trace.
///
/// Disconnected nodes keep an infinite distance. An unknown `start` yields a
/// single terminal step.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn run(graph: &Graph, start: &str) -> Vec<Step> {
  let mut rec = StepRecorder::for_graph(graph);
  if !graph.contains_node(start) {
    debug!(start, "dijkstra start node missing");
    let step = rec.snapshot(format!("Start node {} not found in graph", start));
    rec.push(step);
    return rec.finish();
  }

  let mut dist: BTreeMap<String, f64> = graph
    .nodes
    .iter()
    .map(|n| (n.id.clone(), f64::INFINITY))
    .collect();
  dist.insert(start.to_string(), 0.0);
  let mut prev: HashMap<String, String> = HashMap::new();
  let mut unvisited: BTreeSet<String> = graph.nodes.iter().map(|n| n.id.clone()).collect();

  let step = rec
    .snapshot(format!(
      "Initialize: distance to {} is 0, every other node is ∞",
      start
    ))
    .with_current_node(start)
    .with_distances(distance_map(&dist));
  rec.push(step);

  loop {
    let Some((current, d)) = closest_unvisited(&unvisited, &dist) else {
      break;
    };
    if d == f64::INFINITY {
      let rest: Vec<&str> = unvisited.iter().map(String::as_str).collect();
      debug!(unreachable = ?rest, "dijkstra stopped at infinite distance");
      let step = rec
        .snapshot(format!(
          "Remaining nodes {} are unreachable from {}",
          rest.join(", "),
          start
        ))
        .with_distances(distance_map(&dist));
      rec.push(step);
      break;
    }
    let current = current.to_string();
    unvisited.remove(&current);
    rec.set_node(&current, NodeStatus::Finalized);
    let step = rec
      .snapshot(format!(
        "Visit {}: shortest distance {} is now final",
        current, d
      ))
      .with_current_node(current.as_str())
      .with_distances(distance_map(&dist));
    rec.push(step);

    for (neighbor, edge) in graph.incident_edges(&current) {
      if !unvisited.contains(neighbor) {
        continue;
      }
      rec.set_node(neighbor, NodeStatus::Processing);
      rec.set_edge(&current, neighbor, EdgeStatus::Processing);
      let step = rec
        .snapshot(format!(
          "Considering edge {} → {} (weight {})",
          current, neighbor, edge.weight
        ))
        .with_current_node(current.as_str())
        .with_current_edge(current.as_str(), neighbor)
        .with_distances(distance_map(&dist));
      rec.push(step);

      let old = dist.get(neighbor).copied().unwrap_or(f64::INFINITY);
      let candidate = d + edge.weight;
      if candidate < old {
        if let Some(old_pred) = prev.insert(neighbor.to_string(), current.clone()) {
          rec.set_edge(&old_pred, neighbor, EdgeStatus::Rejected);
        }
        rec.set_edge(&current, neighbor, EdgeStatus::Processing);
        dist.insert(neighbor.to_string(), candidate);
        let step = rec
          .snapshot(format!(
            "Updated distance of {}: {} → {} via {}",
            neighbor,
            Distance(old),
            candidate,
            current
          ))
          .with_current_node(current.as_str())
          .with_current_edge(current.as_str(), neighbor)
          .with_distances(distance_map(&dist));
        rec.push(step);
      } else {
        rec.set_edge(&current, neighbor, EdgeStatus::Rejected);
        let step = rec
          .snapshot(format!(
            "Rejected edge {} → {}: {} + {} = {} is not shorter than {}",
            current,
            neighbor,
            d,
            edge.weight,
            candidate,
            Distance(old)
          ))
          .with_current_node(current.as_str())
          .with_current_edge(current.as_str(), neighbor)
          .with_distances(distance_map(&dist));
        rec.push(step);
      }
    }
  }

  for node in &graph.nodes {
    let mut at = node.id.as_str();
    while let Some(p) = prev.get(at) {
      rec.set_edge(p, at, EdgeStatus::Finalized);
      at = p.as_str();
    }
  }
  rec.set_all_nodes(NodeStatus::Finalized);
  let step = rec
    .snapshot(format!("Dijkstra complete: shortest paths from {}", start))
    .with_distances(distance_map(&dist));
  rec.push(step);

  debug!(steps = rec.len(), "dijkstra trace complete");
  rec.finish()
}
