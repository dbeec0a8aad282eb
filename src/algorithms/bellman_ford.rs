//! Bellman-Ford single-source shortest paths with negative-cycle detection.
//!
//! Edges are undirected, so each edge is relaxed in both orientations. A
//! negative edge is therefore a negative cycle on its own.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, instrument};

use super::dijkstra::distance_map;
use super::recorder::StepRecorder;
use crate::types::{Distance, Edge, EdgeStatus, Graph, NodeStatus, Step};

/// An improvement found on one edge: `from` → `to` with the new distance.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Relaxation<'a> {
  pub from: &'a str,
  pub to: &'a str,
  pub candidate: f64,
}

/// Checks both orientations of `edge` for a shorter path (source → target first).
pub(crate) fn improvement<'a>(edge: &'a Edge, dist: &BTreeMap<String, f64>) -> Option<Relaxation<'a>> {
  let d = |id: &str| dist.get(id).copied().unwrap_or(f64::INFINITY);
  for (from, to) in [
    (edge.source.as_str(), edge.target.as_str()),
    (edge.target.as_str(), edge.source.as_str()),
  ] {
    let base = d(from);
    if base == f64::INFINITY {
      continue;
    }
    let candidate = base + edge.weight;
    if candidate < d(to) {
      return Some(Relaxation { from, to, candidate });
    }
  }
  None
}

fn is_tree_edge(edge: &Edge, prev: &HashMap<String, String>) -> bool {
  prev.get(&edge.target) == Some(&edge.source) || prev.get(&edge.source) == Some(&edge.target)
}

/// Runs Bellman-Ford from `start` and returns the full step trace.
///
/// At most `|V|-1` passes are made; a pass that relaxes nothing ends the loop
/// early with an explicit step. A final sweep that can still relax an edge
/// produces a terminal step with `negative_cycle_detected: true`.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn run(graph: &Graph, start: &str) -> Vec<Step> {
  let mut rec = StepRecorder::for_graph(graph);
  if !graph.contains_node(start) {
    debug!(start, "bellman-ford start node missing");
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

  let step = rec
    .snapshot(format!(
      "Initialize: distance to {} is 0, every other node is ∞",
      start
    ))
    .with_current_node(start)
    .with_distances(distance_map(&dist));
  rec.push(step);

  let passes = graph.nodes.len().saturating_sub(1);
  for pass in 1..=passes {
    let step = rec
      .snapshot(format!("Pass {} of {}: relax every edge", pass, passes))
      .with_distances(distance_map(&dist));
    rec.push(step);

    let mut relaxed_any = false;
    for edge in &graph.edges {
      rec.set_edge(&edge.source, &edge.target, EdgeStatus::Processing);
      let step = rec
        .snapshot(format!(
          "Considering edge {} — {} (weight {})",
          edge.source, edge.target, edge.weight
        ))
        .with_current_edge(edge.source.as_str(), edge.target.as_str())
        .with_distances(distance_map(&dist));
      rec.push(step);

      match improvement(edge, &dist) {
        Some(Relaxation { from, to, candidate }) => {
          relaxed_any = true;
          let old = dist.get(to).copied().unwrap_or(f64::INFINITY);
          if let Some(old_pred) = prev.insert(to.to_string(), from.to_string()) {
            rec.set_edge(&old_pred, to, EdgeStatus::Rejected);
          }
          rec.set_edge(from, to, EdgeStatus::Processing);
          dist.insert(to.to_string(), candidate);
          let step = rec
            .snapshot(format!(
              "Relaxed {} → {}: distance of {} {} → {}",
              from,
              to,
              to,
              Distance(old),
              candidate
            ))
            .with_current_node(to)
            .with_current_edge(from, to)
            .with_distances(distance_map(&dist));
          rec.push(step);
        }
        None => {
          if !is_tree_edge(edge, &prev) {
            rec.set_edge(&edge.source, &edge.target, EdgeStatus::Rejected);
          }
          let step = rec
            .snapshot(format!(
              "No improvement via edge {} — {}",
              edge.source, edge.target
            ))
            .with_current_edge(edge.source.as_str(), edge.target.as_str())
            .with_distances(distance_map(&dist));
          rec.push(step);
        }
      }
    }

    if !relaxed_any {
      debug!(pass, "bellman-ford converged early");
      let step = rec
        .snapshot(format!(
          "Pass {} relaxed no edge: distances have converged, stopping early",
          pass
        ))
        .with_distances(distance_map(&dist));
      rec.push(step);
      break;
    }
  }

  for edge in &graph.edges {
    if let Some(Relaxation { from, to, .. }) = improvement(edge, &dist) {
      debug!(from, to, "bellman-ford negative cycle detected");
      rec.set_edge(from, to, EdgeStatus::Rejected);
      let step = rec
        .snapshot(format!(
          "Negative cycle detected: edge {} → {} can still be relaxed",
          from, to
        ))
        .with_current_edge(from, to)
        .with_distances(distance_map(&dist))
        .with_negative_cycle(true);
      rec.push(step);
      return rec.finish();
    }
  }

  for (id, d) in &dist {
    if d.is_finite() {
      rec.set_node(id, NodeStatus::Finalized);
    }
  }
  for edge in &graph.edges {
    let status = if is_tree_edge(edge, &prev) {
      EdgeStatus::Finalized
    } else {
      EdgeStatus::Rejected
    };
    rec.set_edge(&edge.source, &edge.target, status);
  }
  let step = rec
    .snapshot(format!(
      "Bellman-Ford complete: no negative cycle, shortest paths from {}",
      start
    ))
    .with_distances(distance_map(&dist))
    .with_negative_cycle(false);
  rec.push(step);

  debug!(steps = rec.len(), "bellman-ford trace complete");
  rec.finish()
}
