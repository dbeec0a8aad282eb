//! Tests for `dijkstra`.

use std::collections::{BTreeMap, BTreeSet};

use super::dijkstra::{closest_unvisited, run};
use crate::samples::{disconnected_graph, sample_graph};
use crate::types::{Distance, Edge, EdgeStatus, Graph, Node, NodeStatus};

/// Shortest distance by exhaustive search over simple paths.
fn brute_force(graph: &Graph, from: &str, to: &str) -> f64 {
  fn walk(graph: &Graph, at: &str, to: &str, visited: &mut Vec<String>, len: f64, best: &mut f64) {
    if at == to {
      *best = best.min(len);
      return;
    }
    for (next, e) in graph.incident_edges(at) {
      if visited.iter().any(|v| v == next) {
        continue;
      }
      visited.push(next.to_string());
      walk(graph, next, to, visited, len + e.weight, best);
      visited.pop();
    }
  }
  let mut best = f64::INFINITY;
  walk(graph, from, to, &mut vec![from.to_string()], 0.0, &mut best);
  best
}

#[test]
fn sample_graph_final_distances() {
  let steps = run(&sample_graph(), "A");
  let last = steps.last().unwrap();
  let d = last.distance_map.as_ref().unwrap();
  let expected = [("A", 0.0), ("B", 3.0), ("C", 2.0), ("D", 8.0), ("E", 10.0), ("F", 13.0)];
  for (id, dist) in expected {
    assert_eq!(d[id], Distance(dist), "distance to {}", id);
  }
}

#[test]
fn final_distances_match_brute_force() {
  let g = sample_graph();
  let steps = run(&g, "A");
  let d = steps.last().unwrap().distance_map.clone().unwrap();
  for n in &g.nodes {
    assert_eq!(d[&n.id].value(), brute_force(&g, "A", &n.id), "node {}", n.id);
  }
}

#[test]
fn first_step_initializes_and_last_finalizes_everything() {
  let steps = run(&sample_graph(), "A");
  let first = &steps[0];
  assert_eq!(first.current_node_id.as_deref(), Some("A"));
  assert_eq!(first.distance_map.as_ref().unwrap()["B"], Distance::INFINITY);
  assert!(first.node_statuses.values().all(|s| *s == NodeStatus::Unvisited));
  let last = steps.last().unwrap();
  assert!(last.node_statuses.values().all(|s| *s == NodeStatus::Finalized));
}

#[test]
fn shortest_path_tree_edges_are_finalized() {
  let steps = run(&sample_graph(), "A");
  let last = steps.last().unwrap();
  assert_eq!(
    last.edges_with_status(EdgeStatus::Finalized),
    vec!["A-C", "B-C", "B-D", "D-E", "E-F"]
  );
}

#[test]
fn every_consideration_is_followed_by_a_decision() {
  let steps = run(&sample_graph(), "A");
  for (i, s) in steps.iter().enumerate() {
    if s.description.starts_with("Considering") {
      let next = &steps[i + 1].description;
      assert!(
        next.starts_with("Updated") || next.starts_with("Rejected"),
        "step {} followed by {:?}",
        i,
        next
      );
    }
  }
}

#[test]
fn rejected_relaxation_marks_edge_rejected() {
  // Relaxing B-C gives 1 + 5 = 6, which does not improve C's distance of 1.
  let graph = Graph {
    nodes: ["A", "B", "C"].into_iter().map(Node::unlabeled).collect(),
    edges: vec![
      Edge::new("A", "B", 1.0),
      Edge::new("A", "C", 1.0),
      Edge::new("B", "C", 5.0),
    ],
  };
  let steps = run(&graph, "A");
  let rejected: Vec<_> = steps
    .iter()
    .filter(|s| s.description.starts_with("Rejected"))
    .collect();
  assert_eq!(rejected.len(), 1);
  let step = rejected[0];
  let edge = step.current_edge.as_ref().unwrap();
  assert_eq!((edge.source.as_str(), edge.target.as_str()), ("B", "C"));
  assert_eq!(step.edge_status("B", "C"), Some(EdgeStatus::Rejected));
  let last = steps.last().unwrap();
  assert_eq!(last.distance_map.as_ref().unwrap()["C"], Distance(1.0));
}

#[test]
fn nodes_are_visited_in_distance_order() {
  let steps = run(&sample_graph(), "A");
  let visited: Vec<&str> = steps
    .iter()
    .filter(|s| s.description.starts_with("Visit"))
    .filter_map(|s| s.current_node_id.as_deref())
    .collect();
  assert_eq!(visited, vec!["A", "C", "B", "D", "E", "F"]);
}

#[test]
fn disconnected_nodes_stay_infinite() {
  let steps = run(&disconnected_graph(), "A");
  assert!(steps.iter().any(|s| s.description.contains("unreachable")));
  let d = steps.last().unwrap().distance_map.clone().unwrap();
  assert_eq!(d["C"], Distance(3.0));
  assert_eq!(d["D"], Distance::INFINITY);
  assert_eq!(d["E"], Distance::INFINITY);
}

#[test]
fn unknown_start_yields_single_step() {
  let steps = run(&sample_graph(), "Z");
  assert_eq!(steps.len(), 1);
  assert!(steps[0].description.contains("not found"));
}

#[test]
fn ties_go_to_smallest_id() {
  let unvisited: BTreeSet<String> = ["C", "B", "D"].iter().map(|s| s.to_string()).collect();
  let mut dist = BTreeMap::new();
  dist.insert("B".to_string(), 2.0);
  dist.insert("C".to_string(), 2.0);
  dist.insert("D".to_string(), 5.0);
  assert_eq!(closest_unvisited(&unvisited, &dist), Some(("B", 2.0)));
}

#[test]
fn trace_is_deterministic() {
  let a = serde_json::to_string(&run(&sample_graph(), "A")).unwrap();
  let b = serde_json::to_string(&run(&sample_graph(), "A")).unwrap();
  assert_eq!(a, b);
}

#[test]
fn input_graph_is_untouched() {
  let g = sample_graph();
  let before = g.clone();
  let _ = run(&g, "A");
  assert_eq!(g, before);
}
