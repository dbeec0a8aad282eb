//! Tests for `Graph`.

use super::{Edge, Graph, GraphError, Node};

fn triangle() -> Graph {
  Graph {
    nodes: vec![Node::unlabeled("A"), Node::unlabeled("B"), Node::new("C", "Charlie")],
    edges: vec![
      Edge::new("A", "B", 4.0),
      Edge::new("C", "A", 2.0),
      Edge::new("B", "C", 1.0),
    ],
  }
}

#[test]
fn new_accepts_valid_graph() {
  let g = triangle();
  assert!(Graph::new(g.nodes, g.edges).is_ok());
}

#[test]
fn validate_rejects_duplicate_node() {
  let mut g = triangle();
  g.nodes.push(Node::unlabeled("A"));
  assert_eq!(g.validate(), Err(GraphError::DuplicateNode("A".to_string())));
}

#[test]
fn validate_rejects_dangling_endpoint() {
  let mut g = triangle();
  g.edges.push(Edge::new("A", "Z", 1.0));
  match g.validate() {
    Err(GraphError::UnknownEndpoint { missing, .. }) => assert_eq!(missing, "Z"),
    other => panic!("expected UnknownEndpoint, got {:?}", other),
  }
}

#[test]
fn validate_rejects_nan_weight() {
  let mut g = triangle();
  g.edges[0].weight = f64::NAN;
  assert!(matches!(g.validate(), Err(GraphError::InvalidWeight { .. })));
}

#[test]
fn incident_edges_follow_edge_order_and_orientation() {
  let g = triangle();
  let around_a: Vec<(&str, f64)> = g.incident_edges("A").map(|(o, e)| (o, e.weight)).collect();
  assert_eq!(around_a, vec![("B", 4.0), ("C", 2.0)]);
}

#[test]
fn edge_between_ignores_direction() {
  let g = triangle();
  assert_eq!(g.edge_between("A", "C").map(|e| e.weight), Some(2.0));
  assert_eq!(g.edge_between("C", "A").map(|e| e.weight), Some(2.0));
  assert!(g.edge_between("A", "A").is_none());
}

#[test]
fn index_of_uses_node_order() {
  let g = triangle();
  assert_eq!(g.index_of("C"), Some(2));
  assert_eq!(g.index_of("Z"), None);
  assert_eq!(g.node("C").map(|n| n.label.as_str()), Some("Charlie"));
}

#[test]
fn adjacency_matrix_is_symmetric_in_node_order() {
  let g = triangle();
  let m = g.adjacency_matrix();
  assert_eq!(m.labels, vec!["A", "B", "Charlie"]);
  assert_eq!(m.weights[0][2], Some(2.0));
  assert_eq!(m.weights[2][0], Some(2.0));
  assert_eq!(m.weights[0][0], None);
  assert_eq!(m.edge_key(2, 1), Some("B-C".to_string()));
  assert_eq!(m.edge_key(1, 1), None);
}

#[test]
fn adjacency_matrix_keeps_lighter_parallel_edge() {
  let mut g = triangle();
  g.edges.push(Edge::new("B", "A", 3.0));
  let m = g.adjacency_matrix();
  assert_eq!(m.weights[0][1], Some(3.0));
  assert_eq!(m.weights[1][0], Some(3.0));
}
