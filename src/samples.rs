//! Built-in sample inputs used by demos, benchmarks and tests.

use crate::types::{Edge, Graph, KnapsackItem, Node};

/// Capacity paired with [`sample_items`].
pub const SAMPLE_CAPACITY: f64 = 50.0;

fn graph(ids: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
  Graph {
    nodes: ids.iter().map(|id| Node::unlabeled(*id)).collect(),
    edges: edges
      .iter()
      .map(|(s, t, w)| Edge::new(*s, *t, *w))
      .collect(),
  }
}

/// Six-node weighted graph A–F.
///
/// Shortest distances from A: `A:0, B:3, C:2, D:8, E:10, F:13`; MST weight 13.
pub fn sample_graph() -> Graph {
  graph(
    &["A", "B", "C", "D", "E", "F"],
    &[
      ("A", "B", 4.0),
      ("A", "C", 2.0),
      ("B", "C", 1.0),
      ("B", "D", 5.0),
      ("C", "D", 8.0),
      ("C", "E", 10.0),
      ("D", "E", 2.0),
      ("D", "F", 6.0),
      ("E", "F", 3.0),
    ],
  )
}

/// Two components: {A, B, C} and {D, E}.
pub fn disconnected_graph() -> Graph {
  graph(
    &["A", "B", "C", "D", "E"],
    &[("A", "B", 1.0), ("B", "C", 2.0), ("D", "E", 1.0)],
  )
}

/// Graph whose `C-D` edge is negative; undirected, that edge alone is a negative cycle.
pub fn negative_cycle_graph() -> Graph {
  graph(
    &["A", "B", "C", "D"],
    &[("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", -3.0)],
  )
}

/// Items `A(60,10)`, `B(100,20)`, `C(120,30)`; best value 240 at capacity 50.
pub fn sample_items() -> Vec<KnapsackItem> {
  vec![
    KnapsackItem::new("A", 60.0, 10.0),
    KnapsackItem::new("B", 100.0, 20.0),
    KnapsackItem::new("C", 120.0, 30.0),
  ]
}
