//! Core data model: the input graph, status vocabulary and step snapshots.

mod adjacency_matrix;
mod distance;
mod edge;
mod edge_status;
mod graph;
mod graph_error;
#[cfg(test)]
mod graph_test;
mod knapsack_item;
mod node;
mod node_status;
mod step;
mod trace_log;

pub use adjacency_matrix::AdjacencyMatrix;
pub use distance::Distance;
pub use edge::{Edge, canonical_edge_key};
pub use edge_status::EdgeStatus;
pub use graph::Graph;
pub use graph_error::GraphError;
pub use knapsack_item::{KnapsackItem, SelectedItem};
pub use node::Node;
pub use node_status::NodeStatus;
pub use step::{
  CurrentEdge, DistanceMap, DistanceMatrix, EdgeStatusMap, NodeStatusMap, Step,
};
pub use trace_log::{TraceLog, TraceParameters};
