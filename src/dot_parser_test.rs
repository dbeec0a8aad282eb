//! Tests for `dot_parser`.

use crate::dot_parser::{
  DEFAULT_EDGE_WEIGHT, ParseError, parse_dot, parse_id, parse_number, parse_value,
  strip_comments, unescape_quoted_string,
};
use crate::samples::sample_graph;
use crate::types::GraphError;

const SAMPLE: &str = r#"
  graph sample {
    graph [start=A, algorithm=dijkstra]
    A -- B [weight=4]
    A -- C [weight=2]
    B -- C [weight=1]
    B -- D [weight=5]
    C -- D [weight=8]
    C -- E [weight=10]
    D -- E [weight=2]
    D -- F [weight=6]
    E -- F [weight=3]
  }
"#;

#[test]
fn parse_sample_graph_matches_builtin() {
  let doc = parse_dot(SAMPLE).unwrap();
  assert_eq!(doc.name, "sample");
  assert_eq!(doc.graph, sample_graph());
  assert_eq!(doc.start(), Some("A"));
  assert_eq!(doc.algorithm(), Some("dijkstra"));
  assert!(doc.items.is_empty());
}

#[test]
fn parse_edge_chain_shares_attributes() {
  let doc = parse_dot("graph G { A -- B -- C [weight=2.5] }").unwrap();
  let edges: Vec<_> = doc
    .graph
    .edges
    .iter()
    .map(|e| (e.source.as_str(), e.target.as_str(), e.weight))
    .collect();
  assert_eq!(edges, vec![("A", "B", 2.5), ("B", "C", 2.5)]);
}

#[test]
fn edge_without_weight_uses_default() {
  let doc = parse_dot("graph G { A -- B }").unwrap();
  assert_eq!(doc.graph.edges[0].weight, DEFAULT_EDGE_WEIGHT);
}

#[test]
fn negative_and_exponent_weights() {
  let doc = parse_dot("graph G { A -- B [weight=-3]; B -- C [weight=1e2] }").unwrap();
  assert_eq!(doc.graph.edges[0].weight, -3.0);
  assert_eq!(doc.graph.edges[1].weight, 100.0);
}

#[test]
fn implicit_nodes_in_first_appearance_order() {
  let doc = parse_dot(
    r#"graph G {
      C [label="Gamma"]
      A -- C
      B -- A
    }"#,
  )
  .unwrap();
  let ids: Vec<_> = doc.graph.nodes.iter().map(|n| n.id.as_str()).collect();
  assert_eq!(ids, vec!["C", "A", "B"]);
  assert_eq!(doc.graph.node("C").unwrap().label, "Gamma");
  assert_eq!(doc.graph.node("A").unwrap().label, "A");
}

#[test]
fn repeated_node_statements_merge_attributes() {
  let doc = parse_dot(r#"graph G { A [label="one"] A [value=3] A [weight=1] }"#).unwrap();
  assert_eq!(doc.graph.nodes.len(), 1);
  assert_eq!(doc.graph.nodes[0].label, "one");
  assert_eq!(doc.items.len(), 1);
  assert_eq!(doc.items[0].value, 3.0);
}

#[test]
fn knapsack_items_need_value_and_weight() {
  let doc = parse_dot(
    r#"graph items {
      capacity = 50
      gold [label="Gold", value=60, weight=10]
      silver [value=100, weight=20]
      rock [weight=5]
    }"#,
  )
  .unwrap();
  assert_eq!(doc.capacity(), Some(50.0));
  let ids: Vec<_> = doc.items.iter().map(|i| i.id.as_str()).collect();
  assert_eq!(ids, vec!["gold", "silver"]);
  assert_eq!(doc.items[0].label, "Gold");
  assert_eq!(doc.items[1].label, "silver");
}

#[test]
fn comments_and_default_blocks_are_ignored() {
  let doc = parse_dot(
    r#"
    /* header */
    graph G {
      rankdir=LR;
      node [shape=circle]
      edge [color="gray"]
      // a comment with -- B
      A -- B [weight=1] // trailing
      subgraph cluster { X -- Y }
    }"#,
  )
  .unwrap();
  assert_eq!(doc.graph.nodes.len(), 2);
  assert_eq!(doc.graph.edges.len(), 1);
  assert_eq!(doc.attribute("rankdir"), Some("LR"));
}

#[test]
fn quoted_ids_and_labels() {
  let doc =
    parse_dot(r#"graph "my graph" { "New York" -- Boston [weight=3]; Boston [label="B\"os\""] }"#)
      .unwrap();
  assert_eq!(doc.name, "my graph");
  assert!(doc.graph.contains_node("New York"));
  assert_eq!(doc.graph.node("Boston").unwrap().label, "B\"os\"");
}

#[test]
fn anonymous_graph() {
  let doc = parse_dot("graph { A }").unwrap();
  assert_eq!(doc.name, "");
  assert_eq!(doc.graph.nodes.len(), 1);
}

#[test]
fn reject_digraph() {
  let err = parse_dot("digraph G { A -> B }").unwrap_err();
  assert!(matches!(err, ParseError::Syntax(m) if m.contains("directed")));
}

#[test]
fn reject_arrow_in_undirected_graph() {
  assert!(parse_dot("graph G { A -> B }").is_err());
}

#[test]
fn reject_missing_brace() {
  assert!(parse_dot("graph G  A -- B }").is_err());
  assert!(parse_dot("graph G { A -- B").is_err());
  assert!(parse_dot("graph G { A -- B } extra").is_err());
}

#[test]
fn reject_unclosed_attribute_block() {
  assert!(parse_dot("graph G { A -- B [weight=1 }").is_err());
}

#[test]
fn reject_non_numeric_weight() {
  let err = parse_dot("graph G { A -- B [weight=heavy] }").unwrap_err();
  assert_eq!(
    err,
    ParseError::InvalidNumber {
      key: "weight".to_string(),
      value: "heavy".to_string(),
    }
  );
}

#[test]
fn reject_non_numeric_capacity() {
  assert!(matches!(
    parse_dot("graph G { graph [capacity=lots] A }"),
    Err(ParseError::InvalidNumber { .. })
  ));
}

#[test]
fn reject_infinite_weight_through_graph_validation() {
  let err = parse_dot("graph G { A -- B [weight=inf] }").unwrap_err();
  assert!(matches!(
    err,
    ParseError::Graph(GraphError::InvalidWeight { .. })
  ));
}

#[test]
fn strip_comments_keeps_strings() {
  let s = strip_comments(r#"A [label="http://x"] // gone"#);
  assert_eq!(s.trim_end(), r#"A [label="http://x"]"#);
  assert_eq!(strip_comments("a /* b */ c"), "a   c");
}

#[test]
fn parse_id_variants() {
  assert_eq!(parse_id("abc rest").unwrap(), ("abc".to_string(), " rest"));
  assert_eq!(parse_id("42--").unwrap(), ("42".to_string(), "--"));
  assert_eq!(parse_id(r#""a b"x"#).unwrap(), ("a b".to_string(), "x"));
  assert!(parse_id("[").is_err());
  assert!(parse_id(r#""open"#).is_err());
}

#[test]
fn parse_number_variants() {
  assert_eq!(parse_number("12]"), Some(("12", "]")));
  assert_eq!(parse_number("-0.5,"), Some(("-0.5", ",")));
  assert_eq!(parse_number("3e-2 "), Some(("3e-2", " ")));
  assert_eq!(parse_number("x"), None);
}

#[test]
fn parse_value_prefers_numbers() {
  assert_eq!(parse_value("7]").unwrap(), ("7".to_string(), "]"));
  assert_eq!(parse_value(r#""q""#).unwrap(), ("q".to_string(), ""));
  assert_eq!(parse_value("LR;").unwrap(), ("LR".to_string(), ";"));
}

#[test]
fn unescape_sequences() {
  assert_eq!(unescape_quoted_string(r#"a\nb\tc\"d\\"#), "a\nb\tc\"d\\");
}
