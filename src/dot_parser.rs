//! Minimal DOT parser for undirected weighted graphs.
//!
//! Accepts `graph name { ... }` with node statements, `--` edge chains,
//! `graph [...]` attributes and top-level `key=value` assignments. Nodes that
//! carry both `value` and `weight` are also exposed as knapsack items.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::instrument;

use crate::types::{Edge, Graph, GraphError, KnapsackItem, Node};

/// Weight of an edge statement without a `weight` attribute.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
  #[error("{0}")]
  Syntax(String),
  #[error("invalid number {value:?} for attribute '{key}'")]
  InvalidNumber { key: String, value: String },
  #[error(transparent)]
  Graph(#[from] GraphError),
}

fn syntax(message: impl Into<String>) -> ParseError {
  ParseError::Syntax(message.into())
}

/// Parsed DOT source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DotDocument {
  pub name: String,
  pub graph: Graph,
  pub items: Vec<KnapsackItem>,
  /// Graph-level attributes from `graph [...]` blocks and `key=value` statements.
  pub attributes: BTreeMap<String, String>,
}

impl DotDocument {
  pub fn attribute(&self, key: &str) -> Option<&str> {
    self.attributes.get(key).map(String::as_str)
  }

  pub fn start(&self) -> Option<&str> {
    self.attribute("start")
  }

  pub fn algorithm(&self) -> Option<&str> {
    self.attribute("algorithm")
  }

  /// `capacity` attribute; checked to be numeric while parsing.
  pub fn capacity(&self) -> Option<f64> {
    self.attribute("capacity").and_then(|v| v.parse().ok())
  }
}

/// Parse a DOT source string into a [`DotDocument`].
#[instrument(level = "trace", skip(source))]
pub fn parse_dot(source: &str) -> Result<DotDocument, ParseError> {
  let source = strip_comments(source);
  let mut rest = source.trim();

  if let Some(r) = strip_keyword(rest, "strict") {
    rest = r.trim_start();
  }
  if strip_keyword(rest, "digraph").is_some() {
    return Err(syntax(
      "directed graphs are not supported; use 'graph' with '--' edges",
    ));
  }
  let rest = strip_keyword(rest, "graph")
    .ok_or_else(|| syntax("Expected 'graph' at start"))?
    .trim_start();

  let (name, rest) = if rest.starts_with('{') {
    (String::new(), rest)
  } else {
    parse_id(rest)?
  };
  let rest = rest
    .trim_start()
    .strip_prefix('{')
    .ok_or_else(|| syntax("Expected '{' after graph name"))?;

  let mut builder = DocumentBuilder::default();
  let mut remaining = rest.trim_start();
  loop {
    if remaining.is_empty() {
      return Err(syntax("Expected '}' at end of graph"));
    }
    if let Some(after) = remaining.strip_prefix('}') {
      if !after.trim().is_empty() {
        return Err(syntax("Unexpected content after closing '}'"));
      }
      break;
    }
    remaining = parse_statement(remaining, &mut builder)?.trim_start();
  }

  builder.finish(name)
}

#[derive(Debug, Default)]
struct NodeDecl {
  label: Option<String>,
  value: Option<f64>,
  weight: Option<f64>,
}

/// Accumulates statements; node order is first appearance.
#[derive(Debug, Default)]
struct DocumentBuilder {
  order: Vec<String>,
  nodes: HashMap<String, NodeDecl>,
  edges: Vec<Edge>,
  attributes: BTreeMap<String, String>,
}

impl DocumentBuilder {
  fn touch(&mut self, id: &str) -> &mut NodeDecl {
    if !self.nodes.contains_key(id) {
      self.order.push(id.to_string());
    }
    self.nodes.entry(id.to_string()).or_default()
  }

  fn apply_node_attrs(&mut self, id: &str, attrs: &[(String, String)]) -> Result<(), ParseError> {
    let decl = self.touch(id);
    for (k, v) in attrs {
      match k.as_str() {
        "label" => decl.label = Some(v.clone()),
        "value" => decl.value = Some(parse_f64(k, v)?),
        "weight" => decl.weight = Some(parse_f64(k, v)?),
        _ => {}
      }
    }
    Ok(())
  }

  fn finish(mut self, name: String) -> Result<DotDocument, ParseError> {
    if let Some(capacity) = self.attributes.get("capacity") {
      parse_f64("capacity", capacity)?;
    }

    let mut nodes = Vec::with_capacity(self.order.len());
    let mut items = Vec::new();
    for id in self.order {
      let decl = self.nodes.remove(&id).unwrap_or_default();
      let label = decl.label.unwrap_or_else(|| id.clone());
      if let (Some(value), Some(weight)) = (decl.value, decl.weight) {
        items.push(KnapsackItem {
          id: id.clone(),
          label: label.clone(),
          value,
          weight,
        });
      }
      nodes.push(Node::new(id, label));
    }

    Ok(DotDocument {
      name,
      graph: Graph::new(nodes, self.edges)?,
      items,
      attributes: self.attributes,
    })
  }
}

/// Strips `//` and `/* */` comments, leaving quoted strings intact.
pub(crate) fn strip_comments(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars().peekable();
  let mut in_string = false;
  while let Some(c) = chars.next() {
    if in_string {
      out.push(c);
      match c {
        '\\' => {
          if let Some(next) = chars.next() {
            out.push(next);
          }
        }
        '"' => in_string = false,
        _ => {}
      }
      continue;
    }
    match (c, chars.peek().copied()) {
      ('"', _) => {
        in_string = true;
        out.push(c);
      }
      ('/', Some('/')) => {
        for skipped in chars.by_ref() {
          if skipped == '\n' {
            out.push('\n');
            break;
          }
        }
      }
      ('/', Some('*')) => {
        chars.next();
        let mut prev = '\0';
        for skipped in chars.by_ref() {
          if prev == '*' && skipped == '/' {
            break;
          }
          prev = skipped;
        }
        out.push(' ');
      }
      _ => out.push(c),
    }
  }
  out
}

fn is_id_char(c: char) -> bool {
  c.is_alphanumeric() || c == '_' || c == '.'
}

/// Strips `keyword` only when it is not the prefix of a longer identifier.
fn strip_keyword<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
  let rest = s.strip_prefix(keyword)?;
  if rest.starts_with(is_id_char) {
    None
  } else {
    Some(rest)
  }
}

/// Parses a bare identifier (letters, digits, `_`, `.`) or a quoted string.
pub(crate) fn parse_id(s: &str) -> Result<(String, &str), ParseError> {
  let s = s.trim_start();
  if let Some(quoted) = s.strip_prefix('"') {
    return parse_quoted(quoted);
  }
  let end = s.find(|c: char| !is_id_char(c)).unwrap_or(s.len());
  if end == 0 {
    return Err(syntax(format!("Expected identifier, found {:?}", preview(s))));
  }
  Ok((s[..end].to_string(), &s[end..]))
}

/// `s` starts just after the opening quote.
fn parse_quoted(s: &str) -> Result<(String, &str), ParseError> {
  let mut escaped = false;
  for (i, c) in s.char_indices() {
    if escaped {
      escaped = false;
      continue;
    }
    match c {
      '\\' => escaped = true,
      '"' => return Ok((unescape_quoted_string(&s[..i]), &s[i + 1..])),
      _ => {}
    }
  }
  Err(syntax("Unterminated quoted string"))
}

/// Unescapes DOT quoted string escape sequences (\\n, \\t, \\\", \\\\).
pub(crate) fn unescape_quoted_string(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars();
  while let Some(c) = chars.next() {
    if c != '\\' {
      out.push(c);
      continue;
    }
    match chars.next() {
      Some('n') => out.push('\n'),
      Some('t') => out.push('\t'),
      Some(other) => out.push(other),
      None => out.push('\\'),
    }
  }
  out
}

/// Parses a signed decimal number token such as `-3`, `2.5` or `1e3`.
pub(crate) fn parse_number(s: &str) -> Option<(&str, &str)> {
  let s = s.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;
  if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
    end += 1;
  }
  let digits_start = end;
  while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
    end += 1;
  }
  if end == digits_start {
    return None;
  }
  if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
    let mut exp = end + 1;
    if exp < bytes.len() && (bytes[exp] == b'-' || bytes[exp] == b'+') {
      exp += 1;
    }
    if exp < bytes.len() && bytes[exp].is_ascii_digit() {
      while exp < bytes.len() && bytes[exp].is_ascii_digit() {
        exp += 1;
      }
      end = exp;
    }
  }
  Some((&s[..end], &s[end..]))
}

/// Parses a quoted string, number, or identifier value.
pub(crate) fn parse_value(s: &str) -> Result<(String, &str), ParseError> {
  let s = s.trim_start();
  if let Some((num, rest)) = parse_number(s) {
    return Ok((num.to_string(), rest));
  }
  parse_id(s)
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ParseError> {
  value
    .trim()
    .parse()
    .map_err(|_| ParseError::InvalidNumber {
      key: key.to_string(),
      value: value.to_string(),
    })
}

/// List of key-value attribute pairs from DOT `[key=value,...]` blocks.
type AttrList = Vec<(String, String)>;

/// Parses `[key=value, ...]` (`,` or `;` separated) and returns the attributes plus the remainder.
fn parse_attr_block(s: &str) -> Result<(AttrList, &str), ParseError> {
  let s = s
    .trim_start()
    .strip_prefix('[')
    .ok_or_else(|| syntax("Expected '['"))?;
  let mut attrs = Vec::new();
  let mut remaining = s.trim_start();
  loop {
    if let Some(rest) = remaining.strip_prefix(']') {
      return Ok((attrs, rest));
    }
    if remaining.is_empty() {
      return Err(syntax("Unclosed attribute block"));
    }
    let (k, rest) = parse_id(remaining)?;
    let rest = rest
      .trim_start()
      .strip_prefix('=')
      .ok_or_else(|| syntax(format!("Expected '=' after attribute '{k}'")))?;
    let (v, rest) = parse_value(rest)?;
    attrs.push((k, v));
    remaining = rest.trim_start().trim_start_matches([',', ';']).trim_start();
  }
}

fn end_statement(s: &str) -> &str {
  s.trim_start().trim_start_matches(';')
}

/// Parses one statement into `builder` and returns the unconsumed remainder.
fn parse_statement<'a>(s: &'a str, builder: &mut DocumentBuilder) -> Result<&'a str, ParseError> {
  let s = s.trim_start();
  if let Some(rest) = s.strip_prefix(';') {
    return Ok(rest);
  }
  if let Some(rest) = strip_keyword(s, "graph") {
    let (attrs, rest) = parse_attr_block(rest)?;
    builder.attributes.extend(attrs);
    return Ok(end_statement(rest));
  }
  if let Some(rest) = strip_keyword(s, "node").or_else(|| strip_keyword(s, "edge")) {
    let (_, rest) = parse_attr_block(rest)?;
    return Ok(end_statement(rest));
  }
  if strip_keyword(s, "subgraph").is_some() || s.starts_with('{') {
    return skip_subgraph(s);
  }

  let (id, rest) = parse_id(s)?;
  let rest = rest.trim_start();

  if let Some(rest) = rest.strip_prefix('=') {
    let (value, rest) = parse_value(rest)?;
    builder.attributes.insert(id, value);
    return Ok(end_statement(rest));
  }
  if rest.starts_with("--") {
    return parse_edge_stmt(id, rest, builder);
  }
  if rest.starts_with("->") {
    return Err(syntax(format!(
      "'->' is not valid in an undirected graph (after '{id}')"
    )));
  }

  builder.touch(&id);
  if rest.starts_with('[') {
    let (attrs, rest) = parse_attr_block(rest)?;
    builder.apply_node_attrs(&id, &attrs)?;
    return Ok(end_statement(rest));
  }
  Ok(end_statement(rest))
}

/// Parses `from -- a -- b [attrs]`; every link of the chain shares the attributes.
fn parse_edge_stmt<'a>(
  from: String,
  mut s: &'a str,
  builder: &mut DocumentBuilder,
) -> Result<&'a str, ParseError> {
  let mut chain = vec![from];
  while let Some(rest) = s.strip_prefix("--") {
    let (to, rest) = parse_id(rest)?;
    chain.push(to);
    s = rest.trim_start();
  }

  let attrs = if s.starts_with('[') {
    let (attrs, rest) = parse_attr_block(s)?;
    s = rest;
    attrs
  } else {
    Vec::new()
  };
  let weight = match attrs.iter().rev().find(|(k, _)| k == "weight") {
    Some((k, v)) => parse_f64(k, v)?,
    None => DEFAULT_EDGE_WEIGHT,
  };

  for id in &chain {
    builder.touch(id);
  }
  for pair in chain.windows(2) {
    builder
      .edges
      .push(Edge::new(pair[0].clone(), pair[1].clone(), weight));
  }
  Ok(end_statement(s))
}

/// Skips a balanced `{...}` subgraph and returns the remainder.
fn skip_subgraph(s: &str) -> Result<&str, ParseError> {
  let start = s.find('{').ok_or_else(|| syntax("Expected '{'"))?;
  let mut depth = 0;
  for (i, c) in s[start..].char_indices() {
    match c {
      '{' => depth += 1,
      '}' => {
        depth -= 1;
        if depth == 0 {
          return Ok(end_statement(&s[start + i + 1..]));
        }
      }
      _ => {}
    }
  }
  Err(syntax("Unclosed subgraph"))
}

fn preview(s: &str) -> String {
  s.chars().take(16).collect()
}
