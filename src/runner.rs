//! Trace runner: resolve a [`DotDocument`] into an [`AlgorithmRun`], run it and
//! optionally persist the resulting [`TraceLog`].
//!
//! - [build_run]: pick the algorithm, start node and capacity (explicit value, then DOT attribute, then default).
//! - [run_trace]: validate, generate the steps and write `trace.json`.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, instrument};

use crate::algorithms::{AlgorithmKind, AlgorithmRun};
use crate::dot_parser::DotDocument;
use crate::trace_io;
use crate::types::{Step, TraceLog};

/// Options for [run_trace].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions<'a> {
  /// If set, the trace is written to `output_dir/trace.json`.
  pub output_dir: Option<&'a Path>,
}

/// Outcome of [run_trace].
#[derive(Debug, Clone, PartialEq)]
pub struct TraceResult {
  pub log: TraceLog,
  /// Where the trace was written, if anywhere.
  pub trace_path: Option<PathBuf>,
}

impl TraceResult {
  pub fn steps(&self) -> &[Step] {
    &self.log.steps
  }
}

/// Resolves the algorithm input from a parsed document.
///
/// `kind` defaults to the `algorithm` graph attribute, then Dijkstra. `start`
/// defaults to the `start` attribute, then the first node. `capacity` defaults
/// to the `capacity` attribute.
pub fn build_run(
  document: &DotDocument,
  kind: Option<AlgorithmKind>,
  start: Option<&str>,
  capacity: Option<f64>,
) -> Result<AlgorithmRun, String> {
  let kind = match kind {
    Some(kind) => kind,
    None => match document.algorithm() {
      Some(name) => name.parse::<AlgorithmKind>().map_err(|e| e.to_string())?,
      None => AlgorithmKind::Dijkstra,
    },
  };

  let graph = document.graph.clone();
  let resolve_start = || -> Result<String, String> {
    start
      .or(document.start())
      .or_else(|| document.graph.nodes.first().map(|n| n.id.as_str()))
      .map(str::to_string)
      .ok_or_else(|| format!("{kind} needs a start node but the graph has no nodes"))
  };

  let run = match kind {
    AlgorithmKind::Dijkstra => AlgorithmRun::Dijkstra {
      graph,
      start: resolve_start()?,
    },
    AlgorithmKind::BellmanFord => AlgorithmRun::BellmanFord {
      graph,
      start: resolve_start()?,
    },
    AlgorithmKind::FloydWarshall => AlgorithmRun::FloydWarshall { graph },
    AlgorithmKind::Prim => AlgorithmRun::Prim {
      graph,
      start: resolve_start()?,
    },
    AlgorithmKind::Knapsack => {
      if document.items.is_empty() {
        return Err("knapsack needs items: nodes with both value and weight attributes".to_string());
      }
      let capacity = capacity
        .or(document.capacity())
        .ok_or("knapsack needs a capacity (--capacity or graph [capacity=...])")?;
      AlgorithmRun::Knapsack {
        items: document.items.clone(),
        capacity,
      }
    }
  };
  Ok(run)
}

/// Validates `run`, generates its steps and writes the trace when `output_dir` is set.
#[instrument(level = "trace", skip(run, options))]
pub fn run_trace(run: &AlgorithmRun, options: RunOptions<'_>) -> Result<TraceResult, String> {
  run.validate().map_err(|e| e.to_string())?;

  let started_at = Utc::now().to_rfc3339();
  let steps = run.run();
  let finished_at = Utc::now().to_rfc3339();

  let log = TraceLog {
    version: TraceLog::VERSION,
    algorithm: run.kind().to_string(),
    parameters: run.parameters(),
    started_at,
    finished_at: Some(finished_at),
    step_count: steps.len(),
    steps,
  };

  let trace_path = match options.output_dir {
    Some(dir) => {
      let path = trace_io::trace_path(dir);
      trace_io::save_trace(&path, &log).map_err(|e| e.to_string())?;
      Some(path)
    }
    None => None,
  };

  info!(
    algorithm = %log.algorithm,
    steps = log.step_count,
    path = ?trace_path,
    "trace run complete"
  );
  Ok(TraceResult { log, trace_path })
}
