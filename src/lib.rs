//! # algotrace
//!
//! Deterministic step traces of classic graph and greedy algorithms, with
//! timed playback.
//!
//! ## Architecture
//!
//! Each executor (see `algorithms`) turns its input into a complete, ordered
//! list of immutable [`Step`] snapshots: node and edge statuses plus the
//! algorithm's auxiliary state at that moment. Nothing is computed during
//! playback; the `playback` controller only moves a cursor over the list and
//! recomputes it on reset or when the input changes.
//!
//! Supporting modules: `dot_parser` (undirected DOT input), `runner`
//! (resolve, run, persist), `trace_io` (trace.json), `samples`.

pub mod algorithms;
pub mod dot_parser;
#[cfg(test)]
mod dot_parser_test;
pub mod playback;
pub mod runner;
pub mod samples;
pub mod trace_io;
pub mod types;

pub use algorithms::{AlgorithmKind, AlgorithmRun, UnknownAlgorithm};
pub use dot_parser::{DotDocument, ParseError, parse_dot};
pub use playback::{PlaybackController, PlaybackFrame, PlaybackHandle, PlaybackState};
pub use runner::{RunOptions, TraceResult, build_run, run_trace};
pub use types::{
  Distance, Edge, EdgeStatus, Graph, GraphError, KnapsackItem, Node, NodeStatus, Step, TraceLog,
};
