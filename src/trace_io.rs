//! trace.json save/load (JSON) under an output directory.

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::types::TraceLog;

/// Default filename for a trace under an output directory.
pub const TRACE_FILENAME: &str = "trace.json";

/// `dir/trace.json`.
pub fn trace_path(dir: &Path) -> PathBuf {
  dir.join(TRACE_FILENAME)
}

/// Saves a trace to `path` as pretty JSON. Creates parent directory if needed.
#[instrument(level = "trace", skip(path, log))]
pub fn save_trace(path: &Path, log: &TraceLog) -> Result<(), std::io::Error> {
  let json = serde_json::to_string_pretty(log)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)
}

/// Loads a trace from `path`. Returns error if file is missing or invalid JSON.
#[instrument(level = "trace", skip(path))]
pub fn load_trace(path: &Path) -> Result<TraceLog, std::io::Error> {
  let bytes = std::fs::read(path)?;
  serde_json::from_slice(&bytes)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
