//! CLI: Generate an algorithm step trace from a .dot file.
//!
//! Parse DOT → resolve algorithm input → generate steps → write trace.json,
//! optionally replaying the steps in the terminal at the chosen speed.
//!
//! Usage: `run_trace [OPTIONS] <path-to-dot-file>`
//! Example: run_trace --algorithm prim --start A tests/fixtures/sample.dot
//!
//! The trace is written to .algotrace/trace.json unless --output-dir says otherwise.
//!
//! Set RUST_LOG=algotrace=trace for TRACE-level span enter/exit and events.

use algotrace::playback::{self, DEFAULT_SPEED, PlaybackController, PlaybackError, PlaybackState};
use algotrace::{AlgorithmKind, AlgorithmRun, RunOptions, build_run, dot_parser, run_trace};
use clap::Parser;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const OUTPUT_DIR: &str = ".algotrace";

/// Generate an algorithm step trace from a .dot file.
#[derive(Parser, Debug)]
#[command(name = "run_trace")]
#[command(
  after_help = r#"Environment variables (override --output-dir and --speed when set):
  ALGOTRACE_OUTPUT_DIR  Directory for trace.json (default: .algotrace).
  ALGOTRACE_SPEED       Playback speed 1-100 used with --play.

Graph attributes `algorithm`, `start` and `capacity` supply defaults for the
matching flags.

Examples:
  run_trace tests/fixtures/sample.dot
  run_trace --algorithm bellman-ford --start A --play --speed 90 tests/fixtures/sample.dot
  run_trace --algorithm knapsack --capacity 50 tests/fixtures/items.dot"#
)]
struct Args {
  /// dijkstra, bellman_ford, floyd_warshall, prim or knapsack. Default: graph attribute, then dijkstra.
  #[arg(long, short, value_name = "KIND")]
  algorithm: Option<AlgorithmKind>,

  /// Start node for dijkstra, bellman_ford and prim. Default: graph attribute, then first node.
  #[arg(long, short, value_name = "ID")]
  start: Option<String>,

  /// Knapsack capacity. Default: graph attribute.
  #[arg(long, value_name = "N")]
  capacity: Option<f64>,

  /// Directory for trace.json. Overridden by ALGOTRACE_OUTPUT_DIR if set. Default: .algotrace
  #[arg(long, value_name = "DIR", default_value = OUTPUT_DIR)]
  output_dir: PathBuf,

  /// Replay the steps in the terminal after generating them.
  #[arg(long)]
  play: bool,

  /// Playback speed 1-100 (tick delay max(100, 2000 - 19*speed) ms). Overridden by ALGOTRACE_SPEED if set.
  #[arg(long, value_name = "1-100", default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u8).range(1..=100))]
  speed: u8,

  /// Path to the .dot graph file
  #[arg(value_name = "path-to-dot-file")]
  dot_path: PathBuf,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  info!("run_trace starting");
  let args = Args::parse();

  // Env vars override flags.
  let output_dir = env::var("ALGOTRACE_OUTPUT_DIR")
    .ok()
    .map(PathBuf::from)
    .unwrap_or_else(|| args.output_dir.clone());
  let speed = match env::var("ALGOTRACE_SPEED") {
    Ok(raw) => match raw.trim().parse::<u8>() {
      Ok(s) if (1..=100).contains(&s) => s,
      _ => {
        eprintln!("Invalid ALGOTRACE_SPEED {:?}: expected an integer 1-100", raw);
        process::exit(1);
      }
    },
    Err(_) => args.speed,
  };

  info!(output_dir = %output_dir.display(), speed, play = args.play, "options (env or flags)");

  let path = &args.dot_path;
  let dot = match fs::read_to_string(path) {
    Ok(s) => s,
    Err(e) => {
      eprintln!("Error reading {}: {}", path.display(), e);
      process::exit(1);
    }
  };

  let document = match dot_parser::parse_dot(&dot) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Error parsing DOT: {}", e);
      process::exit(1);
    }
  };

  let run = match build_run(
    &document,
    args.algorithm,
    args.start.as_deref(),
    args.capacity,
  ) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Input error: {}", e);
      process::exit(1);
    }
  };

  let options = RunOptions {
    output_dir: Some(output_dir.as_path()),
  };
  let result = match run_trace(&run, options) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Trace error: {}", e);
      process::exit(1);
    }
  };

  println!("Trace generated.");
  println!("  Algorithm: {}", result.log.algorithm);
  println!("  Steps: {}", result.log.step_count);
  if let Some(last) = result.log.final_step() {
    println!("  Final: {}", last.description);
  }
  if let Some(p) = &result.trace_path {
    println!("  Written: {}", p.display());
  }

  if args.play
    && let Err(e) = replay(run, speed).await
  {
    eprintln!("Playback error: {}", e);
    process::exit(1);
  }
}

/// Plays the trace to completion, printing each step as the cursor reaches it.
async fn replay(run: AlgorithmRun, speed: u8) -> Result<(), PlaybackError> {
  let handle = playback::spawn(PlaybackController::new(run).with_speed(speed));
  let mut frames = handle.subscribe();
  let mut last_index = None;
  handle.play().await?;
  loop {
    let frame = frames.borrow_and_update().clone();
    if last_index != Some(frame.index) {
      last_index = Some(frame.index);
      if let Some(step) = frame.current_step() {
        println!("[{}/{}] {}", frame.index + 1, frame.len, step.description);
      }
    }
    if frame.state == PlaybackState::Complete || frame.len == 0 {
      break;
    }
    if frames.changed().await.is_err() {
      break;
    }
  }
  handle.shutdown().await?;
  Ok(())
}
