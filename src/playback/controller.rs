//! Cursor over a precomputed step list.
//!
//! The controller never re-enters an executor while navigating; it only
//! recomputes on `reset` or when a new input replaces the old one, and the
//! new list replaces the previous one in a single assignment.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::algorithms::AlgorithmRun;
use crate::types::Step;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;

/// Time between ticks at `speed` (clamped to `1..=100`): `max(100, 2000 - 19·speed)` ms.
pub fn tick_delay(speed: u8) -> Duration {
  let speed = u64::from(speed.clamp(MIN_SPEED, MAX_SPEED));
  Duration::from_millis(2000u64.saturating_sub(speed * 19).max(100))
}

/// Observable playback state, derived from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
  Idle,
  Playing,
  Paused,
  Complete,
}

impl fmt::Display for PlaybackState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PlaybackState::Idle => write!(f, "idle"),
      PlaybackState::Playing => write!(f, "playing"),
      PlaybackState::Paused => write!(f, "paused"),
      PlaybackState::Complete => write!(f, "complete"),
    }
  }
}

/// Position, running flag and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackCursor {
  pub index: usize,
  pub playing: bool,
  pub speed: u8,
}

impl Default for PlaybackCursor {
  fn default() -> Self {
    Self {
      index: 0,
      playing: false,
      speed: DEFAULT_SPEED,
    }
  }
}

/// What controls and renderers read back after every change.
#[derive(Debug, Clone)]
pub struct PlaybackFrame {
  /// Incremented every time the step list is recomputed.
  pub generation: u64,
  pub index: usize,
  pub len: usize,
  pub playing: bool,
  pub speed: u8,
  pub state: PlaybackState,
  pub steps: Arc<[Step]>,
}

impl PlaybackFrame {
  pub fn current_step(&self) -> Option<&Step> {
    self.steps.get(self.index)
  }
}

/// Playback state machine over the steps of one [`AlgorithmRun`].
#[derive(Debug, Clone)]
pub struct PlaybackController {
  run: AlgorithmRun,
  steps: Arc<[Step]>,
  cursor: PlaybackCursor,
  generation: u64,
}

impl PlaybackController {
  /// Runs the algorithm once and positions the cursor on the first step.
  pub fn new(run: AlgorithmRun) -> Self {
    let steps: Arc<[Step]> = run.run().into();
    Self {
      run,
      steps,
      cursor: PlaybackCursor::default(),
      generation: 0,
    }
  }

  pub fn with_speed(mut self, speed: u8) -> Self {
    self.set_speed(speed);
    self
  }

  /// Recomputes the step list from the current input, rewinds and stops.
  #[instrument(level = "trace", skip(self))]
  pub fn reset(&mut self) {
    self.steps = self.run.run().into();
    self.cursor.index = 0;
    self.cursor.playing = false;
    self.generation += 1;
    info!(
      algorithm = %self.run.kind(),
      steps = self.steps.len(),
      generation = self.generation,
      "playback reset"
    );
  }

  /// Replaces the input and discards the previous step list.
  pub fn set_input(&mut self, run: AlgorithmRun) {
    self.run = run;
    self.reset();
  }

  pub fn step_forward(&mut self) {
    if self.cursor.index + 1 < self.steps.len() {
      self.cursor.index += 1;
    }
    if self.is_at_end() {
      self.cursor.playing = false;
    }
  }

  pub fn step_back(&mut self) {
    if self.cursor.index > 0 {
      self.cursor.index -= 1;
    }
  }

  /// Moves to `index`, clamped to the last step.
  pub fn seek(&mut self, index: usize) {
    if self.steps.is_empty() {
      return;
    }
    self.cursor.index = index.min(self.steps.len() - 1);
    if self.is_at_end() {
      self.cursor.playing = false;
    }
  }

  /// Starts playing; from the last step this restarts with a fresh list.
  pub fn play(&mut self) {
    if self.steps.is_empty() {
      return;
    }
    if self.is_at_end() {
      self.reset();
    }
    self.cursor.playing = true;
  }

  pub fn pause(&mut self) {
    self.cursor.playing = false;
  }

  pub fn toggle(&mut self) {
    if self.cursor.playing {
      self.pause();
    } else {
      self.play();
    }
  }

  /// Sets the speed used for the next scheduled tick.
  pub fn set_speed(&mut self, speed: u8) {
    self.cursor.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
  }

  /// Timer callback: advances one step while playing. Returns whether it moved.
  pub fn tick(&mut self) -> bool {
    if !self.cursor.playing {
      return false;
    }
    let before = self.cursor.index;
    self.step_forward();
    if self.is_at_end() {
      debug!(index = self.cursor.index, "playback complete");
      self.cursor.playing = false;
    }
    self.cursor.index != before
  }

  pub fn delay(&self) -> Duration {
    tick_delay(self.cursor.speed)
  }

  pub fn state(&self) -> PlaybackState {
    if self.cursor.playing {
      PlaybackState::Playing
    } else if self.is_at_end() {
      PlaybackState::Complete
    } else if self.cursor.index == 0 {
      PlaybackState::Idle
    } else {
      PlaybackState::Paused
    }
  }

  fn is_at_end(&self) -> bool {
    !self.steps.is_empty() && self.cursor.index + 1 >= self.steps.len()
  }

  pub fn current_step(&self) -> Option<&Step> {
    self.steps.get(self.cursor.index)
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn index(&self) -> usize {
    self.cursor.index
  }

  pub fn is_playing(&self) -> bool {
    self.cursor.playing
  }

  pub fn speed(&self) -> u8 {
    self.cursor.speed
  }

  pub fn cursor(&self) -> PlaybackCursor {
    self.cursor
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn input(&self) -> &AlgorithmRun {
    &self.run
  }

  pub fn frame(&self) -> PlaybackFrame {
    PlaybackFrame {
      generation: self.generation,
      index: self.cursor.index,
      len: self.steps.len(),
      playing: self.cursor.playing,
      speed: self.cursor.speed,
      state: self.state(),
      steps: Arc::clone(&self.steps),
    }
  }
}
