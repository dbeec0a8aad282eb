//! Step playback: a cursor over a precomputed trace plus a timer task.

pub mod controller;
pub mod driver;


pub use controller::{
  DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, PlaybackController, PlaybackCursor, PlaybackFrame,
  PlaybackState, tick_delay,
};
pub use driver::{PlaybackCommand, PlaybackError, PlaybackHandle, drive, spawn};
