//! Timer-driven playback task.
//!
//! One tokio task owns the [`PlaybackController`] and at most one pending
//! tick. Commands arrive over an mpsc channel and every change is published
//! as a [`PlaybackFrame`] on a watch channel, so renderers always see a
//! consistent (steps, index) pair.

use std::future;
use std::pin::Pin;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Sleep, sleep};
use tracing::{debug, instrument};

use super::controller::{PlaybackController, PlaybackFrame};
use crate::algorithms::AlgorithmRun;

const COMMAND_BUFFER: usize = 32;

/// User controls accepted by the playback task.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCommand {
  Play,
  Pause,
  Toggle,
  StepForward,
  StepBack,
  Seek(usize),
  SetSpeed(u8),
  Reset,
  SetInput(Box<AlgorithmRun>),
}

impl PlaybackCommand {
  /// A speed change only affects the next scheduled tick; `Play` keeps a
  /// running schedule. Everything else drops the pending tick.
  fn cancels_pending_tick(&self) -> bool {
    !matches!(self, PlaybackCommand::Play | PlaybackCommand::SetSpeed(_))
  }

  fn apply(self, controller: &mut PlaybackController) {
    match self {
      PlaybackCommand::Play => controller.play(),
      PlaybackCommand::Pause => controller.pause(),
      PlaybackCommand::Toggle => controller.toggle(),
      PlaybackCommand::StepForward => controller.step_forward(),
      PlaybackCommand::StepBack => controller.step_back(),
      PlaybackCommand::Seek(index) => controller.seek(index),
      PlaybackCommand::SetSpeed(speed) => controller.set_speed(speed),
      PlaybackCommand::Reset => controller.reset(),
      PlaybackCommand::SetInput(run) => controller.set_input(*run),
    }
  }
}

#[derive(Debug, Error)]
pub enum PlaybackError {
  #[error("playback task has stopped")]
  Closed,
  #[error("playback task failed: {0}")]
  Join(#[from] JoinError),
}

/// Client side of a running playback task.
#[derive(Debug)]
pub struct PlaybackHandle {
  commands: mpsc::Sender<PlaybackCommand>,
  frames: watch::Receiver<PlaybackFrame>,
  task: JoinHandle<PlaybackController>,
}

impl PlaybackHandle {
  pub async fn send(&self, command: PlaybackCommand) -> Result<(), PlaybackError> {
    self
      .commands
      .send(command)
      .await
      .map_err(|_| PlaybackError::Closed)
  }

  pub async fn play(&self) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::Play).await
  }

  pub async fn pause(&self) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::Pause).await
  }

  pub async fn toggle(&self) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::Toggle).await
  }

  pub async fn step_forward(&self) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::StepForward).await
  }

  pub async fn step_back(&self) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::StepBack).await
  }

  pub async fn seek(&self, index: usize) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::Seek(index)).await
  }

  pub async fn set_speed(&self, speed: u8) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::SetSpeed(speed)).await
  }

  pub async fn reset(&self) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::Reset).await
  }

  pub async fn set_input(&self, run: AlgorithmRun) -> Result<(), PlaybackError> {
    self.send(PlaybackCommand::SetInput(Box::new(run))).await
  }

  /// Latest published frame.
  pub fn frame(&self) -> PlaybackFrame {
    self.frames.borrow().clone()
  }

  pub fn subscribe(&self) -> watch::Receiver<PlaybackFrame> {
    self.frames.clone()
  }

  /// Closes the command channel, cancels any pending tick and returns the
  /// controller in its final position.
  pub async fn shutdown(self) -> Result<PlaybackController, PlaybackError> {
    let PlaybackHandle { commands, task, .. } = self;
    drop(commands);
    Ok(task.await?)
  }
}

/// Spawns the playback task on the current tokio runtime.
pub fn spawn(controller: PlaybackController) -> PlaybackHandle {
  let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
  let (frame_tx, frame_rx) = watch::channel(controller.frame());
  let task = tokio::spawn(drive(controller, command_rx, frame_tx));
  PlaybackHandle {
    commands: command_tx,
    frames: frame_rx,
    task,
  }
}

/// Runs until every command sender is dropped.
#[instrument(level = "trace", skip_all)]
pub async fn drive(
  mut controller: PlaybackController,
  mut commands: mpsc::Receiver<PlaybackCommand>,
  frames: watch::Sender<PlaybackFrame>,
) -> PlaybackController {
  let mut pending: Option<Pin<Box<Sleep>>> = None;
  loop {
    tokio::select! {
      command = commands.recv() => {
        let Some(command) = command else {
          break;
        };
        debug!(?command, index = controller.index(), "playback command");
        if command.cancels_pending_tick() {
          pending = None;
        }
        command.apply(&mut controller);
      }
      () = next_tick(&mut pending) => {
        pending = None;
        controller.tick();
      }
    }

    if !controller.is_playing() {
      pending = None;
    } else if pending.is_none() {
      pending = Some(Box::pin(sleep(controller.delay())));
    }
    frames.send_replace(controller.frame());
  }
  debug!(index = controller.index(), "playback task stopped");
  controller
}

async fn next_tick(pending: &mut Option<Pin<Box<Sleep>>>) {
  match pending {
    Some(tick) => tick.as_mut().await,
    None => future::pending().await,
  }
}
