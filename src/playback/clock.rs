use std::fmt;
use std::time::Duration;

use crate::foundation::core::Fps;
use crate::playback::scheduler::{FrameScheduler, ScheduleHandle};

/// Lifecycle of a [`PlaybackClock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not advancing. Entered initially, on `stop`, on a sequence change without autoplay, and
    /// when a non-looping sequence runs out.
    Stopped,
    /// Advancing on every refresh.
    Running,
    /// Halted by the caller; `resume` continues from the same index.
    Paused,
}

/// Playback tunables.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Wrap to the first frame after the last one.
    pub looping: bool,
    /// Start running as soon as a sequence is loaded.
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            looping: true,
            autoplay: true,
        }
    }
}

type FrameCallback = Box<dyn FnMut(usize)>;

/// Frame-accurate index advancer driven by host refresh callbacks.
///
/// Wall-clock deltas between refreshes accumulate; each time the accumulator reaches one frame
/// interval the index advances by exactly one step and only the surplus carries over. The
/// per-advance callback fires once per index change, including a wrap to 0, and never for the
/// initial frame.
pub struct PlaybackClock<S: FrameScheduler> {
    scheduler: S,
    config: PlaybackConfig,
    frame_count: usize,
    index: usize,
    state: PlaybackState,
    accumulated_ms: f64,
    last_time_ms: Option<f64>,
    pending: Option<ScheduleHandle>,
    on_frame: Option<FrameCallback>,
}

impl<S: FrameScheduler> PlaybackClock<S> {
    /// Create a stopped clock with no sequence.
    pub fn new(scheduler: S, config: PlaybackConfig) -> Self {
        Self {
            scheduler,
            config,
            frame_count: 0,
            index: 0,
            state: PlaybackState::Stopped,
            accumulated_ms: 0.0,
            last_time_ms: None,
            pending: None,
            on_frame: None,
        }
    }

    /// Register the per-advance callback, replacing any previous one.
    pub fn on_frame(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_frame = Some(Box::new(callback));
    }

    /// Point the clock at a new sequence of `frame_count` frames.
    ///
    /// Always rewinds to frame 0 and discards accumulated time. Runs immediately when autoplay
    /// is enabled and the sequence is non-empty; otherwise stops.
    pub fn load(&mut self, frame_count: usize) {
        self.cancel_pending();
        self.frame_count = frame_count;
        self.index = 0;
        self.reset_timing();
        if self.config.autoplay && frame_count > 0 {
            self.enter_running();
        } else {
            self.state = PlaybackState::Stopped;
        }
        tracing::trace!(frame_count, state = ?self.state, "playback sequence loaded");
    }

    /// Start playback. Returns `false` when there is nothing to play.
    ///
    /// Starting after a non-looping sequence ran out rewinds to frame 0 first, without a
    /// callback. Starting while paused resumes.
    pub fn start(&mut self) -> bool {
        if self.frame_count == 0 {
            return false;
        }
        match self.state {
            PlaybackState::Running => {}
            PlaybackState::Paused => {
                self.resume();
            }
            PlaybackState::Stopped => {
                if !self.config.looping && self.index + 1 >= self.frame_count {
                    self.index = 0;
                }
                self.reset_timing();
                self.enter_running();
            }
        }
        true
    }

    /// Pause a running clock. Returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.cancel_pending();
        self.state = PlaybackState::Paused;
        // Time spent paused must not count towards the next frame.
        self.last_time_ms = None;
        tracing::trace!(index = self.index, "playback paused");
        true
    }

    /// Resume a paused clock. Returns whether the state changed.
    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.last_time_ms = None;
        self.enter_running();
        true
    }

    /// Apply an external paused flag.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if paused { self.pause() } else { self.resume() }
    }

    /// Stop playback, keeping the current index.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.reset_timing();
        if self.state != PlaybackState::Stopped {
            tracing::trace!(index = self.index, "playback stopped");
        }
        self.state = PlaybackState::Stopped;
    }

    /// Change the frame rate. Time accumulated at the old rate is discarded.
    pub fn set_fps(&mut self, fps: Fps) {
        if fps != self.config.fps {
            self.config.fps = fps;
            self.accumulated_ms = 0.0;
        }
    }

    /// Enable or disable wrap-around.
    pub fn set_looping(&mut self, looping: bool) {
        self.config.looping = looping;
    }

    /// Handle a refresh callback delivered by the host at time `now`.
    ///
    /// Handles that were cancelled or superseded are ignored. Returns the new index when this
    /// refresh advanced the clock.
    pub fn refresh(&mut self, handle: ScheduleHandle, now: Duration) -> Option<usize> {
        if self.pending != Some(handle) {
            tracing::trace!(?handle, "ignoring stale refresh");
            return None;
        }
        self.pending = None;
        if self.state != PlaybackState::Running {
            return None;
        }

        let now_ms = now.as_secs_f64() * 1000.0;
        let last = self.last_time_ms.unwrap_or(now_ms);
        self.last_time_ms = Some(now_ms);
        self.accumulated_ms += (now_ms - last).max(0.0);

        let mut advanced = None;
        let interval = self.config.fps.frame_interval_ms();
        if self.accumulated_ms >= interval {
            self.accumulated_ms -= interval;
            advanced = self.advance();
        }

        if self.state == PlaybackState::Running {
            self.pending = Some(self.scheduler.schedule());
        }
        advanced
    }

    fn advance(&mut self) -> Option<usize> {
        let next = self.index + 1;
        if next < self.frame_count {
            self.index = next;
        } else if self.config.looping {
            self.index = 0;
        } else {
            self.state = PlaybackState::Stopped;
            self.reset_timing();
            tracing::trace!(index = self.index, "playback reached the end");
            return None;
        }
        if let Some(cb) = self.on_frame.as_mut() {
            cb(self.index);
        }
        Some(self.index)
    }

    fn enter_running(&mut self) {
        self.state = PlaybackState::Running;
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.schedule());
        }
    }

    fn reset_timing(&mut self) {
        self.accumulated_ms = 0.0;
        self.last_time_ms = None;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Index of the frame to display.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether the clock is advancing.
    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Length of the loaded sequence.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Active configuration.
    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    /// The outstanding refresh request, if any.
    pub fn pending(&self) -> Option<ScheduleHandle> {
        self.pending
    }

    /// Borrow the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutably borrow the scheduler, e.g. to collect due refreshes.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: FrameScheduler> Drop for PlaybackClock<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<S: FrameScheduler + fmt::Debug> fmt::Debug for PlaybackClock<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackClock")
            .field("scheduler", &self.scheduler)
            .field("config", &self.config)
            .field("frame_count", &self.frame_count)
            .field("index", &self.index)
            .field("state", &self.state)
            .field("accumulated_ms", &self.accumulated_ms)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
