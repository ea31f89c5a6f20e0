//! Suspend/resume timer for a single in-flight transition
//!
//! A [`Timeline`] is either idle or running. While running it accumulates the
//! delta time of each scheduling tick until the configured duration is
//! reached. It also owns the completion callback of the current run, so
//! replacing or cancelling a run drops the old callback without calling it.

use crate::effect::CompletionCallback;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running { elapsed: f32 },
}

/// Elapsed-time accumulator with a pending completion callback
pub struct Timeline {
    duration: f32,
    phase: Phase,
    on_complete: Option<CompletionCallback>,
    /// Completed runs (for diagnostics)
    completed_runs: u64,
}

impl Timeline {
    /// Create an idle timeline
    pub fn new(duration: f32) -> Self {
        Self {
            duration: clamp_duration(duration),
            phase: Phase::Idle,
            on_complete: None,
            completed_runs: 0,
        }
    }

    /// Configured duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Set duration, clamping negative (and NaN) values to zero
    pub fn set_duration(&mut self, seconds: f32) {
        self.duration = clamp_duration(seconds);
    }

    /// Check if a run is in flight
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Seconds accumulated by the current run
    pub fn elapsed(&self) -> f32 {
        match self.phase {
            Phase::Running { elapsed } => elapsed,
            Phase::Idle => 0.0,
        }
    }

    /// Number of runs that reached completion
    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    /// Start a new run, returning whether an earlier run was cancelled by it
    pub fn start(&mut self, on_complete: Option<CompletionCallback>) -> bool {
        let cancelled = self.cancel();
        self.on_complete = on_complete;
        self.phase = Phase::Running { elapsed: 0.0 };
        cancelled
    }

    /// Accumulate one tick. Returns the progress in `0.0..=1.0` when running.
    pub fn advance(&mut self, delta_seconds: f32) -> Option<f32> {
        let Phase::Running { elapsed } = &mut self.phase else {
            return None;
        };

        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            *elapsed += delta_seconds;
        }

        if self.duration <= 0.0 {
            Some(1.0)
        } else {
            Some((*elapsed / self.duration).min(1.0))
        }
    }

    /// Check if the current run has used up its duration
    pub fn is_elapsed(&self) -> bool {
        match self.phase {
            Phase::Running { elapsed } => elapsed >= self.duration,
            Phase::Idle => false,
        }
    }

    /// End the current run and hand back its callback for the caller to invoke
    pub fn finish(&mut self) -> Option<CompletionCallback> {
        if !self.is_running() {
            return None;
        }
        self.phase = Phase::Idle;
        self.completed_runs += 1;
        self.on_complete.take()
    }

    /// Abort the current run. Its callback is dropped, never invoked.
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = Phase::Idle;
        if self.on_complete.take().is_some() {
            log::debug!("Transition cancelled, completion callback discarded");
        }
        true
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("duration", &self.duration)
            .field("phase", &self.phase)
            .field("has_callback", &self.on_complete.is_some())
            .field("completed_runs", &self.completed_runs)
            .finish()
    }
}

fn clamp_duration(seconds: f32) -> f32 {
    if seconds.is_nan() {
        0.0
    } else {
        seconds.max(0.0)
    }
}
