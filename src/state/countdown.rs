//! Countdown timer state and progress queries

use std::time::{Duration, Instant};

/// Phase of the countdown as observed at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No duration configured (never started, or stopped)
    Idle,
    /// Started and not yet elapsed
    Running,
    /// Started with a non-zero duration which has fully elapsed
    Finished,
}

/// Request for the presentation layer to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// Redraw on the next frame
    Now,
    /// Redraw no later than the given instant
    At(Instant),
}

/// Result of a progress query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub active: bool,
    pub fraction: f32,
}

impl Progress {
    /// Progress reported whenever the countdown is not running
    pub const INACTIVE: Progress = Progress { active: false, fraction: 0.0 };
}

/// A single countdown, described by when it started and how long it lasts.
///
/// Nothing is accumulated between queries: every derived value is computed
/// from the instant passed in, so stopping needs no cancellation.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    start: Instant,
    duration: Duration,
}

impl CountdownTimer {
    /// Create an idle countdown
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            duration: Duration::ZERO,
        }
    }

    /// Start (or restart) the countdown at `now`
    pub fn start(&mut self, now: Instant, duration: Duration) -> Wake {
        self.start = now;
        self.duration = duration;
        Wake::Now
    }

    /// Drop whatever time is left
    pub fn stop(&mut self) {
        self.duration = Duration::ZERO;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant at which the countdown completes.
    ///
    /// `None` when no duration is configured, or when the end lies beyond
    /// what `Instant` can represent and so never arrives.
    pub fn deadline(&self) -> Option<Instant> {
        if self.duration.is_zero() {
            None
        } else {
            self.start.checked_add(self.duration)
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.start.checked_add(self.duration) {
            Some(end) => now < end,
            None => true,
        }
    }

    /// Whether the countdown is running and how far through it `now` is
    pub fn progress(&self, now: Instant) -> Progress {
        if !self.is_active(now) {
            return Progress::INACTIVE;
        }
        let elapsed = now.saturating_duration_since(self.start);
        Progress {
            active: true,
            fraction: elapsed.as_secs_f32() / self.duration.as_secs_f32(),
        }
    }

    pub fn phase(&self, now: Instant) -> Phase {
        if self.duration.is_zero() {
            Phase::Idle
        } else if self.is_active(now) {
            Phase::Running
        } else {
            Phase::Finished
        }
    }

    /// Time left before completion, zero unless running
    pub fn remaining(&self, now: Instant) -> Duration {
        if !self.is_active(now) {
            return Duration::ZERO;
        }
        self.duration.saturating_sub(now.saturating_duration_since(self.start))
    }

    /// When the caller should evaluate the countdown again.
    ///
    /// While running this is one frame from `now`, clamped to the deadline so
    /// the completing frame is never skipped. Otherwise nothing is pending.
    pub fn next_wake(&self, now: Instant, frame_interval: Duration) -> Option<Instant> {
        if !self.is_active(now) {
            return None;
        }
        let next = now.checked_add(frame_interval).unwrap_or(now);
        Some(match self.deadline() {
            Some(deadline) => next.min(deadline),
            None => next,
        })
    }
}
