//! Main application state management

use std::time::{Duration, Instant};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use super::{
    duration_input::{format_remaining, parse_duration, InputPolicy},
    CountdownTimer, Phase, Wake,
};

/// Everything the render loop needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
    pub phase: Phase,
    /// How boiled the egg is, from 0.0 to 1.0
    pub fraction: f32,
    pub button_label: &'static str,
    /// Extra line shown under the progress bar
    pub status: Option<&'static str>,
}

/// Application state owned by the render loop for the whole run
#[derive(Debug)]
pub struct AppState {
    /// The countdown being boiled
    pub countdown: CountdownTimer,
    /// Contents of the duration text field
    pub input: String,
    /// How invalid field contents are treated on start
    pub policy: InputPolicy,
    /// Last refusal shown next to the field
    pub input_error: Option<String>,
    /// Wall-clock finish time of the current countdown, for logging
    pub finishes_at: Option<DateTime<Local>>,
    finish_reported: bool,
}

impl AppState {
    /// Create an idle application state
    pub fn new(now: Instant, input: impl Into<String>, policy: InputPolicy) -> Self {
        Self {
            countdown: CountdownTimer::new(now),
            input: input.into(),
            policy,
            input_error: None,
            finishes_at: None,
            finish_reported: false,
        }
    }

    /// Handle the start/stop button.
    ///
    /// Returns the redraw request produced by a successful start.
    pub fn toggle(&mut self, now: Instant) -> Option<Wake> {
        if self.countdown.is_active(now) {
            info!(
                "Countdown stopped with {} s left",
                format_remaining(self.countdown.remaining(now))
            );
            self.countdown.stop();
            self.finishes_at = None;
            return None;
        }

        let duration = match parse_duration(&self.input) {
            Ok(duration) => duration,
            Err(e) => match self.policy {
                InputPolicy::Reject => {
                    warn!("Refusing to start countdown: {}", e);
                    self.input_error = Some(e.to_string());
                    return None;
                }
                InputPolicy::Zero => {
                    debug!("Invalid duration ({}), starting a zero-length countdown", e);
                    Duration::ZERO
                }
            },
        };

        Some(self.start(now, duration))
    }

    fn start(&mut self, now: Instant, duration: Duration) -> Wake {
        self.input_error = None;
        self.finish_reported = false;
        self.finishes_at = chrono::Duration::from_std(duration)
            .ok()
            .and_then(|d| Local::now().checked_add_signed(d));

        match self.finishes_at {
            Some(at) => info!(
                "Countdown started for {:.1} s, done at {}",
                duration.as_secs_f64(),
                at.format("%H:%M:%S")
            ),
            None => info!("Countdown started for {:.1} s", duration.as_secs_f64()),
        }

        self.countdown.start(now, duration)
    }

    /// Show the remaining seconds in the field while the countdown runs
    pub fn sync_input(&mut self, now: Instant) {
        if self.countdown.is_active(now) {
            self.input = format_remaining(self.countdown.remaining(now));
        }
    }

    /// Handle completion the first time it is observed.
    ///
    /// The field is refilled with the full duration so another press of the
    /// button boils the next egg for the same time.
    pub fn observe(&mut self, now: Instant) {
        if self.countdown.phase(now) == Phase::Finished && !self.finish_reported {
            self.finish_reported = true;
            self.input = format_remaining(self.countdown.duration());
            info!("Countdown finished, egg is ready");
        }
    }

    /// Derive what the frame at `now` should show
    pub fn view(&self, now: Instant) -> TimerView {
        let phase = self.countdown.phase(now);
        let (fraction, button_label, status) = match phase {
            Phase::Idle => (0.0, "Start", None),
            Phase::Running => (self.countdown.progress(now).fraction, "Stop", None),
            Phase::Finished => (1.0, "Start", Some("Finished")),
        };

        TimerView {
            phase,
            fraction,
            button_label,
            status,
        }
    }

    /// When the next frame is needed, if at all
    pub fn next_wake(&self, now: Instant, frame_interval: Duration) -> Option<Wake> {
        self.countdown.next_wake(now, frame_interval).map(Wake::At)
    }
}
