//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::state::InputPolicy;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "egg-timer")]
#[command(about = "A desktop egg timer with a countdown, progress bar and boiling egg")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Seconds pre-filled into the duration field
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value = "400")]
    pub width: f32,

    /// Window height in logical pixels
    #[arg(long, default_value = "600")]
    pub height: f32,

    /// Redraws per second while a countdown runs
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// What to do when the duration field holds no valid number
    #[arg(long, value_enum, default_value_t = InputPolicy::Reject)]
    pub on_invalid: InputPolicy,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Text the duration field starts with
    pub fn initial_input(&self) -> &str {
        self.duration.as_deref().unwrap_or_default()
    }

    /// Time between redraws of a running countdown
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_timer() {
        let config = Config::try_parse_from(["egg-timer"]).unwrap();
        assert_eq!(config.duration, None);
        assert_eq!(config.width, 400.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.frame_interval(), Duration::from_millis(40));
        assert_eq!(config.on_invalid, InputPolicy::Reject);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "egg-timer", "-d", "180", "--fps", "50", "--on-invalid", "zero", "-v",
        ])
        .unwrap();
        assert_eq!(config.duration.as_deref(), Some("180"));
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
        assert_eq!(config.on_invalid, InputPolicy::Zero);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(Config::try_parse_from(["egg-timer", "--fps", "0"]).is_err());
    }
}
