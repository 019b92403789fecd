//! Egg Timer - A single-screen desktop countdown with a boiling egg
//! 
//! This library provides the countdown state machine, the parsing of the
//! duration field and the eframe window that draws them.

pub mod config;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, CountdownTimer, Phase, Progress, Wake};
pub use ui::EggTimerApp;
