//! State management module
//! 
//! This module contains the countdown state machine, the duration field
//! parsing and the application state the render loop works on.

pub mod app_state;
pub mod countdown;
pub mod duration_input;

// Re-export main types
pub use app_state::{AppState, TimerView};
pub use countdown::{CountdownTimer, Phase, Progress, Wake};
pub use duration_input::{
    format_remaining, parse_duration, parse_duration_or_zero, DurationParseError, InputPolicy,
};
