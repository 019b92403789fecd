//! Parsing of the free-form duration text field

use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

/// Reasons a duration text can be refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationParseError {
    #[error("enter a number of seconds")]
    Empty,
    #[error("'{0}' is not a number of seconds")]
    NotANumber(String),
    #[error("duration cannot be negative ({0})")]
    Negative(f64),
    #[error("duration {0} is out of range")]
    OutOfRange(f64),
}

/// Longest countdown the field accepts, one day
pub const MAX_DURATION_SECS: u64 = 24 * 60 * 60;

/// What to do when the field does not hold a valid duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputPolicy {
    /// Refuse to start and show the error next to the field
    #[default]
    Reject,
    /// Start a zero-length countdown, which finishes immediately
    Zero,
}

/// Parse a number of seconds, surrounding whitespace ignored.
///
/// Fractions are accepted in the text but truncated to whole seconds.
pub fn parse_duration(text: &str) -> Result<Duration, DurationParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let seconds: f64 = trimmed
        .parse()
        .map_err(|_| DurationParseError::NotANumber(trimmed.to_string()))?;

    if seconds.is_nan() || seconds > MAX_DURATION_SECS as f64 {
        return Err(DurationParseError::OutOfRange(seconds));
    }
    if seconds < 0.0 {
        return Err(DurationParseError::Negative(seconds));
    }

    Ok(Duration::from_secs(seconds.trunc() as u64))
}

/// Parse a duration, treating anything invalid as zero seconds
pub fn parse_duration_or_zero(text: &str) -> Duration {
    parse_duration(text).unwrap_or(Duration::ZERO)
}

/// Seconds left, rounded to one decimal
pub fn format_remaining(remaining: Duration) -> String {
    let tenths = (remaining.as_secs_f64() * 10.0).round() / 10.0;
    format!("{:.1}", tenths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_seconds_and_truncates_fractions() {
        assert_eq!(parse_duration("10"), Ok(Duration::from_secs(10)));
        assert_eq!(parse_duration("  2.5 \n"), Ok(Duration::from_secs(2)));
        assert_eq!(parse_duration("4.3"), Ok(Duration::from_secs(4)));
        assert_eq!(parse_duration("0.9"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn accepts_up_to_one_day() {
        assert_eq!(parse_duration("86400"), Ok(Duration::from_secs(MAX_DURATION_SECS)));
        assert_eq!(parse_duration("86401"), Err(DurationParseError::OutOfRange(86401.0)));
        assert_eq!(parse_duration("1e19"), Err(DurationParseError::OutOfRange(1e19)));
        assert_eq!(parse_duration_or_zero("1e19"), Duration::ZERO);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));
        assert_eq!(parse_duration("   "), Err(DurationParseError::Empty));
        assert_eq!(
            parse_duration("abc"),
            Err(DurationParseError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_duration("-3"), Err(DurationParseError::Negative(-3.0)));
        assert!(matches!(parse_duration("inf"), Err(DurationParseError::OutOfRange(_))));
        assert!(matches!(parse_duration("NaN"), Err(DurationParseError::OutOfRange(_))));
        assert!(matches!(parse_duration("1e300"), Err(DurationParseError::OutOfRange(_))));
    }

    #[test]
    fn invalid_text_falls_back_to_zero() {
        assert_eq!(parse_duration_or_zero("abc"), Duration::ZERO);
        assert_eq!(parse_duration_or_zero(""), Duration::ZERO);
        assert_eq!(parse_duration_or_zero("7"), Duration::from_secs(7));
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            parse_duration("soon").unwrap_err().to_string(),
            "'soon' is not a number of seconds"
        );
    }

    #[test]
    fn remaining_is_rounded_to_tenths() {
        assert_eq!(format_remaining(Duration::from_millis(4349)), "4.3");
        assert_eq!(format_remaining(Duration::from_millis(4360)), "4.4");
        assert_eq!(format_remaining(Duration::from_secs(10)), "10.0");
        assert_eq!(format_remaining(Duration::ZERO), "0.0");
    }
}
