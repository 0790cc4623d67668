use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid Font Size.")]
    InvalidFontSize,
    #[error("Invalid Date.")]
    InvalidDate,
    #[error("You must enter an integer.")]
    InvalidInteger,
}

pub const END_TIME_DISPLAY_FORMAT: &str = "%b %-d, %Y %-I:%M:%S %p";

const END_TIME_PARSE_FORMATS: [&str; 4] = [
    "%b %d, %Y %I:%M:%S %p",
    "%b %d, %Y, %I:%M:%S %p",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

pub fn parse_font_size(input: &str) -> Result<f32, InputError> {
    let size: f32 = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidFontSize)?;
    if !size.is_finite() || size <= 0.0 {
        return Err(InputError::InvalidFontSize);
    }
    Ok(size)
}

pub fn parse_timer_seconds(input: &str) -> Result<i32, InputError> {
    input.parse().map_err(|_| InputError::InvalidInteger)
}

pub fn format_end_time<Tz>(now: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.with_timezone(zone)
        .format(END_TIME_DISPLAY_FORMAT)
        .to_string()
}

// Times skipped by a DST jump are rejected, repeated ones take the earlier instant.
pub fn parse_end_time<Tz: TimeZone>(input: &str, zone: &Tz) -> Result<DateTime<Utc>, InputError> {
    let trimmed = input.trim();
    let naive = END_TIME_PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or(InputError::InvalidDate)?;
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(InputError::InvalidDate)
}
