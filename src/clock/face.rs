use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FaceColor {
    Clock,
    CountDown,
    CountUp,
}

impl FaceColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            FaceColor::Clock => [0xFF, 0xFF, 0xFF],
            FaceColor::CountDown => [0x00, 0xFF, 0x00],
            FaceColor::CountUp => [0x00, 0x00, 0xFF],
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Face {
    pub text: String,
    pub color: FaceColor,
}

pub fn compute_face<Tz>(target: Option<DateTime<Utc>>, now: DateTime<Utc>, zone: &Tz) -> Face
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(target) = target else {
        return Face {
            text: now.with_timezone(zone).format("%I:%M:%S").to_string(),
            color: FaceColor::Clock,
        };
    };

    let diff_ms = target.timestamp_millis() - now.timestamp_millis();
    let (span_ms, color) = if diff_ms > 0 {
        (diff_ms, FaceColor::CountDown)
    } else {
        (-diff_ms, FaceColor::CountUp)
    };
    Face {
        text: format_span_hms(span_ms),
        color,
    }
}

// Spans of a day or more wrap in the hour field.
pub fn format_span_hms(span_ms: i64) -> String {
    let day_secs = span_ms
        .div_euclid(MILLIS_PER_SECOND)
        .rem_euclid(SECONDS_PER_DAY);
    let hours = day_secs / 3_600;
    let minutes = (day_secs % 3_600) / 60;
    let seconds = day_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
