//! Wall-clock sampling.
//!
//! Responsibilities:
//! - decompose the current local instant into a 12-hour [`ClockReading`]
//! - carry the calendar fields the date label needs ([`LocalSample`])
//! - keep seconds fractional so smooth animation has sub-second resolution

use chrono::{DateTime, Datelike, Local, Timelike};

/// Month abbreviations for the date label, January first.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A 12-hour clock reading with fractional seconds.
///
/// Ephemeral: recomputed on every animation step, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    /// 0..=11; noon and midnight both read 0.
    pub hours:   u8,
    /// 0..=59.
    pub minutes: u8,
    /// 0.0..60.0, fractional.
    pub seconds: f64,
}

impl ClockReading {
    pub fn new(hours: u8, minutes: u8, seconds: f64) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Whole milliseconds elapsed since the top of the current minute.
    pub fn millis_into_minute(&self) -> u32 {
        (self.seconds * 1000.0).floor() as u32
    }
}

/// A clock reading plus the calendar fields for the one-time date label.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSample {
    pub reading: ClockReading,
    /// Zero-based month, 0..=11.
    pub month0:  usize,
    /// Day of month, 1..=31.
    pub day:     u32,
}

impl LocalSample {
    /// Sample the host's local wall clock.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    fn from_datetime(now: DateTime<Local>) -> Self {
        // Chrono represents a leap second as nanosecond >= 1e9; clamp so
        // `seconds` stays below 60.
        let nanos = now.nanosecond().min(999_999_999);
        let seconds = f64::from(now.second()) + f64::from(nanos) / 1e9;
        Self {
            reading: ClockReading::new((now.hour() % 12) as u8, now.minute() as u8, seconds),
            month0:  now.month0() as usize,
            day:     now.day(),
        }
    }

    /// Build a sample from explicit parts. Hosts and tests use this to feed
    /// the animator a fixed instant.
    pub fn from_parts(hours: u8, minutes: u8, seconds: f64, month0: usize, day: u32) -> Self {
        Self { reading: ClockReading::new(hours, minutes, seconds), month0, day }
    }

    /// Date label text, month abbreviation then day: `"Aug 25"`.
    ///
    /// An out-of-range month renders as an empty abbreviation rather than
    /// failing; no caller produces one.
    pub fn date_text(&self) -> String {
        let month = MONTHS.get(self.month0).copied().unwrap_or("");
        format!("{month} {day}", day = self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── millis into minute ───────────────────────────────────────────────────

    #[test]
    fn millis_into_minute_floors_fractional_seconds() {
        assert_eq!(ClockReading::new(0, 0, 0.0).millis_into_minute(), 0);
        assert_eq!(ClockReading::new(3, 15, 30.5).millis_into_minute(), 30_500);
        assert_eq!(ClockReading::new(0, 59, 59.9994).millis_into_minute(), 59_999);
    }

    #[test]
    fn millis_into_minute_ignores_hours_and_minutes() {
        let a = ClockReading::new(0, 0, 12.25).millis_into_minute();
        let b = ClockReading::new(11, 59, 12.25).millis_into_minute();
        assert_eq!(a, b);
        assert_eq!(a, 12_250);
    }

    // ── date label ───────────────────────────────────────────────────────────

    #[test]
    fn date_text_uses_month_abbreviation() {
        let sample = LocalSample::from_parts(10, 8, 30.5, 7, 25);
        assert_eq!(sample.date_text(), "Aug 25");
        let sample = LocalSample::from_parts(0, 0, 0.0, 0, 1);
        assert_eq!(sample.date_text(), "Jan 1");
        let sample = LocalSample::from_parts(0, 0, 0.0, 11, 31);
        assert_eq!(sample.date_text(), "Dec 31");
    }

    // ── live sampling ────────────────────────────────────────────────────────

    #[test]
    fn now_stays_in_range() {
        let sample = LocalSample::now();
        assert!(sample.reading.hours < 12);
        assert!(sample.reading.minutes < 60);
        assert!(sample.reading.seconds >= 0.0 && sample.reading.seconds < 60.0);
        assert!(sample.month0 < 12);
        assert!((1..=31).contains(&sample.day));
    }
}
