//! Hand-angle math.
//!
//! Every function here emits degrees as **negative-going** values: the hands
//! travel counter-clockwise. The reverse movement is the point of the piece,
//! not an artifact — keep the sign.
//!
//! Angles stay in degrees throughout; conversion to radians happens at the
//! paint boundary, not here.

use crate::reading::ClockReading;

/// Hour-hand angle: 30° per hour plus proportional drift from minutes and
/// seconds, negated.
pub fn hour_angle(reading: &ClockReading) -> f64 {
    -(f64::from(reading.hours) * 30.0 + f64::from(reading.minutes) * 0.5 + reading.seconds / 120.0)
}

/// Minute-hand angle: 6° per minute plus proportional drift from seconds,
/// negated.
pub fn minute_angle(reading: &ClockReading) -> f64 {
    -(f64::from(reading.minutes) * 6.0 + reading.seconds * 0.1)
}

/// Continuous seconds-hand angle for smooth motion: 6° per second, negated.
pub fn second_angle_smooth(seconds: f64) -> f64 {
    -(seconds * 6.0)
}

/// Number of discrete seconds-hand steps in one minute at `rate` ticks per
/// second. A zero rate is treated as one.
pub fn total_ticks(rate: u32) -> u32 {
    rate.max(1) * 60
}

/// Span of one tick in milliseconds.
pub fn tick_duration_ms(rate: u32) -> f64 {
    1000.0 / f64::from(rate.max(1))
}

/// Which tick `ms_into_minute` falls in.
pub fn tick_index(ms_into_minute: u32, rate: u32) -> u32 {
    (f64::from(ms_into_minute) / tick_duration_ms(rate)).floor() as u32
}

/// Snapped seconds-hand angle for a tick index, negated. The index wraps at
/// the full minute.
pub fn tick_angle(index: u32, rate: u32) -> f64 {
    let total = total_ticks(rate);
    -(f64::from(index % total) * (360.0 / f64::from(total)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(hours: u8, minutes: u8, seconds: f64) -> ClockReading {
        ClockReading::new(hours, minutes, seconds)
    }

    // ── hour and minute hands ────────────────────────────────────────────────

    #[test]
    fn hour_angle_matches_formula_exactly() {
        for (h, m, s) in [(0u8, 0u8, 0.0f64), (10, 8, 30.5), (11, 59, 59.999), (6, 30, 15.25)] {
            let expect = -(f64::from(h) * 30.0 + f64::from(m) * 0.5 + s / 120.0);
            assert_eq!(hour_angle(&reading(h, m, s)), expect);
        }
    }

    #[test]
    fn minute_angle_matches_formula_exactly() {
        for (h, m, s) in [(0u8, 0u8, 0.0f64), (10, 8, 30.5), (11, 59, 59.999), (3, 45, 1.5)] {
            let expect = -(f64::from(m) * 6.0 + s * 0.1);
            assert_eq!(minute_angle(&reading(h, m, s)), expect);
        }
    }

    #[test]
    fn hands_run_counter_clockwise() {
        // Any nonzero reading must yield a strictly negative angle.
        assert!(hour_angle(&reading(1, 0, 0.0)) < 0.0);
        assert!(minute_angle(&reading(0, 1, 0.0)) < 0.0);
        assert!(second_angle_smooth(1.0) < 0.0);
        // Later instants land counter-clockwise of earlier ones.
        assert!(hour_angle(&reading(3, 0, 0.0)) < hour_angle(&reading(2, 59, 59.0)));
    }

    #[test]
    fn midnight_reads_zero() {
        assert_eq!(hour_angle(&reading(0, 0, 0.0)), 0.0);
        assert_eq!(minute_angle(&reading(0, 0, 0.0)), 0.0);
        assert_eq!(second_angle_smooth(0.0), 0.0);
    }

    // ── smooth seconds hand ──────────────────────────────────────────────────

    #[test]
    fn smooth_second_angle_is_continuous_six_degrees_per_second() {
        assert_eq!(second_angle_smooth(30.5), -183.0);
        assert_eq!(second_angle_smooth(15.0), -90.0);
        assert_eq!(second_angle_smooth(59.999), -(59.999 * 6.0));
    }

    // ── tick math ────────────────────────────────────────────────────────────

    #[test]
    fn tick_counts_per_rate() {
        assert_eq!(total_ticks(1), 60);
        assert_eq!(total_ticks(2), 120);
        assert_eq!(total_ticks(8), 480);
        assert_eq!(tick_duration_ms(1), 1000.0);
        assert_eq!(tick_duration_ms(2), 500.0);
        assert_eq!(tick_duration_ms(8), 125.0);
    }

    #[test]
    fn half_second_ticks_snap_at_boundaries() {
        // 0.6s into the minute sits in the second half-second tick.
        assert_eq!(tick_index(600, 2), 1);
        assert_eq!(tick_angle(1, 2), -3.0);
        // 0.4s is still in the first.
        assert_eq!(tick_index(400, 2), 0);
        assert_eq!(tick_angle(0, 2), 0.0);
    }

    #[test]
    fn tick_index_covers_the_whole_minute() {
        assert_eq!(tick_index(0, 8), 0);
        assert_eq!(tick_index(124, 8), 0);
        assert_eq!(tick_index(125, 8), 1);
        assert_eq!(tick_index(59_999, 8), 479);
        assert_eq!(tick_index(59_999, 1), 59);
    }

    #[test]
    fn tick_angle_wraps_at_the_full_minute() {
        assert_eq!(tick_angle(120, 2), 0.0);
        assert_eq!(tick_angle(121, 2), -3.0);
        assert_eq!(tick_angle(59, 1), -354.0);
    }

    #[test]
    fn zero_rate_behaves_as_one_tick_per_second() {
        assert_eq!(total_ticks(0), 60);
        assert_eq!(tick_duration_ms(0), 1000.0);
        assert_eq!(tick_index(1500, 0), 1);
        assert_eq!(tick_angle(1, 0), -6.0);
    }
}
