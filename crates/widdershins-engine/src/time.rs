//! Frame timing.
//!
//! One [`FrameClock`] lives in the window shell; `tick()` runs once per
//! presented frame and the resulting [`FrameTime`] rides on the frame
//! context.

use std::time::{Duration, Instant};

/// Floor keeps back-to-back ticks from reporting zero.
const DT_MIN: Duration = Duration::from_micros(100);
/// Ceiling bounds the delta after a stall or suspend.
const DT_MAX: Duration = Duration::from_millis(250);

/// Per-frame timing snapshot handed to the app.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped to `[0.1ms, 250ms]`.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Frames ticked since the window opened.
    pub frame_index: u64,
}

/// Monotonic frame timer.
///
/// The clock face takes its angles from wall time, not from `dt`, so the
/// clamps serve dt-derived smoothing and diagnostics: a window coming back
/// from minimized or a debugger stall reports a bounded delta instead of a
/// quarter-hour one.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn start() -> Self {
        Self { last: Instant::now(), frames: 0 }
    }

    /// Advances the clock; call once per presented frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(DT_MIN, DT_MAX);
        self.last = now;

        let snapshot = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frames,
        };
        self.frames = self.frames.wrapping_add(1);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_is_monotonic() {
        let mut clock = FrameClock::start();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }

    #[test]
    fn back_to_back_ticks_report_the_floor() {
        let mut clock = FrameClock::start();
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt >= DT_MIN.as_secs_f32());
    }

    #[test]
    fn a_stall_reports_a_bounded_delta() {
        let mut clock = FrameClock::start();
        clock.tick();
        std::thread::sleep(Duration::from_millis(300));
        let ft = clock.tick();
        assert!(ft.dt <= DT_MAX.as_secs_f32() + 1e-6);
    }
}
