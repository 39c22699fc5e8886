use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the app crate.
///
/// Two independent schedules drive an app:
///
/// - **Frames.** [`on_frame`](Self::on_frame) runs once per redraw, paced by
///   the compositor. The smooth second hand lives here.
/// - **Timer wakes.** [`next_wake`](Self::next_wake) /
///   [`on_wake`](Self::on_wake) run on wall-clock deadlines, independent of
///   redraw delivery. Tick-mode polling lives here, so an occluded or
///   minimized window still snaps its second hand on time.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Earliest instant the app wants [`on_wake`](Self::on_wake) called.
    ///
    /// Polled after every batch of events; returning `None` leaves the loop
    /// waiting on events alone.
    fn next_wake(&mut self) -> Option<Instant> {
        None
    }

    /// Timer callback, invoked when the deadline from
    /// [`next_wake`](Self::next_wake) is reached.
    fn on_wake(&mut self, now: Instant) -> AppControl {
        let _ = now;
        AppControl::Continue
    }
}
