//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, and wires them to the
//! GPU layer and the timer-wake schedule.

pub mod runtime;

pub use runtime::{run, RuntimeConfig, RuntimeCtx};
pub use winit::window::CursorIcon;
