//! Windowed runtime for the widdershins clock.
//!
//! The engine owns everything between the OS and the app: the winit event
//! loop, the wgpu device and surface, frame pacing, pointer input, and a
//! small retained draw list that the instanced shape renderers consume.
//!
//! Layering, bottom to top:
//!
//! | module    | provides                                              |
//! |-----------|-------------------------------------------------------|
//! | `coords`  | logical-pixel [`Vec2`], [`Rect`], [`Viewport`]        |
//! | `paint`   | premultiplied [`Color`], gradients, [`Paint`]         |
//! | `scene`   | [`DrawList`] of circle / spoke / text commands        |
//! | `text`    | fontdue-backed [`Fonts`] store and text measurement   |
//! | `render`  | wgpu renderers that draw a [`DrawList`] to a surface  |
//! | `device`  | surface + device bring-up ([`Gpu`])                   |
//! | `input`   | [`Pointer`] position and primary-click edges          |
//! | `time`    | [`FrameClock`] delta timing                           |
//! | `window`  | the winit event loop driving an [`App`]               |
//! | `core`    | the [`App`] trait and per-frame [`FrameCtx`]          |
//! | `logging` | env_logger bootstrap                                  |
//!
//! An application implements [`App`], hands it to [`window::run`], and does
//! all of its drawing by pushing commands into the [`DrawList`] it owns.
//! Timer-driven apps additionally implement [`App::next_wake`] /
//! [`App::on_wake`] to be called back between frames.

pub mod core;
pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;

pub use crate::core::{App, AppControl, FrameCtx, WindowCtx};
pub use crate::coords::{Rect, Vec2, Viewport};
pub use crate::device::Gpu;
pub use crate::input::Pointer;
pub use crate::paint::{Color, LinearGradient, Paint};
pub use crate::render::shapes::circle::CircleRenderer;
pub use crate::render::shapes::spoke::SpokeRenderer;
pub use crate::render::shapes::text::TextRenderer;
pub use crate::render::{RenderCtx, RenderTarget};
pub use crate::scene::shapes::Border;
pub use crate::scene::{DrawList, ZIndex};
pub use crate::text::{FontId, Fonts};
pub use crate::time::{FrameClock, FrameTime};
pub use crate::window::{CursorIcon, RuntimeConfig};
