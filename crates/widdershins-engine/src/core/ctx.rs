use winit::window::{CursorIcon, Window, WindowId};

use crate::coords::Viewport;
use crate::device::{AcquireError, Gpu, GpuFrame};
use crate::input::Pointer;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle and metadata for the current frame.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let size: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (size.width as f32, size.height as f32)
    }

    /// Sets the mouse cursor shape.
    ///
    /// Call each frame to keep the cursor updated (`Default` normally,
    /// `Pointer` over the theme toggle).
    pub fn set_cursor(&self, cursor: CursorIcon) {
        self.window.set_cursor(cursor);
    }
}

/// Per-frame context passed to [`App::on_frame`](crate::core::App::on_frame).
///
/// Lifetimes: `'a` is the callback invocation, `'w` the window borrow
/// carried by [`Gpu<'w>`].
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub pointer: &'a Pointer,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface to `clear`, calls `draw` with a ready
    /// [`RenderCtx`] and [`RenderTarget`], then submits and presents.
    ///
    /// Surface errors are absorbed here: transient ones skip the frame,
    /// and only out-of-memory exits.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(AcquireError::Transient) => return AppControl::Continue,
            Err(AcquireError::OutOfMemory) => {
                log::error!("gpu out of memory, shutting down");
                return AppControl::Exit;
            }
        };

        clear_surface(&mut frame, clear);

        let (w, h) = self.window.logical_size();
        let rctx = RenderCtx {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
            viewport: Viewport::new(w, h),
            scale_factor: self.window.window.scale_factor() as f32,
        };

        // RenderTarget borrows frame.encoder; dropped before submit() takes
        // the frame.
        {
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);

        AppControl::Continue
    }
}

/// A bare pass that clears the frame; the shape renderers all load.
fn clear_surface(frame: &mut GpuFrame, clear: Color) {
    let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("widdershins clear"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: &frame.view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color {
                    r: clear.r as f64,
                    g: clear.g as f64,
                    b: clear.b as f64,
                    a: clear.a as f64,
                }),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}
