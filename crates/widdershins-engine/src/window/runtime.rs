use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Vec2;
use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::Gpu;
use crate::input::Pointer;
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// A clock face has a fixed layout; apps that want one set this false.
    pub resizable: bool,
}

/// Runtime handle passed to the application.
///
/// Requests are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    exit_requested: bool,
}

impl RuntimeCtx {
    /// Requests that the event loop exit once the callback returns.
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }
}

/// Builds the event loop and drives `app` until it exits.
///
/// The loop mixes two control flows:
/// - redraws are requested continuously, so every presented frame re-samples
///   the wall clock (the smooth sweep needs nothing more);
/// - between events the loop parks in `WaitUntil` the app's next timer
///   deadline, so tick-mode polling fires on time even when the compositor
///   throttles redraws.
pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
where
    A: App + 'static,
{
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

    let mut driver = Driver {
        config,
        app,
        shell: None,
        exiting: false,
    };

    event_loop
        .run_app(&mut driver)
        .context("winit event loop terminated with error")?;

    Ok(())
}

/// Everything hanging off the one window, including the GPU surface that
/// borrows it. `ouroboros` keeps the window and its borrower in one value.
#[self_referencing]
struct Shell {
    pointer: Pointer,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Driver<A: App + 'static> {
    config: RuntimeConfig,
    app: A,

    shell: Option<Shell>,
    exiting: bool,
}

impl<A: App + 'static> Driver<A> {
    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let shell = ShellTryBuilder {
            pointer: Pointer::default(),
            clock: FrameClock::start(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        log::debug!("window opened");
        self.shell = Some(shell);
        Ok(())
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exiting = true;
        event_loop.exit();
    }

    fn redraw(&self) {
        if let Some(shell) = self.shell.as_ref() {
            shell.with_window(|w| w.request_redraw());
        }
    }

    /// One frame: tick the frame clock, hand the app a [`FrameCtx`], then
    /// drop the pointer's click edge now that the app has seen it.
    ///
    /// Returns true when the app asked to exit.
    fn run_frame(&mut self, window_id: WindowId) -> bool {
        let Some(shell) = self.shell.as_mut() else {
            return false;
        };
        let app = &mut self.app;

        let mut runtime_ctx = RuntimeCtx::default();
        let mut control = AppControl::Continue;

        shell.with_mut(|fields| {
            let time = fields.clock.tick();

            control = app.on_frame(&mut FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                pointer: fields.pointer,
                time,
                runtime: &mut runtime_ctx,
            });

            fields.pointer.end_frame();
        });

        control == AppControl::Exit || runtime_ctx.exit_requested
    }
}

impl<A: App + 'static> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Some platforms deliver `resumed` again after a suspend; the
        // window is opened once.
        if self.shell.is_some() {
            return;
        }

        match self.open_window(event_loop) {
            Ok(()) => self.redraw(),
            Err(e) => {
                log::error!("failed to open window: {e:#}");
                self.request_exit(event_loop);
            }
        }
    }

    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        // A `WaitUntil` deadline from `about_to_wait` fired.
        if let StartCause::ResumeTimeReached { .. } = cause {
            if self.app.on_wake(Instant::now()) == AppControl::Exit {
                self.request_exit(event_loop);
            } else {
                // The wake may have snapped a hand; repaint promptly.
                self.redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(match self.app.next_wake() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        });

        // Continuous redraw; presentation pacing comes from the compositor.
        self.redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exiting {
            event_loop.exit();
            return;
        }

        // Split borrows so the ouroboros closure does not capture `self`.
        let app = &mut self.app;
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        if !shell.with_window(|w| w.id() == window_id) {
            return;
        }

        let mut app_exit = false;
        shell.with_mut(|fields| {
            feed_pointer(fields.pointer, fields.window, &event);
            app_exit = app.on_window_event(window_id, &event) == AppControl::Exit;
        });
        if app_exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                // One window; closing it ends the app.
                self.shell = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(shell) = self.shell.as_mut() {
                    shell.with_gpu_mut(|gpu| gpu.resize(size));
                }
                self.redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(shell) = self.shell.as_mut() {
                    let size = shell.with_window(|w| w.inner_size());
                    shell.with_gpu_mut(|gpu| gpu.resize(size));
                }
                self.redraw();
            }

            WindowEvent::RedrawRequested => {
                if self.run_frame(window_id) {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

/// Routes the window events the pointer cares about; drops the rest.
fn feed_pointer(pointer: &mut Pointer, window: &Window, event: &WindowEvent) {
    match event {
        WindowEvent::Focused(f) => pointer.focus_changed(*f),

        WindowEvent::CursorLeft { .. } => pointer.left_window(),

        WindowEvent::CursorMoved { position, .. } => {
            let pos = position.to_logical::<f64>(window.scale_factor());
            pointer.moved_to(Vec2::new(pos.x as f32, pos.y as f32));
        }

        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => {
            pointer.primary_changed(*state == ElementState::Pressed);
        }

        _ => {}
    }
}
