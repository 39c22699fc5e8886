use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// wgpu device, queue, and the window surface they draw into.
///
/// Swapchain policy is fixed rather than configurable: FIFO presentation,
/// because the display's refresh is exactly the pacing the sweep hand wants,
/// and an sRGB surface format when the platform offers one, because the
/// palette is authored in sRGB.
///
/// The surface borrows the window for `'w`. The runtime's window entry owns
/// both and keeps the window alive for as long as the `Gpu` exists.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    /// Drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

/// One in-flight frame: the acquired surface texture, a view onto it, and
/// the encoder the frame's passes record into.
///
/// Hand it back to [`Gpu::present`] promptly; the swapchain refuses further
/// acquisitions while a texture is outstanding.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Why [`Gpu::acquire`] produced no frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AcquireError {
    /// The swapchain hiccuped (lost, outdated, or timed out). Any needed
    /// reconfiguration has already run; skip this frame and try the next.
    Transient,
    /// The device is out of memory.
    OutOfMemory,
}

impl<'w> Gpu<'w> {
    /// Creates the device/queue pair and configures the window surface.
    pub async fn new(window: &'w Window) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // `'w` ties the surface to the window borrow.
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter")?;

        log::info!("gpu adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("widdershins-engine device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&caps).context("surface reports no formats")?;
        log::debug!("surface format: {format:?}");

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Gpu {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Applies a new drawable size.
    ///
    /// A 0x0 surface cannot be configured, so a minimized size is only
    /// recorded; the next non-zero resize (or surface-lost recovery)
    /// reconfigures for real.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next surface texture and opens an encoder for the frame.
    ///
    /// Swapchain recovery lives here too: a lost or outdated surface is
    /// reconfigured on the spot, and the caller sees only "no frame this
    /// time" or "out of memory".
    pub fn acquire(&mut self) -> std::result::Result<GpuFrame, AcquireError> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => return Err(self.recover(err)),
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("widdershins frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the frame's commands, then presents the texture.
    ///
    /// Present must come after the submit; a surface texture dropped without
    /// `present()` returns to the swapchain with the frame discarded.
    pub fn present(&self, frame: GpuFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        frame.surface_texture.present();
    }

    fn recover(&mut self, err: SurfaceError) -> AcquireError {
        match err {
            // Resizes and compositor restarts land here; reconfiguring with
            // the current size recovers.
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                AcquireError::Transient
            }
            SurfaceError::Timeout | SurfaceError::Other => AcquireError::Transient,
            SurfaceError::OutOfMemory => AcquireError::OutOfMemory,
        }
    }
}

/// First sRGB format the surface supports, else whatever it lists first.
fn pick_surface_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    caps.formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
}
