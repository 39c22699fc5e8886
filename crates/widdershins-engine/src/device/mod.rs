//! GPU device and surface management: device/queue setup, swapchain
//! configuration, and per-frame texture acquisition.

pub mod gpu;

pub use gpu::{AcquireError, Gpu, GpuFrame};
