//! GPU device layer: wgpu instance/adapter/device/queue and the window surface.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
