//! Spindle engine crate.
//!
//! 2D affine-transform playground runtime: matrix/transform math, fan-mesh
//! generation, and the wgpu + winit plumbing that draws the result each frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod transform;
pub mod shape;
pub mod render;
