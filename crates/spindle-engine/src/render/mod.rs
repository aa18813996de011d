//! Renderers.
//!
//! Two pipelines cover the whole demo:
//! - [`MeshRenderer`] draws uploaded triangle meshes through a 3×3 transform
//!   uniform (the shapes).
//! - [`QuadRenderer`] draws instanced solid-color rectangles (the panel).

mod ctx;
mod mesh;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{GpuMesh, MeshDraw, MeshRenderer};
pub use quad::{Quad, QuadRenderer};
