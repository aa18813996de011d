//! Shape meshes: fan-triangulated discs and the composed face.
//!
//! Meshes are built once at startup, kept immutable, and uploaded once to the
//! GPU by the renderer.

mod face;
mod fan;
mod mesh;

pub use face::face;
pub use fan::{fan, fan_random};
pub use mesh::Mesh;
