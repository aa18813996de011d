//! 2D affine transforms as 3×3 homogeneous matrices.
//!
//! Responsibilities:
//! - closed-form matrix constructors (identity, translation, rotation, scale)
//! - matrix multiplication with right-to-left application order
//! - live per-shape transform state and the pivot composition rule

mod mat3;
mod state;

pub use mat3::Mat3;
pub use state::Transform;
