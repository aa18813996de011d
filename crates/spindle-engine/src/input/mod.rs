//! Pointer input.
//!
//! The demo's only input consumer is the slider panel, so this layer tracks
//! just the pointer: position, primary-button held state, and per-frame
//! press/release edges.

mod pointer;

pub use pointer::PointerInput;
