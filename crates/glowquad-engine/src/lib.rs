//! Glowquad engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo binary: window
//! runtime, device/surface management, the quad render pipeline, and the
//! scene math that feeds it.

pub mod core;
pub mod device;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

pub mod logging;
