//! Frame timing utilities.
//!
//! The render loop is unlocked, so the clock is only used for frame counting
//! and FPS reporting. Animation does not read it; it advances by fixed
//! per-frame steps.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
