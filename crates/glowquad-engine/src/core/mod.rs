//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! application: a setup hook that runs before the first frame and a
//! per-frame callback with a ready-to-use render context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, ReadyCtx, WindowCtx};
