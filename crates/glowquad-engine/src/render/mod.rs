//! GPU rendering subsystem.
//!
//! One renderer, one job: the textured, lit quad. All pipeline state and
//! geometry buffers are created up front in [`QuadRenderer::new`]; per-frame
//! work is limited to uniform uploads and a single indexed draw.

mod ctx;
mod quad;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{FrameState, QuadConfig, QuadRenderer};
