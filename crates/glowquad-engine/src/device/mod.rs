//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) at the fixed window size
//! - owning the depth/stencil buffer that matches the surface
//! - acquiring frames and providing encoders/views for rendering
//!
//! Every device object is created exactly once, before the render loop
//! starts; the surface is never reconfigured to a new size (resizing is out
//! of scope for this demo).

mod depth;
mod gpu;

pub use depth::{DEPTH_FORMAT, DepthBuffer};
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
