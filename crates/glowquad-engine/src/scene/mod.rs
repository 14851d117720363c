//! Scene data and per-frame math.
//!
//! Everything the render pipeline consumes each frame comes from here: the
//! static quad geometry, the fixed camera, the world transform built from
//! the animation steppers, and the (static) light block.

pub mod anim;
pub mod camera;
pub mod light;
pub mod transform;
pub mod vertex;

pub use anim::{Drift, Spin};
pub use camera::Camera;
pub use light::LightUniform;
pub use transform::TransformUniform;
pub use vertex::{QUAD_INDICES, QUAD_VERTICES, Vertex};
