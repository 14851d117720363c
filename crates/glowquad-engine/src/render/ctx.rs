use winit::dpi::PhysicalSize;

/// Renderer-facing context (device/queue + surface format + fixed size).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub size: PhysicalSize<u32>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            size,
        }
    }

    /// Window width / height, for the projection matrix.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        aspect(self.size)
    }
}

fn aspect(size: PhysicalSize<u32>) -> f32 {
    size.width as f32 / size.height.max(1) as f32
}

/// Target for drawing (encoder + color view + depth/stencil view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub depth_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        depth_view: &'a wgpu::TextureView,
    ) -> Self {
        Self {
            encoder,
            color_view,
            depth_view,
        }
    }
}

// ── tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_the_fixed_window_is_four_thirds() {
        assert_eq!(aspect(PhysicalSize::new(800, 600)), 800.0 / 600.0);
    }

    #[test]
    fn aspect_clamps_a_zero_height() {
        assert_eq!(aspect(PhysicalSize::new(800, 0)), 800.0);
    }
}
