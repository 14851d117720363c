use winit::dpi::PhysicalSize;

/// Depth/stencil format used for the frame target: 24-bit depth, 8-bit stencil.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

/// Depth/stencil buffer matching the fixed surface size.
///
/// Created once alongside the surface and never recreated; the window does
/// not resize, so the attachment dimensions stay valid for the whole run.
pub struct DepthBuffer {
    /// Attachment view. The view keeps the underlying texture alive.
    view: wgpu::TextureView,
}

impl DepthBuffer {
    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glowquad depth buffer"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { view }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}
