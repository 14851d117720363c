use bytemuck::{Pod, Zeroable};

/// Per-vertex record, tightly packed in declared order.
///
/// The pipeline's vertex layout mirrors this struct exactly; attribute
/// offsets are the field offsets.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4, // color
        2 => Float32x3, // normal
        3 => Float32x2  // texcoord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    const fn new(
        position: [f32; 3],
        color: [f32; 4],
        normal: [f32; 3],
        texcoord: [f32; 2],
    ) -> Self {
        Self {
            position,
            color,
            normal,
            texcoord,
        }
    }
}

/// The quad: 4 vertices in the XY plane, one color per corner, normals
/// pointing out of the corners.
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new([-0.5, -0.5, 0.5], [1.0, 0.0, 0.0, 1.0], [-1.0, -1.0, -1.0], [0.0, 1.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0, 1.0], [-1.0, 1.0, -1.0], [0.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [0.0, 0.0, 1.0, 1.0], [1.0, 1.0, -1.0], [1.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 1.0, 1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0]),
];

/// Two triangles covering the quad.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn stride_is_tightly_packed() {
        // 3 + 4 + 3 + 2 floats, no implicit padding.
        assert_eq!(size_of::<Vertex>(), 48);
    }

    #[test]
    fn attribute_offsets_match_declared_order() {
        assert_eq!(offset_of!(Vertex, position), 0);
        assert_eq!(offset_of!(Vertex, color), 12);
        assert_eq!(offset_of!(Vertex, normal), 28);
        assert_eq!(offset_of!(Vertex, texcoord), 40);
    }

    #[test]
    fn indices_cover_all_four_vertices() {
        for i in 0..4u32 {
            assert!(QUAD_INDICES.contains(&i));
        }
    }
}
