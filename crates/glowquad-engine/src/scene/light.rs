use bytemuck::{Pod, Zeroable};

/// Light constant block bound to the fragment stage.
///
/// Layout follows the hardware constant-buffer rule: every vec3 + scalar
/// pair fills exactly one 16-byte register, so the explicit padding scalars
/// are load-bearing. Field order matches the WGSL struct in `quad.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,

    pub dynamic_color: [f32; 3],
    pub dynamic_strength: f32,

    pub dynamic_position: [f32; 3],
    pub _pad0: f32,

    /// Falloff coefficients (constant, linear, quadratic).
    pub attenuation: [f32; 3],
    pub _pad1: f32,
}

impl LightUniform {
    /// The demo's fixed light: white ambient at 20%, a white point light at
    /// full strength just left of the quad. Re-uploaded every frame even
    /// though it never changes.
    pub const fn fixed() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_strength: 0.2,
            dynamic_color: [1.0, 1.0, 1.0],
            dynamic_strength: 1.0,
            dynamic_position: [-0.9, 0.0, 0.0],
            _pad0: 0.0,
            attenuation: [0.2, 0.1, 0.1],
            _pad1: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn every_register_starts_on_a_16_byte_boundary() {
        assert_eq!(offset_of!(LightUniform, ambient_color), 0);
        assert_eq!(offset_of!(LightUniform, dynamic_color), 16);
        assert_eq!(offset_of!(LightUniform, dynamic_position), 32);
        assert_eq!(offset_of!(LightUniform, attenuation), 48);
        assert_eq!(size_of::<LightUniform>(), 64);
    }

    #[test]
    fn byte_round_trip_preserves_every_field() {
        let light = LightUniform::fixed();
        let bytes = bytemuck::bytes_of(&light);
        let back: LightUniform = *bytemuck::from_bytes(bytes);
        assert_eq!(back, light);
    }
}
