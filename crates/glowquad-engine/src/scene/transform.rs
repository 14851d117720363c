use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Transform constant block bound to the vertex stage.
///
/// Both matrices are stored transposed (row-major) because the shader
/// multiplies with the vector on the left (`pos * m`), matching the
/// constant-buffer convention the demo was built around.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub wvp: [[f32; 4]; 4],
    pub world: [[f32; 4]; 4],
}

/// World matrix for the quad: rotation about Z by `angle`, then translation
/// along X by `offset`.
pub fn world(angle: f32, offset: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(offset, 0.0, 0.0)) * Mat4::from_rotation_z(angle)
}

impl TransformUniform {
    /// Composes the combined world-view-projection matrix and transposes
    /// both it and the world matrix for upload.
    pub fn new(world: Mat4, view: Mat4, projection: Mat4) -> Self {
        let wvp = projection * view * world;
        Self {
            wvp: wvp.transpose().to_cols_array_2d(),
            world: world.transpose().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_with_no_rotation_or_translation_is_identity() {
        assert_eq!(world(0.0, 0.0), Mat4::IDENTITY);
    }

    #[test]
    fn world_applies_rotation_before_translation() {
        // A point on the +X axis rotated 180° about Z lands on -X, then the
        // translation shifts it. Translation-first would cancel differently.
        let m = world(std::f32::consts::PI, 1.0);
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn combined_composes_in_world_view_projection_order() {
        let w = Mat4::from_rotation_z(0.3);
        let v = Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0));
        let p = Mat4::perspective_lh(1.0, 4.0 / 3.0, 0.1, 100.0);

        let u = TransformUniform::new(w, v, p);
        let expected = (p * v * w).transpose().to_cols_array_2d();
        assert_eq!(u.wvp, expected);

        // Order matters: the reversed composition is a different matrix.
        let reversed = (w * v * p).transpose().to_cols_array_2d();
        assert_ne!(u.wvp, reversed);
    }

    #[test]
    fn transpose_swaps_rows_and_columns_exactly() {
        let w = world(0.7, 0.25);
        let u = TransformUniform::new(w, Mat4::IDENTITY, Mat4::IDENTITY);

        let cols = w.to_cols_array_2d();
        for r in 0..4 {
            for c in 0..4 {
                // Uploaded layout is row-major: element [r][c] is the
                // original column-major element [c][r].
                assert_eq!(u.world[r][c], cols[c][r]);
            }
        }
    }
}
