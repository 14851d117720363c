use glam::{Mat4, Vec3};

/// Fixed left-handed camera.
///
/// The demo never moves the camera; the defaults are the whole contract:
/// eye two units behind the origin looking at it, +Y up, 90° vertical FOV.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 90.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

impl Camera {
    /// Left-handed look-at view matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    /// Left-handed perspective projection for the given aspect ratio
    /// (window width / height).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fov_y_degrees.to_radians(), aspect, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(m: Mat4) -> [u32; 16] {
        m.to_cols_array().map(f32::to_bits)
    }

    #[test]
    fn view_is_deterministic_byte_for_byte() {
        let cam = Camera::default();
        assert_eq!(bits(cam.view()), bits(cam.view()));
    }

    #[test]
    fn view_places_eye_two_units_back() {
        // Transforming the eye position by the view matrix lands on the
        // view-space origin.
        let cam = Camera::default();
        let eye_in_view = cam.view().transform_point3(cam.eye);
        assert!(eye_in_view.length() < 1e-6);
    }

    #[test]
    fn projection_is_deterministic() {
        let cam = Camera::default();
        let aspect = 800.0 / 600.0;
        assert_eq!(bits(cam.projection(aspect)), bits(cam.projection(aspect)));
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let cam = Camera::default();
        let p = cam.projection(800.0 / 600.0);
        // Left-handed: a point on the near plane straight ahead projects to z = 0.
        let near = p.project_point3(glam::Vec3::new(0.0, 0.0, cam.z_near));
        assert!(near.z.abs() < 1e-6);
    }
}
