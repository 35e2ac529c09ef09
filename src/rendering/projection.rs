use cgmath::Matrix4;
use crate::game::camera::Camera;

#[rustfmt::skip]
const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::from_cols(
    cgmath::Vector4::new(1.0, 0.0, 0.0, 0.0),
    cgmath::Vector4::new(0.0, 1.0, 0.0, 0.0),
    cgmath::Vector4::new(0.0, 0.0, 0.5, 0.0),
    cgmath::Vector4::new(0.0, 0.0, 0.5, 1.0),
);

pub const MIN_FOVY: f32 = 1.0;
pub const MAX_FOVY: f32 = 45.0;

pub struct Projection {
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, fovy: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.clamp(MIN_FOVY, MAX_FOVY),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Scrolling up narrows the field of view.
    pub fn zoom(&mut self, scroll: f32) {
        self.fovy = (self.fovy - scroll).clamp(MIN_FOVY, MAX_FOVY);
    }

    /// Projection in wgpu clip space, used both for drawing and for casting
    /// rays back out of the screen.
    pub fn get_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(cgmath::Deg(self.fovy), self.aspect, self.znear, self.zfar)
    }

    pub fn get_view_projection_matrix(&self, camera: &Camera) -> [[f32; 4]; 4] {
        (self.get_projection_matrix() * camera.get_view_matrix()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let mut projection = Projection::new(800, 600, 45.0);

        projection.zoom(-10.0);
        assert_eq!(projection.fovy, MAX_FOVY);

        projection.zoom(30.0);
        assert_eq!(projection.fovy, 15.0);

        projection.zoom(100.0);
        assert_eq!(projection.fovy, MIN_FOVY);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let mut projection = Projection::new(800, 0, 45.0);
        assert_eq!(projection.aspect, 800.0);

        projection.resize(1024, 512);
        assert_eq!(projection.aspect, 2.0);
    }
}
