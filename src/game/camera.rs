use cgmath::prelude::*;

pub struct Camera {
    pub position: cgmath::Point3<f32>,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: cgmath::Point3<f32>, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    pub fn get_view_matrix(&self) -> cgmath::Matrix4<f32> {
        let direction = self.get_direction();
        let target = self.position + direction;
        cgmath::Matrix4::look_at_rh(self.position, target, cgmath::Vector3::unit_y())
    }

    pub fn get_direction(&self) -> cgmath::Vector3<f32> {
        cgmath::Vector3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        ).normalize()
    }

    pub fn get_up(&self) -> cgmath::Vector3<f32> {
        cgmath::Vector3::unit_y()
    }

    pub fn get_right(&self) -> cgmath::Vector3<f32> {
        self.get_direction()
            .cross(cgmath::Vector3::unit_y())
            .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_yaw_looks_down_negative_z() {
        let camera = Camera::new((0.0, 0.0, 0.0).into(), -std::f32::consts::FRAC_PI_2, 0.0);
        let direction = camera.get_direction();

        assert!(direction.x.abs() < 1e-6);
        assert!((direction.z + 1.0).abs() < 1e-6);
        assert!((camera.get_right() - cgmath::Vector3::unit_x()).magnitude() < 1e-6);
    }
}
