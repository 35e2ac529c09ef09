use cgmath::prelude::*;
use cgmath::{Matrix4, Point3, Vector3, Vector4};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// `direction` is normalized here, callers can pass any non-zero vector.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Unprojects a cursor position into a world-space ray leaving `origin`.
///
/// The cursor is in window pixels with y growing downwards. The point is
/// pushed onto the far plane through the inverse view-projection, so the
/// projection passed here must be the one the scene is drawn with.
///
/// Returns `None` for degenerate input: an empty viewport, a singular
/// view-projection, or a far point that coincides with the origin.
pub fn cast_ray(
    cursor: (f32, f32),
    viewport: (u32, u32),
    projection: Matrix4<f32>,
    view: Matrix4<f32>,
    origin: Point3<f32>,
) -> Option<Ray> {
    let (width, height) = viewport;
    if width == 0 || height == 0 {
        return None;
    }

    // Pixel space to NDC, flipping y.
    let ndc_x = cursor.0 / (width as f32 * 0.5) - 1.0;
    let ndc_y = 1.0 - cursor.1 / (height as f32 * 0.5);

    let inverse = (projection * view).invert()?;
    let clip = Vector4::new(ndc_x, ndc_y, 1.0, 1.0);
    let world = inverse * clip;

    if world.w == 0.0 || !world.w.is_finite() {
        return None;
    }

    let far_point = Point3::from_vec(world.truncate() / world.w);
    let direction = far_point - origin;

    if direction.magnitude2() == 0.0 || !direction.magnitude2().is_finite() {
        return None;
    }

    Some(Ray::new(origin, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    const VIEWPORT: (u32, u32) = (800, 600);

    fn matrices(eye: Point3<f32>, forward: Vector3<f32>) -> (Matrix4<f32>, Matrix4<f32>) {
        let projection = cgmath::perspective(Deg(45.0), 800.0 / 600.0, 0.1, 100.0);
        let view = Matrix4::look_at_rh(eye, eye + forward, Vector3::unit_y());
        (projection, view)
    }

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn screen_center_follows_the_view_direction() {
        let eye = Point3::new(0.0, 0.0, 0.0);
        let (projection, view) = matrices(eye, -Vector3::unit_z());

        let ray = cast_ray((400.0, 300.0), VIEWPORT, projection, view, eye).unwrap();
        assert_close(ray.direction, -Vector3::unit_z());
        assert_eq!(ray.origin, eye);
    }

    #[test]
    fn direction_is_relative_to_the_camera_origin() {
        let eye = Point3::new(10.0, 5.0, 3.0);
        let (projection, view) = matrices(eye, Vector3::unit_x());

        let ray = cast_ray((400.0, 300.0), VIEWPORT, projection, view, eye).unwrap();
        assert_close(ray.direction, Vector3::unit_x());
        assert!((ray.direction.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn pixel_y_is_flipped() {
        let eye = Point3::new(0.0, 0.0, 0.0);
        let (projection, view) = matrices(eye, -Vector3::unit_z());

        let top_left = cast_ray((0.0, 0.0), VIEWPORT, projection, view, eye).unwrap();
        assert!(top_left.direction.x < 0.0);
        assert!(top_left.direction.y > 0.0);

        let bottom_right = cast_ray((800.0, 600.0), VIEWPORT, projection, view, eye).unwrap();
        assert!(bottom_right.direction.x > 0.0);
        assert!(bottom_right.direction.y < 0.0);
    }

    #[test]
    fn degenerate_input_yields_no_ray() {
        let eye = Point3::new(0.0, 0.0, 0.0);
        let (projection, view) = matrices(eye, -Vector3::unit_z());

        assert!(cast_ray((0.0, 0.0), (0, 600), projection, view, eye).is_none());
        assert!(cast_ray((0.0, 0.0), VIEWPORT, Matrix4::from_scale(0.0), view, eye).is_none());
    }
}
