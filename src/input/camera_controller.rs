use winit::keyboard::KeyCode;
use crate::game::camera::Camera;

const PITCH_LIMIT_DEGREES: f32 = 89.0;

pub struct CameraController {
    speed: f32,
    sprint_speed: f32,

    is_forward_pressed: bool,
    is_backward_pressed: bool,
    is_left_pressed: bool,
    is_right_pressed: bool,
    is_up_pressed: bool,
    is_sprint_pressed: bool,

    mouse_sensitivity: f32,
}

impl CameraController {
    pub fn new(speed: f32, sprint_speed: f32, mouse_sensitivity: f32) -> Self {
        Self {
            speed,
            sprint_speed,
            is_forward_pressed: false,
            is_backward_pressed: false,
            is_left_pressed: false,
            is_right_pressed: false,
            is_up_pressed: false,
            is_sprint_pressed: false,
            mouse_sensitivity,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, is_pressed: bool) -> bool {
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => {
                self.is_forward_pressed = is_pressed;
                true
            }
            KeyCode::KeyA | KeyCode::ArrowLeft => {
                self.is_left_pressed = is_pressed;
                true
            }
            KeyCode::KeyS | KeyCode::ArrowDown => {
                self.is_backward_pressed = is_pressed;
                true
            }
            KeyCode::KeyD | KeyCode::ArrowRight => {
                self.is_right_pressed = is_pressed;
                true
            }
            KeyCode::Space => {
                self.is_up_pressed = is_pressed;
                true
            }
            KeyCode::ShiftLeft => {
                self.is_sprint_pressed = is_pressed;
                true
            }
            _ => false,
        }
    }

    pub fn handle_mouse(&mut self, delta_x: f64, delta_y: f64, camera: &mut Camera) {
        // Update yaw (horizontal rotation)
        camera.yaw += delta_x as f32 * self.mouse_sensitivity;

        // Update pitch (vertical rotation) with clamping
        camera.pitch -= delta_y as f32 * self.mouse_sensitivity;
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        camera.pitch = camera.pitch.clamp(-limit, limit);
    }

    /// Flies along the full view direction, pitch included.
    pub fn update_camera(&self, camera: &mut Camera, dt: f32) {
        let speed = if self.is_sprint_pressed { self.sprint_speed } else { self.speed };
        let move_speed = speed * dt;

        if self.is_forward_pressed {
            camera.position += camera.get_direction() * move_speed;
        }
        if self.is_backward_pressed {
            camera.position -= camera.get_direction() * move_speed;
        }
        if self.is_right_pressed {
            camera.position += camera.get_right() * move_speed;
        }
        if self.is_left_pressed {
            camera.position -= camera.get_right() * move_speed;
        }
        if self.is_up_pressed {
            camera.position += camera.get_up() * move_speed;
        }
    }
}
