use egui::{Color32, RichText, Ui};
use crate::game::camera::Camera;

pub struct CameraInfoPanel;

impl CameraInfoPanel {
    pub fn show(
        ui: &mut Ui,
        camera: &Camera,
        fovy: f32,
        gravity: bool,
        placed_blocks: usize,
    ) {
        ui.heading(RichText::new("Camera").color(Color32::WHITE));
        ui.separator();

        let position = camera.position;
        ui.colored_label(
            Color32::WHITE,
            format!(
                "Position: {:.2}, {:.2}, {:.2}",
                position.x,
                position.y,
                position.z
            )
        );
        ui.colored_label(
            Color32::WHITE,
            format!(
                "Yaw / Pitch: {:.1}, {:.1}",
                camera.yaw.to_degrees(),
                camera.pitch.to_degrees()
            )
        );
        ui.colored_label(Color32::WHITE, format!("FOV: {:.1}", fovy));
        ui.colored_label(
            Color32::WHITE,
            format!("Gravity: {}", if gravity { "on" } else { "off" })
        );
        ui.colored_label(Color32::WHITE, format!("Placed blocks: {}", placed_blocks));
    }
}
