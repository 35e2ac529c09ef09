use crate::game::culling::CullPolicy;
use crate::game::grid::GridExtent;

/// Tunables for the editor.
#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub grid_extent: GridExtent,

    // Edit reach, measured from the camera to the struck face.
    pub place_reach: f32,
    pub remove_reach: f32,
    /// Seconds between two placements.
    pub place_cooldown: f64,

    pub cull_policy: CullPolicy,

    // Camera.
    pub move_speed: f32,
    pub sprint_speed: f32,
    pub mouse_sensitivity: f32,
    pub fovy: f32,
    pub gravity: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_extent: GridExtent::DEFAULT,
            place_reach: 0.10,
            remove_reach: 0.25,
            place_cooldown: 0.5,
            cull_policy: CullPolicy::GridBoundary,
            move_speed: 3.0,
            sprint_speed: 12.0,
            mouse_sensitivity: 0.003,
            fovy: 45.0,
            gravity: false,
        }
    }
}
