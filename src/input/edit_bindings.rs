use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use crate::game::edit::EditAction;
use crate::game::material::Material;

/// Mouse buttons held for editing and the hot-bar keys.
///
/// Edits repeat every frame while their button is held, placement is
/// throttled by the controller's cooldown.
#[derive(Default)]
pub struct EditBindings {
    is_place_held: bool,
    is_remove_held: bool,
}

impl EditBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, is_pressed: bool) -> bool {
        match button {
            MouseButton::Left => {
                self.is_place_held = is_pressed;
                true
            }
            MouseButton::Right => {
                self.is_remove_held = is_pressed;
                true
            }
            _ => false,
        }
    }

    /// Releases everything, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.is_place_held = false;
        self.is_remove_held = false;
    }

    /// Actions to run this frame, placement first.
    pub fn held_actions(&self) -> impl Iterator<Item = EditAction> {
        let place = self.is_place_held.then_some(EditAction::Place);
        let remove = self.is_remove_held.then_some(EditAction::Remove);
        place.into_iter().chain(remove)
    }

    pub fn material_for_key(code: KeyCode) -> Option<Material> {
        let slot = match code {
            KeyCode::Digit1 => 1,
            KeyCode::Digit2 => 2,
            KeyCode::Digit3 => 3,
            KeyCode::Digit4 => 4,
            KeyCode::Digit5 => 5,
            KeyCode::Digit6 => 6,
            KeyCode::Digit7 => 7,
            _ => return None,
        };

        Material::from_hotbar_slot(slot)
    }
}
