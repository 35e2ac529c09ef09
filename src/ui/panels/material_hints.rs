use egui::{Color32, RichText, Ui};
use crate::game::material::Material;

pub struct MaterialHintsPanel;

impl MaterialHintsPanel {
    pub fn show(ui: &mut Ui, selected: Material) {
        for (slot, material) in Material::HOTBAR.iter().enumerate() {
            let color = if *material == selected {
                Color32::YELLOW
            } else {
                Color32::WHITE
            };

            ui.label(RichText::new(Self::hint(slot + 1, *material)).color(color));
        }
    }

    pub fn hint(slot: usize, material: Material) -> String {
        format!("press {} to change material to {}", slot, material.name())
    }
}
