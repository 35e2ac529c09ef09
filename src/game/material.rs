#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Material {
    Dirt,
    Grass,
    Stone,
    Plank,
    Brick,
    Oak,
    Glass,
    // Display only, never placeable from the hot-bar.
    Diamond,
    Coal,
    Iron,
    Water,
}

impl Material {
    pub const ALL: [Material; 11] = [
        Material::Dirt,
        Material::Grass,
        Material::Stone,
        Material::Plank,
        Material::Brick,
        Material::Oak,
        Material::Glass,
        Material::Diamond,
        Material::Coal,
        Material::Iron,
        Material::Water,
    ];

    /// Hot-bar slots, bound to the digit keys 1 through 7.
    pub const HOTBAR: [Material; 7] = [
        Material::Dirt,
        Material::Grass,
        Material::Stone,
        Material::Plank,
        Material::Brick,
        Material::Oak,
        Material::Glass,
    ];

    /// `slot` is 1-based, matching the key label.
    pub fn from_hotbar_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1)
            .and_then(|index| Self::HOTBAR.get(index))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Dirt => "dirt",
            Material::Grass => "grass",
            Material::Stone => "stone",
            Material::Plank => "wood",
            Material::Brick => "wall",
            Material::Oak => "oak",
            Material::Glass => "glass",
            Material::Diamond => "diamond",
            Material::Coal => "coal",
            Material::Iron => "iron",
            Material::Water => "water",
        }
    }

    /// Tile slot in the texture atlas.
    pub fn atlas_index(&self) -> u32 {
        match self {
            Material::Dirt => 0,
            Material::Grass => 1,
            Material::Stone => 2,
            Material::Plank => 3,
            Material::Brick => 4,
            Material::Oak => 5,
            Material::Glass => 6,
            Material::Diamond => 7,
            Material::Coal => 8,
            Material::Iron => 9,
            Material::Water => 10,
        }
    }

    pub fn base_color(&self) -> [u8; 3] {
        match self {
            Material::Dirt => [134, 96, 67],
            Material::Grass => [95, 159, 53],
            Material::Stone => [125, 125, 125],
            Material::Plank => [162, 130, 78],
            Material::Brick => [150, 74, 58],
            Material::Oak => [102, 81, 51],
            Material::Glass => [200, 230, 240],
            Material::Diamond => [98, 219, 214],
            Material::Coal => [46, 46, 46],
            Material::Iron => [216, 216, 216],
            Material::Water => [47, 67, 244],
        }
    }

    /// Terrain material for a static cell at height `y`.
    pub fn for_layer(y: usize) -> Self {
        if y > 7 {
            Material::Grass
        } else if y >= 5 {
            Material::Dirt
        } else {
            Material::Stone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotbar_slots_are_one_based() {
        assert_eq!(Material::from_hotbar_slot(1), Some(Material::Dirt));
        assert_eq!(Material::from_hotbar_slot(7), Some(Material::Glass));
        assert_eq!(Material::from_hotbar_slot(0), None);
        assert_eq!(Material::from_hotbar_slot(8), None);
    }

    #[test]
    fn terrain_layers() {
        assert_eq!(Material::for_layer(9), Material::Grass);
        assert_eq!(Material::for_layer(8), Material::Grass);
        assert_eq!(Material::for_layer(7), Material::Dirt);
        assert_eq!(Material::for_layer(5), Material::Dirt);
        assert_eq!(Material::for_layer(4), Material::Stone);
        assert_eq!(Material::for_layer(0), Material::Stone);
    }

    #[test]
    fn atlas_slots_are_unique() {
        let mut slots: Vec<_> = Material::ALL.iter().map(|m| m.atlas_index()).collect();
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), Material::ALL.len());
    }
}
