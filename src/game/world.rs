use cgmath::Point3;
use crate::game::blocks::{DynamicBlock, DynamicBlockList};
use crate::game::grid::{CellPos, GridExtent, WorldGrid};
use crate::game::material::Material;

/// Everything an edit can touch: the static grid and the placed blocks.
/// Renderers poll `take_dirty` to know when to rebuild their meshes.
pub struct World {
    grid: WorldGrid,
    blocks: DynamicBlockList,
    display_blocks: Vec<DynamicBlock>,
    dirty: bool,
}

impl World {
    pub fn new(extent: GridExtent) -> Self {
        log::info!(
            "Creating {}x{}x{} world",
            extent.x,
            extent.y,
            extent.z
        );

        Self::from_grid(WorldGrid::solid(extent))
    }

    pub fn from_grid(grid: WorldGrid) -> Self {
        let display_y = grid.extent().y as f32 + 5.0;

        // Ore samples floating above the slab.
        let display_blocks = [
            Material::Diamond,
            Material::Iron,
            Material::Coal,
            Material::Water,
        ]
        .iter()
        .enumerate()
        .map(|(i, material)| {
            DynamicBlock::new(Point3::new(5.0 + 2.0 * i as f32, display_y, 5.0), *material)
        })
        .collect();

        Self {
            grid,
            blocks: DynamicBlockList::new(),
            display_blocks,
            dirty: true,
        }
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn blocks(&self) -> &DynamicBlockList {
        &self.blocks
    }

    pub fn display_blocks(&self) -> &[DynamicBlock] {
        &self.display_blocks
    }

    pub fn clear_cell(&mut self, cell: CellPos) -> bool {
        let cleared = self.grid.clear(cell);
        self.dirty |= cleared;
        cleared
    }

    pub fn push_block(&mut self, block: DynamicBlock) {
        self.blocks.push(block);
        self.dirty = true;
    }

    pub fn remove_block(&mut self, index: usize) -> Option<DynamicBlock> {
        let removed = self.blocks.remove(index);
        self.dirty |= removed.is_some();
        removed
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_mark_the_world_dirty() {
        let mut world = World::new(GridExtent::new(4, 4, 4));
        assert!(world.take_dirty());
        assert!(!world.take_dirty());

        assert!(world.clear_cell(CellPos::new(1, 1, 1)));
        assert!(world.take_dirty());

        // Nothing left to clear there.
        assert!(!world.clear_cell(CellPos::new(1, 1, 1)));
        assert!(!world.take_dirty());

        assert!(world.remove_block(0).is_none());
        assert!(!world.take_dirty());

        world.push_block(DynamicBlock::new(Point3::new(0.0, 4.0, 0.0), Material::Glass));
        assert!(world.take_dirty());
        assert_eq!(world.blocks().len(), 1);
    }

    #[test]
    fn display_blocks_float_above_the_grid() {
        let world = World::new(GridExtent::DEFAULT);
        assert_eq!(world.display_blocks().len(), 4);
        assert!(world.display_blocks().iter().all(|b| b.position.y == 15.0));
    }
}
