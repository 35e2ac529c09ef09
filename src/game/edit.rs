use cgmath::{Point3, Vector3};
use crate::config::EditorConfig;
use crate::game::blocks::DynamicBlock;
use crate::game::grid::CellPos;
use crate::game::intersect::{intersect_box, BoxHit};
use crate::game::material::Material;
use crate::game::raycast::Ray;
use crate::game::world::World;

fn block_size() -> Vector3<f32> {
    Vector3::new(1.0, 1.0, 1.0)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EditAction {
    Place,
    Remove,
}

/// What the placed block was attached to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    Cell(CellPos),
    /// Index into the dynamic block list at the time of placement.
    Block(usize),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditOutcome {
    Placed { block: DynamicBlock, anchor: Anchor },
    ClearedCell(CellPos),
    /// The removed block, with the hit normal already subtracted from its
    /// position.
    RemovedBlock(DynamicBlock),
}

/// Minimum spacing between placements, in seconds.
#[derive(Copy, Clone, Debug)]
pub struct EditCooldown {
    last_action: Option<f64>,
    interval: f64,
}

impl EditCooldown {
    pub fn new(interval: f64) -> Self {
        Self {
            last_action: None,
            interval,
        }
    }

    pub fn is_ready(&self, now: f64) -> bool {
        match self.last_action {
            Some(last) => now - last >= self.interval,
            None => true,
        }
    }

    pub fn stamp(&mut self, now: f64) {
        self.last_action = Some(now);
    }
}

/// Applies place and remove actions to a `World`.
///
/// Candidates are tested in a fixed order, static cells first in grid scan
/// order, then placed blocks in list order, and the first one whose face is
/// within reach wins. That is not always the nearest candidate, but it is
/// reproducible for a given camera, and the short reach makes competing
/// candidates rare. Each call changes at most one thing.
pub struct EditController {
    cooldown: EditCooldown,
    selected: Material,
    place_reach: f32,
    remove_reach: f32,
}

impl EditController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            cooldown: EditCooldown::new(config.place_cooldown),
            selected: Material::Dirt,
            place_reach: config.place_reach,
            remove_reach: config.remove_reach,
        }
    }

    pub fn selected_material(&self) -> Material {
        self.selected
    }

    pub fn select_material(&mut self, material: Material) {
        if material != self.selected {
            log::debug!("Selected material {}", material.name());
        }
        self.selected = material;
    }

    pub fn apply(&mut self, action: EditAction, world: &mut World, ray: &Ray, now: f64) -> Option<EditOutcome> {
        match action {
            EditAction::Place => self.place(world, ray, now),
            EditAction::Remove => self.remove(world, ray),
        }
    }

    /// Attaches a block of the selected material to the face the ray touches.
    /// Does nothing while the cooldown is pending.
    pub fn place(&mut self, world: &mut World, ray: &Ray, now: f64) -> Option<EditOutcome> {
        if !self.cooldown.is_ready(now) {
            log::trace!("Placement skipped, cooldown pending");
            return None;
        }

        let (base, hit, anchor) = self.find_target(world, ray, self.place_reach)?;

        let block = DynamicBlock::new(base + hit.normal, self.selected);
        world.push_block(block);
        self.cooldown.stamp(now);

        log::debug!(
            "Placed {} at ({}, {}, {})",
            block.material.name(),
            block.position.x,
            block.position.y,
            block.position.z
        );

        Some(EditOutcome::Placed { block, anchor })
    }

    /// Removes the static cell or placed block the ray touches. Not rate
    /// limited.
    pub fn remove(&mut self, world: &mut World, ray: &Ray) -> Option<EditOutcome> {
        let (_, hit, anchor) = self.find_target(world, ray, self.remove_reach)?;

        match anchor {
            Anchor::Cell(cell) => {
                world.clear_cell(cell);
                log::debug!("Removed cell ({}, {}, {})", cell.x, cell.y, cell.z);
                Some(EditOutcome::ClearedCell(cell))
            }
            Anchor::Block(index) => {
                let mut block = world.remove_block(index)?;
                block.position = block.position - hit.normal;
                log::debug!("Removed placed {} block", block.material.name());
                Some(EditOutcome::RemovedBlock(block))
            }
        }
    }

    fn find_target(
        &self,
        world: &World,
        ray: &Ray,
        reach: f32,
    ) -> Option<(Point3<f32>, BoxHit, Anchor)> {
        let static_hit = world.grid().occupied_cells().find_map(|cell| {
            intersect_box(ray, cell.center(), block_size(), reach)
                .map(|hit| (cell.center(), hit, Anchor::Cell(cell)))
        });

        if static_hit.is_some() {
            return static_hit;
        }

        world.blocks().iter().enumerate().find_map(|(index, block)| {
            intersect_box(ray, block.position, block_size(), reach)
                .map(|hit| (block.position, hit, Anchor::Block(index)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::{GridExtent, WorldGrid};

    fn down_from(x: f32, y: f32, z: f32) -> Ray {
        Ray::new(Point3::new(x, y, z), Vector3::new(0.0, -1.0, 0.0))
    }

    fn controller() -> EditController {
        EditController::new(&EditorConfig::default())
    }

    #[test]
    fn place_on_the_top_face() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        edit.select_material(Material::Brick);

        let outcome = edit.place(&mut world, &down_from(5.0, 9.55, 5.0), 1.0).unwrap();

        let expected = DynamicBlock::new(Point3::new(5.0, 10.0, 5.0), Material::Brick);
        assert_eq!(
            outcome,
            EditOutcome::Placed {
                block: expected,
                anchor: Anchor::Cell(CellPos::new(5, 9, 5)),
            }
        );
        assert_eq!(world.blocks().len(), 1);
        assert_eq!(world.blocks().get(0), Some(&expected));
    }

    #[test]
    fn placement_needs_the_camera_at_the_face() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();

        assert!(edit.place(&mut world, &down_from(5.0, 9.7, 5.0), 1.0).is_none());
        assert!(world.blocks().is_empty());
    }

    #[test]
    fn cooldown_limits_placement_rate() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        let ray = down_from(5.0, 9.55, 5.0);

        assert!(edit.place(&mut world, &ray, 1.0).is_some());
        assert!(edit.place(&mut world, &ray, 1.2).is_none());
        assert_eq!(world.blocks().len(), 1);

        assert!(edit.place(&mut world, &ray, 1.5).is_some());
        assert_eq!(world.blocks().len(), 2);
    }

    #[test]
    fn missed_placement_does_not_start_the_cooldown() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();

        assert!(edit.place(&mut world, &down_from(5.0, 20.0, 5.0), 1.0).is_none());
        assert!(edit.place(&mut world, &down_from(5.0, 9.55, 5.0), 1.1).is_some());
    }

    #[test]
    fn placement_chains_off_placed_blocks() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        world.push_block(DynamicBlock::new(Point3::new(5.0, 10.0, 5.0), Material::Stone));

        // Touching the placed block's top face, the slab is out of reach.
        let outcome = edit.place(&mut world, &down_from(5.0, 10.55, 5.0), 1.0).unwrap();

        match outcome {
            EditOutcome::Placed { block, anchor } => {
                assert_eq!(block.position, Point3::new(5.0, 11.0, 5.0));
                assert_eq!(anchor, Anchor::Block(0));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(world.blocks().len(), 2);
    }

    #[test]
    fn static_cells_win_over_placed_blocks() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        // Overlaps the slab's top cell, both are in reach.
        world.push_block(DynamicBlock::new(Point3::new(5.0, 9.0, 5.0), Material::Stone));

        let outcome = edit.remove(&mut world, &down_from(5.0, 9.55, 5.0)).unwrap();
        assert_eq!(outcome, EditOutcome::ClearedCell(CellPos::new(5, 9, 5)));
        assert_eq!(world.blocks().len(), 1);
    }

    #[test]
    fn one_placement_even_with_several_candidates() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();

        // Straight down onto the edge shared by (5,9,5) and (5,9,6).
        let outcome = edit.place(&mut world, &down_from(5.0, 9.55, 5.5), 1.0).unwrap();

        assert_eq!(world.blocks().len(), 1);
        match outcome {
            EditOutcome::Placed { anchor, .. } => {
                assert_eq!(anchor, Anchor::Cell(CellPos::new(5, 9, 5)));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn remove_clears_the_first_cell_in_scan_order() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();

        let outcome = edit.remove(&mut world, &down_from(5.0, 9.55, 5.5)).unwrap();

        assert_eq!(outcome, EditOutcome::ClearedCell(CellPos::new(5, 9, 5)));
        assert_eq!(world.grid().get(5, 9, 5), Some(false));
        assert_eq!(world.grid().get(5, 9, 6), Some(true));
        assert_eq!(world.grid().occupied_count(), 30 * 10 * 30 - 1);
    }

    #[test]
    fn remove_has_a_longer_reach_than_place() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        let ray = down_from(5.0, 9.7, 5.0);

        assert!(edit.place(&mut world, &ray, 1.0).is_none());
        assert!(edit.remove(&mut world, &ray).is_some());
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        let ray = down_from(5.0, 9.55, 5.0);

        assert!(edit.remove(&mut world, &ray).is_some());
        // The cell below is now 1.05 away.
        assert!(edit.remove(&mut world, &ray).is_none());
        assert_eq!(world.grid().occupied_count(), 30 * 10 * 30 - 1);
    }

    #[test]
    fn remove_is_not_rate_limited() {
        let mut grid = WorldGrid::empty(GridExtent::DEFAULT);
        grid.fill(CellPos::new(5, 9, 5));
        grid.fill(CellPos::new(6, 9, 5));
        let mut world = World::from_grid(grid);
        let mut edit = controller();

        assert!(edit.remove(&mut world, &down_from(5.0, 9.55, 5.0)).is_some());
        assert!(edit.remove(&mut world, &down_from(6.0, 9.55, 5.0)).is_some());
        assert_eq!(world.grid().occupied_count(), 0);
    }

    #[test]
    fn remove_placed_block_corrects_its_position() {
        let mut world = World::from_grid(WorldGrid::empty(GridExtent::DEFAULT));
        let mut edit = controller();
        world.push_block(DynamicBlock::new(Point3::new(5.0, 10.0, 5.0), Material::Oak));

        let outcome = edit.remove(&mut world, &down_from(5.0, 10.6, 5.0)).unwrap();

        assert_eq!(
            outcome,
            EditOutcome::RemovedBlock(DynamicBlock::new(Point3::new(5.0, 9.0, 5.0), Material::Oak))
        );
        assert!(world.blocks().is_empty());
        assert!(edit.remove(&mut world, &down_from(5.0, 10.6, 5.0)).is_none());
    }

    #[test]
    fn selection_applies_to_the_next_placement() {
        let mut world = World::new(GridExtent::DEFAULT);
        let mut edit = controller();
        assert_eq!(edit.selected_material(), Material::Dirt);

        edit.select_material(Material::Glass);
        let outcome = edit.apply(EditAction::Place, &mut world, &down_from(5.0, 9.55, 5.0), 0.0);

        match outcome {
            Some(EditOutcome::Placed { block, .. }) => assert_eq!(block.material, Material::Glass),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
