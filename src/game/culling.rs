use std::ops::Range;
use cgmath::Vector3;
use crate::game::grid::{CellPos, WorldGrid};

/// Cube faces, in the order their vertices appear in the unit cube mesh.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Face {
    Left,
    Right,
    Bottom,
    Top,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
        Face::Front,
        Face::Back,
    ];

    pub const VERTICES_PER_FACE: u32 = 6;

    pub fn index(&self) -> u32 {
        match self {
            Face::Left => 0,
            Face::Right => 1,
            Face::Bottom => 2,
            Face::Top => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }

    /// Vertex range of this face inside the 36-vertex unit cube.
    pub fn vertex_range(&self) -> Range<u32> {
        let start = self.index() * Self::VERTICES_PER_FACE;
        start..start + Self::VERTICES_PER_FACE
    }

    pub fn normal(&self) -> Vector3<f32> {
        match self {
            Face::Left => Vector3::new(-1.0, 0.0, 0.0),
            Face::Right => Vector3::new(1.0, 0.0, 0.0),
            Face::Bottom => Vector3::new(0.0, -1.0, 0.0),
            Face::Top => Vector3::new(0.0, 1.0, 0.0),
            Face::Front => Vector3::new(0.0, 0.0, -1.0),
            Face::Back => Vector3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn from_normal(normal: Vector3<f32>) -> Option<Face> {
        Face::ALL.iter().copied().find(|face| face.normal() == normal)
    }

    fn offset(&self) -> (i32, i32, i32) {
        match self {
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
            Face::Bottom => (0, -1, 0),
            Face::Top => (0, 1, 0),
            Face::Front => (0, 0, -1),
            Face::Back => (0, 0, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FaceMask(u8);

impl FaceMask {
    pub const NONE: FaceMask = FaceMask(0);
    pub const ALL: FaceMask = FaceMask(0b11_1111);

    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face.index();
    }

    pub fn contains(&self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |face| self.contains(*face))
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CullPolicy {
    /// Faces are drawn only where the cell touches the outside of the grid.
    /// Neighbor occupancy is ignored, so a removed cell leaves its
    /// neighbors' inner faces undrawn.
    #[default]
    GridBoundary,
    /// Faces are also drawn toward empty in-bounds neighbors.
    NeighborOccupancy,
}

/// Faces of `cell` that should be drawn. Empty cells draw nothing.
pub fn visible_faces(grid: &WorldGrid, cell: CellPos, policy: CullPolicy) -> FaceMask {
    if !grid.is_occupied(cell) {
        return FaceMask::NONE;
    }

    let mut mask = FaceMask::NONE;
    let (x, y, z) = (cell.x as i32, cell.y as i32, cell.z as i32);

    for face in Face::ALL {
        let (dx, dy, dz) = face.offset();
        let neighbor = grid.get(x + dx, y + dy, z + dz);

        let visible = match (policy, neighbor) {
            (_, None) => true,
            (CullPolicy::GridBoundary, Some(_)) => false,
            (CullPolicy::NeighborOccupancy, Some(occupied)) => !occupied,
        };

        if visible {
            mask.insert(face);
        }
    }

    mask
}
