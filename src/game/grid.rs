use cgmath::Point3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridExtent {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridExtent {
    pub const DEFAULT: GridExtent = GridExtent::new(30, 10, 30);

    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    pub fn volume(&self) -> usize {
        self.x * self.y * self.z
    }

    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.x
            && (y as usize) < self.y
            && (z as usize) < self.z
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct CellPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl CellPos {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    // Cells are unit cubes centered on integer coordinates.
    pub fn center(&self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// The static terrain: a fixed box of occupancy flags.
///
/// Cells are stored so that walking the flat index upwards visits them in
/// x-outer, y-middle, z-inner order. Edits rely on that order to decide
/// which of several candidate cells wins, so it must not change.
pub struct WorldGrid {
    extent: GridExtent,
    cells: Vec<bool>,
}

impl WorldGrid {
    pub fn solid(extent: GridExtent) -> Self {
        Self {
            extent,
            cells: vec![true; extent.volume()],
        }
    }

    pub fn empty(extent: GridExtent) -> Self {
        Self {
            extent,
            cells: vec![false; extent.volume()],
        }
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    fn index(&self, cell: CellPos) -> usize {
        cell.z + self.extent.z * (cell.y + self.extent.y * cell.x)
    }

    fn cell_at(&self, index: usize) -> CellPos {
        let z = index % self.extent.z;
        let y = (index / self.extent.z) % self.extent.y;
        let x = index / (self.extent.z * self.extent.y);
        CellPos::new(x, y, z)
    }

    /// Bounds-checked lookup for callers holding signed coordinates.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<bool> {
        if !self.extent.contains(x, y, z) {
            return None;
        }

        let cell = CellPos::new(x as usize, y as usize, z as usize);
        Some(self.cells[self.index(cell)])
    }

    pub fn is_occupied(&self, cell: CellPos) -> bool {
        self.get(cell.x as i32, cell.y as i32, cell.z as i32)
            .unwrap_or(false)
    }

    /// Removes the static block at `cell`. Returns false when there was
    /// nothing to remove, including out-of-range cells.
    pub fn clear(&mut self, cell: CellPos) -> bool {
        if !self.is_occupied(cell) {
            return false;
        }

        let index = self.index(cell);
        self.cells[index] = false;
        true
    }

    /// Occupied cells in scan order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .map(|(index, _)| self.cell_at(index))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|occupied| **occupied).count()
    }

    // Test fixtures build sparse grids from an empty one.
    #[cfg(test)]
    pub(crate) fn fill(&mut self, cell: CellPos) {
        let index = self.index(cell);
        self.cells[index] = true;
    }
}
