use cgmath::Point3;
use crate::game::material::Material;

/// A player-placed cube. Positions are integer valued but kept as floats so
/// hit normals can be added straight onto them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DynamicBlock {
    pub position: Point3<f32>,
    pub material: Material,
}

impl DynamicBlock {
    pub fn new(position: Point3<f32>, material: Material) -> Self {
        Self { position, material }
    }
}

/// Placed blocks in insertion order. Duplicate positions are allowed.
#[derive(Clone, Debug, Default)]
pub struct DynamicBlockList {
    blocks: Vec<DynamicBlock>,
}

impl DynamicBlockList {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn push(&mut self, block: DynamicBlock) {
        self.blocks.push(block);
    }

    /// Removes and returns the block at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<DynamicBlock> {
        if index < self.blocks.len() {
            Some(self.blocks.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&DynamicBlock> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DynamicBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<'a> IntoIterator for &'a DynamicBlockList {
    type Item = &'a DynamicBlock;
    type IntoIter = std::slice::Iter<'a, DynamicBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_keeps_insertion_order() {
        let mut list = DynamicBlockList::new();
        for x in 0..3 {
            list.push(DynamicBlock::new(Point3::new(x as f32, 10.0, 0.0), Material::Stone));
        }

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.position.x, 1.0);

        let xs: Vec<_> = list.iter().map(|b| b.position.x).collect();
        assert_eq!(xs, vec![0.0, 2.0]);
    }

    #[test]
    fn removing_past_the_end_is_a_no_op() {
        let mut list = DynamicBlockList::new();
        list.push(DynamicBlock::new(Point3::new(0.0, 0.0, 0.0), Material::Dirt));

        assert!(list.remove(1).is_none());
        assert!(list.remove(0).is_some());
        assert!(list.remove(0).is_none());
        assert!(list.is_empty());
    }
}
