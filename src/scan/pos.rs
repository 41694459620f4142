//! Integer cell and chunk coordinates

use glam::IVec3;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Number of cells per chunk side
pub const CHUNK_SIZE: i32 = 16;

/// Integer coordinate identifying a single cell in the voxel grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

    /// Create a new cell coordinate
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate displaced by a relative offset. Wraps at the i32 range.
    pub fn offset(self, delta: IVec3) -> Self {
        Self {
            x: self.x.wrapping_add(delta.x),
            y: self.y.wrapping_add(delta.y),
            z: self.z.wrapping_add(delta.z),
        }
    }

    /// Face neighbour in the given direction
    pub fn relative(self, dir: Direction) -> Self {
        self.offset(dir.offset())
    }

    /// Chunk containing this cell
    pub fn chunk(self) -> ChunkPos {
        ChunkPos {
            x: self.x.div_euclid(CHUNK_SIZE),
            y: self.y.div_euclid(CHUNK_SIZE),
            z: self.z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Largest per-axis distance to `other` (king-move metric).
    pub fn chebyshev_distance(self, other: BlockPos) -> u32 {
        self.x
            .abs_diff(other.x)
            .max(self.y.abs_diff(other.y))
            .max(self.z.abs_diff(other.z))
    }
}

impl From<IVec3> for BlockPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BlockPos> for IVec3 {
    fn from(p: BlockPos) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}

/// Integer coordinate identifying a chunk of `CHUNK_SIZE`³ cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Create a new chunk coordinate
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Minimum-corner cell of this chunk
    pub fn min_cell(self) -> BlockPos {
        BlockPos::new(
            self.x.wrapping_mul(CHUNK_SIZE),
            self.y.wrapping_mul(CHUNK_SIZE),
            self.z.wrapping_mul(CHUNK_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = BlockPos::new(1, 2, 3).offset(IVec3::new(-1, 5, 0));
        assert_eq!(p, BlockPos::new(0, 7, 3));
    }

    #[test]
    fn test_offset_wraps_at_range_edge() {
        let top = BlockPos::new(0, i32::MAX, i32::MIN);
        assert_eq!(top.offset(IVec3::Y), BlockPos::new(0, i32::MIN, i32::MIN));
        assert_eq!(top.offset(IVec3::NEG_Z), BlockPos::new(0, i32::MAX, i32::MAX));
    }

    #[test]
    fn test_relative() {
        let p = BlockPos::ORIGIN;
        assert_eq!(p.relative(Direction::Up), BlockPos::new(0, 1, 0));
        assert_eq!(p.relative(Direction::Down), BlockPos::new(0, -1, 0));
        assert_eq!(p.relative(Direction::East), BlockPos::new(1, 0, 0));
        assert_eq!(p.relative(Direction::North), BlockPos::new(0, 0, -1));
    }

    #[test]
    fn test_chunk() {
        assert_eq!(BlockPos::new(0, 0, 0).chunk(), ChunkPos::new(0, 0, 0));
        assert_eq!(BlockPos::new(15, 15, 15).chunk(), ChunkPos::new(0, 0, 0));
        assert_eq!(BlockPos::new(16, 0, 31).chunk(), ChunkPos::new(1, 0, 1));

        // Negative coordinates round towards negative infinity
        assert_eq!(BlockPos::new(-1, -16, -17).chunk(), ChunkPos::new(-1, -1, -2));
    }

    #[test]
    fn test_min_cell() {
        assert_eq!(ChunkPos::new(1, -1, 0).min_cell(), BlockPos::new(16, -16, 0));
        assert_eq!(BlockPos::new(-5, 20, 3).chunk().min_cell(), BlockPos::new(-16, 16, 0));
        // Extreme chunk coordinates do not overflow
        let edge = BlockPos::new(i32::MAX, i32::MIN, 0).chunk();
        assert_eq!(edge.min_cell(), BlockPos::new(i32::MAX - 15, i32::MIN, 0));
        assert_eq!(ChunkPos::new(i32::MAX, 0, 0).min_cell(), BlockPos::new(-16, 0, 0));
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = BlockPos::new(0, 0, 0);
        assert_eq!(a.chebyshev_distance(a), 0);
        assert_eq!(a.chebyshev_distance(BlockPos::new(3, -7, 2)), 7);
        assert_eq!(BlockPos::new(-2, 0, 0).chebyshev_distance(BlockPos::new(2, 1, 1)), 4);
        // No overflow across the whole coordinate range
        assert_eq!(
            BlockPos::new(i32::MIN, 0, 0).chebyshev_distance(BlockPos::new(i32::MAX, 0, 0)),
            u32::MAX
        );
    }

    #[test]
    fn test_ivec3_conversion() {
        let p = BlockPos::new(4, -2, 9);
        let v: IVec3 = p.into();
        assert_eq!(v, IVec3::new(4, -2, 9));
        assert_eq!(BlockPos::from(v), p);
    }
}
