//! Chunked sparse voxel storage with explicit chunk loading

use std::collections::HashMap;

use super::cell::{Cell, CellLookup};
use super::pos::{BlockPos, ChunkPos};

/// Cells of one loaded chunk. Unset cells read as the grid's empty value.
#[derive(Clone, Debug)]
struct GridChunk<T> {
    cells: HashMap<BlockPos, T>,
}

impl<T> GridChunk<T> {
    fn new() -> Self {
        Self { cells: HashMap::new() }
    }
}

/// Sparse voxel grid split into cubic chunks that can be loaded and unloaded.
///
/// Lookups in an unloaded chunk are [`Cell::Unavailable`]; lookups of unset
/// cells in a loaded chunk resolve to the `empty` value (air).
#[derive(Clone, Debug)]
pub struct SparseGrid<T> {
    chunks: HashMap<ChunkPos, GridChunk<T>>,
    empty: T,
}

impl<T: Clone> SparseGrid<T> {
    /// Create a grid with no loaded chunks
    pub fn new(empty: T) -> Self {
        Self {
            chunks: HashMap::new(),
            empty,
        }
    }

    /// Set a cell, loading its chunk if needed
    pub fn set(&mut self, pos: BlockPos, value: T) {
        self.chunks
            .entry(pos.chunk())
            .or_insert_with(GridChunk::new)
            .cells
            .insert(pos, value);
    }

    /// Fill every cell in the inclusive box `min..=max`
    pub fn fill_box(&mut self, min: BlockPos, max: BlockPos, value: T) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set(BlockPos::new(x, y, z), value.clone());
                }
            }
        }
    }

    /// Reset a cell to empty and return its previous value
    pub fn remove(&mut self, pos: BlockPos) -> Option<T> {
        self.chunks.get_mut(&pos.chunk())?.cells.remove(&pos)
    }

    /// Get a cell. Returns `None` when its chunk is not loaded.
    pub fn get(&self, pos: BlockPos) -> Option<&T> {
        let chunk = self.chunks.get(&pos.chunk())?;
        Some(chunk.cells.get(&pos).unwrap_or(&self.empty))
    }

    /// Load an empty chunk. Already loaded chunks are left as they are.
    pub fn load_chunk(&mut self, coord: ChunkPos) {
        self.chunks.entry(coord).or_insert_with(GridChunk::new);
    }

    /// Unload a chunk, dropping its cells. Returns whether it was loaded.
    pub fn unload_chunk(&mut self, coord: ChunkPos) -> bool {
        self.chunks.remove(&coord).is_some()
    }

    pub fn is_loaded(&self, coord: ChunkPos) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Get the number of loaded chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of explicitly set cells across loaded chunks
    pub fn cell_count(&self) -> usize {
        self.chunks.values().map(|c| c.cells.len()).sum()
    }
}

impl<T: Clone> CellLookup<T> for SparseGrid<T> {
    fn resolve(&self, pos: BlockPos) -> Cell<T> {
        self.get(pos).cloned().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = SparseGrid::new(0u8);
        assert_eq!(grid.chunk_count(), 0);
        assert_eq!(grid.resolve(BlockPos::ORIGIN), Cell::Unavailable);
    }

    #[test]
    fn test_set_loads_chunk() {
        let mut grid = SparseGrid::new(0u8);
        grid.set(BlockPos::new(3, 4, 5), 9);

        assert!(grid.is_loaded(ChunkPos::new(0, 0, 0)));
        assert_eq!(grid.get(BlockPos::new(3, 4, 5)), Some(&9));
        // Same chunk, unset cell reads as empty
        assert_eq!(grid.resolve(BlockPos::new(0, 0, 0)), Cell::Resolved(0));
        // Neighbouring chunk was never loaded
        assert_eq!(grid.resolve(BlockPos::new(16, 0, 0)), Cell::Unavailable);
    }

    #[test]
    fn test_unload_chunk() {
        let mut grid = SparseGrid::new(0u8);
        grid.set(BlockPos::new(-1, 0, 0), 1);
        grid.set(BlockPos::new(1, 0, 0), 2);
        assert_eq!(grid.chunk_count(), 2);

        assert!(grid.unload_chunk(ChunkPos::new(-1, 0, 0)));
        assert!(!grid.unload_chunk(ChunkPos::new(-1, 0, 0)));

        assert_eq!(grid.resolve(BlockPos::new(-1, 0, 0)), Cell::Unavailable);
        assert_eq!(grid.resolve(BlockPos::new(1, 0, 0)), Cell::Resolved(2));
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn test_load_chunk_keeps_existing_cells() {
        let mut grid = SparseGrid::new(0u8);
        grid.set(BlockPos::new(2, 2, 2), 5);
        grid.load_chunk(ChunkPos::new(0, 0, 0));
        assert_eq!(grid.get(BlockPos::new(2, 2, 2)), Some(&5));

        grid.load_chunk(ChunkPos::new(0, 1, 0));
        assert_eq!(grid.resolve(BlockPos::new(0, 20, 0)), Cell::Resolved(0));
    }

    #[test]
    fn test_fill_box_and_remove() {
        let mut grid = SparseGrid::new('.');
        grid.fill_box(BlockPos::new(-1, -1, -1), BlockPos::new(1, 1, 1), '#');
        assert_eq!(grid.cell_count(), 27);
        // Box straddles the chunk boundary at zero
        assert_eq!(grid.chunk_count(), 8);

        assert_eq!(grid.remove(BlockPos::ORIGIN), Some('#'));
        assert_eq!(grid.resolve(BlockPos::ORIGIN), Cell::Resolved('.'));
        assert_eq!(grid.remove(BlockPos::new(100, 0, 0)), None);
    }
}
