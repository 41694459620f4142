//! Region scanning over sparse voxel grids

pub mod pos;
pub mod direction;
pub mod cell;
pub mod grid;
pub mod adjacency;
pub mod classifier;
pub mod extent;
pub mod scanner;
pub mod multi;
pub mod config;

pub use pos::{BlockPos, ChunkPos, CHUNK_SIZE};
pub use direction::{Connectivity, Direction};
pub use cell::{Bounded, Cell, CellLookup};
pub use grid::SparseGrid;
pub use adjacency::{AdjacencyRule, Directions, ExpandWhere};
pub use classifier::{Classifier, ClassifierId, ClassifierSet};
pub use extent::VerticalExtent;
pub use scanner::{Matches, RegionScanner, ScanStats};
pub use multi::{merge_all, scan_many};
pub use config::ScanConfig;
