//! Cardinal directions and neighbourhood presets

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned faces of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All six directions
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four horizontal directions
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit offset towards this face. North is -z, east is +x.
    pub const fn offset(self) -> IVec3 {
        match self {
            Direction::Down => IVec3::NEG_Y,
            Direction::Up => IVec3::Y,
            Direction::North => IVec3::NEG_Z,
            Direction::South => IVec3::Z,
            Direction::West => IVec3::NEG_X,
            Direction::East => IVec3::X,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

const fn v(x: i32, y: i32, z: i32) -> IVec3 {
    IVec3::new(x, y, z)
}

// Ordered faces, then edges, then corners so each preset is a prefix.
const NEIGHBOURS: [IVec3; 26] = [
    // faces
    v(0, -1, 0), v(0, 1, 0), v(0, 0, -1), v(0, 0, 1), v(-1, 0, 0), v(1, 0, 0),
    // edges
    v(-1, -1, 0), v(1, -1, 0), v(0, -1, -1), v(0, -1, 1),
    v(-1, 1, 0), v(1, 1, 0), v(0, 1, -1), v(0, 1, 1),
    v(-1, 0, -1), v(1, 0, -1), v(-1, 0, 1), v(1, 0, 1),
    // corners
    v(-1, -1, -1), v(1, -1, -1), v(-1, -1, 1), v(1, -1, 1),
    v(-1, 1, -1), v(1, 1, -1), v(-1, 1, 1), v(1, 1, 1),
];

/// Neighbourhood shape used for unconditional expansion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// 6 face neighbours
    #[default]
    Faces,
    /// 18 face and edge neighbours
    Edges,
    /// All 26 surrounding cells
    Corners,
}

impl Connectivity {
    /// Relative offsets of this neighbourhood, faces first
    pub fn offsets(self) -> &'static [IVec3] {
        match self {
            Connectivity::Faces => &NEIGHBOURS[..6],
            Connectivity::Edges => &NEIGHBOURS[..18],
            Connectivity::Corners => &NEIGHBOURS[..],
        }
    }
}
