//! Cell resolution: the world-access seam of the scanner.

use super::pos::BlockPos;

/// Outcome of resolving a coordinate.
///
/// `Unavailable` means the cell cannot currently be resolved (its chunk is
/// not loaded, or it lies outside any addressable region). The scanner treats
/// it as a dead end, never as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell<T> {
    Resolved(T),
    Unavailable,
}

impl<T> Cell<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Resolved(_))
    }

    /// Convert into an `Option`, dropping the unavailable marker
    pub fn resolved(self) -> Option<T> {
        match self {
            Cell::Resolved(data) => Some(data),
            Cell::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for Cell<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(data) => Cell::Resolved(data),
            None => Cell::Unavailable,
        }
    }
}

/// Resolves coordinates to cell data.
///
/// Implementations must behave as a pure function of the coordinate for the
/// duration of a scan. An unavailable answer is treated as permanent for that
/// coordinate within one scan.
pub trait CellLookup<T> {
    fn resolve(&self, pos: BlockPos) -> Cell<T>;
}

impl<T, F> CellLookup<T> for F
where
    F: Fn(BlockPos) -> Cell<T>,
{
    fn resolve(&self, pos: BlockPos) -> Cell<T> {
        self(pos)
    }
}

/// Lookup wrapper that reports everything farther than `radius` (Chebyshev
/// distance) from `center` as unavailable.
///
/// The scanner has no work limit of its own; wrapping the world in a
/// `Bounded` is how a caller caps a scan over open terrain.
#[derive(Clone, Debug)]
pub struct Bounded<L> {
    inner: L,
    center: BlockPos,
    radius: u32,
}

impl<L> Bounded<L> {
    pub fn new(inner: L, center: BlockPos, radius: u32) -> Self {
        Self { inner, center, radius }
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        pos.chebyshev_distance(self.center) <= self.radius
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<T, L: CellLookup<T>> CellLookup<T> for Bounded<L> {
    fn resolve(&self, pos: BlockPos) -> Cell<T> {
        if self.contains(pos) {
            self.inner.resolve(pos)
        } else {
            Cell::Unavailable
        }
    }
}
