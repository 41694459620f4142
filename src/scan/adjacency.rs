//! Adjacency rules: which neighbours a scan expands into from a given cell.

use glam::IVec3;

use super::direction::{Connectivity, Direction};

/// Decides the search topology.
///
/// Given the data of a resolved cell, returns the relative offsets of the
/// cells to visit next, in order. The scanner treats the result as opaque;
/// offsets pointing at already-visited cells are simply dropped.
pub trait AdjacencyRule<T> {
    fn expand(&self, data: &T) -> Vec<IVec3>;
}

impl<T> AdjacencyRule<T> for Connectivity {
    fn expand(&self, _data: &T) -> Vec<IVec3> {
        self.offsets().to_vec()
    }
}

/// Fixed set of face directions, independent of cell data
#[derive(Clone, Debug)]
pub struct Directions(pub Vec<Direction>);

impl<T> AdjacencyRule<T> for Directions {
    fn expand(&self, _data: &T) -> Vec<IVec3> {
        self.0.iter().map(|d| d.offset()).collect()
    }
}

impl<T, F> AdjacencyRule<T> for F
where
    F: Fn(&T) -> Vec<IVec3>,
{
    fn expand(&self, data: &T) -> Vec<IVec3> {
        self(data)
    }
}

/// Expands through `rule` only from cells matching `predicate`.
///
/// Cells failing the predicate are leaves: the scanner still classifies
/// them, but grows no further from them. This is how a scan over a tree
/// stops at the dirt it is planted in.
#[derive(Clone, Debug)]
pub struct ExpandWhere<R, P> {
    rule: R,
    predicate: P,
}

impl<R, P> ExpandWhere<R, P> {
    pub fn new(rule: R, predicate: P) -> Self {
        Self { rule, predicate }
    }
}

impl<T, R, P> AdjacencyRule<T> for ExpandWhere<R, P>
where
    R: AdjacencyRule<T>,
    P: Fn(&T) -> bool,
{
    fn expand(&self, data: &T) -> Vec<IVec3> {
        if (self.predicate)(data) {
            self.rule.expand(data)
        } else {
            Vec::new()
        }
    }
}
