//! Flood-fill region scanner.
//!
//! Walks the connected region reachable from an origin under an
//! [`AdjacencyRule`], skipping cells the [`CellLookup`] cannot resolve, and
//! files every visited cell under each classifier it matches. The vertical
//! extent of matched cells is tracked along the way.

use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::AddAssign;
use std::sync::Arc;

use super::adjacency::AdjacencyRule;
use super::cell::{Cell, CellLookup};
use super::classifier::{Classifier, ClassifierId, ClassifierSet};
use super::extent::VerticalExtent;
use super::pos::BlockPos;

/// Cells matched by one classifier, keyed by position
pub type Matches<T> = HashMap<BlockPos, T>;

/// Per-scan counters, for diagnostics only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Cells taken off the queue
    pub visited: usize,
    /// Visited cells the lookup resolved
    pub resolved: usize,
    /// Visited cells the lookup reported unavailable
    pub unavailable: usize,
    /// Resolved cells matching at least one classifier
    pub matched: usize,
    /// Neighbours newly queued during search
    pub enqueued: usize,
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visited += rhs.visited;
        self.resolved += rhs.resolved;
        self.unavailable += rhs.unavailable;
        self.matched += rhs.matched;
        self.enqueued += rhs.enqueued;
    }
}

/// Visited-set guarded flood fill with classification.
///
/// Lifecycle: construct with an origin, run [`search`](Self::search) to
/// drain the queue, optionally [`merge`](Self::merge) other scanners in, then
/// read the results and extent.
pub struct RegionScanner<T, A> {
    origin: BlockPos,
    adjacency: A,
    classifiers: ClassifierSet<T>,
    /// Cells waiting to be visited
    to_visit: VecDeque<BlockPos>,
    /// Every cell ever enqueued, resolved or not
    visited: HashSet<BlockPos>,
    results: HashMap<ClassifierId, Matches<T>>,
    extent: VerticalExtent,
    stats: ScanStats,
}

impl<T: Clone, A: AdjacencyRule<T>> RegionScanner<T, A> {
    /// Create a scanner with `origin` as the only queued cell.
    ///
    /// An empty classifier set is allowed; nothing is classified and the
    /// extent stays on the origin.
    pub fn new(origin: BlockPos, adjacency: A, classifiers: ClassifierSet<T>) -> Self {
        let results = classifiers
            .iter()
            .map(|c| (c.id(), Matches::new()))
            .collect();

        let mut scanner = Self {
            origin,
            adjacency,
            classifiers,
            to_visit: VecDeque::new(),
            visited: HashSet::new(),
            results,
            extent: VerticalExtent::new(origin),
            stats: ScanStats::default(),
        };
        scanner.try_enqueue(origin);
        scanner
    }

    /// Mark `pos` visited and queue it. Returns `false` (and queues nothing)
    /// when it was already visited.
    pub fn try_enqueue(&mut self, pos: BlockPos) -> bool {
        if self.visited.insert(pos) {
            self.to_visit.push_back(pos);
            true
        } else {
            false
        }
    }

    /// Drain the work queue.
    ///
    /// Unavailable cells are dead ends: not expanded, not classified, but
    /// still visited so they are never queued again. Returns the counters of
    /// this call; [`stats`](Self::stats) holds the running totals.
    pub fn search<L: CellLookup<T> + ?Sized>(&mut self, lookup: &L) -> ScanStats {
        let mut run = ScanStats::default();

        while let Some(pos) = self.to_visit.pop_front() {
            run.visited += 1;

            let data = match lookup.resolve(pos) {
                Cell::Resolved(data) => data,
                Cell::Unavailable => {
                    log::trace!("Skipping unavailable cell {:?}", pos);
                    run.unavailable += 1;
                    continue;
                }
            };
            run.resolved += 1;

            for delta in self.adjacency.expand(&data) {
                if self.try_enqueue(pos.offset(delta)) {
                    run.enqueued += 1;
                }
            }

            let mut matched = false;
            for classifier in self.classifiers.iter() {
                if classifier.test(&data) {
                    self.results
                        .entry(classifier.id())
                        .or_default()
                        .insert(pos, data.clone());
                    matched = true;
                }
            }

            if matched {
                run.matched += 1;
                self.extent.record(pos);
            }
        }

        log::debug!(
            "Scan from {:?}: visited {} cells ({} unavailable), {} matched, extent y {}..={}",
            self.origin,
            run.visited,
            run.unavailable,
            run.matched,
            self.extent.lowest.y,
            self.extent.highest.y,
        );

        self.stats += run;
        run
    }

    /// Absorb another scanner, as if both had shared one visited set and one
    /// result map from the start.
    ///
    /// Classifiers only known to `other` are adopted. The pending queue of
    /// `self` is left alone and that of `other` is dropped. Where both
    /// scanners hold a match for the same cell under one classifier, the
    /// entry of `self` is kept.
    pub fn merge<B>(&mut self, other: RegionScanner<T, B>) -> &mut Self {
        self.extent.absorb(&other.extent);
        self.visited.extend(other.visited);

        for classifier in other.classifiers.iter() {
            self.classifiers.push(Arc::clone(classifier));
        }
        for (id, matches) in other.results {
            let target = self.results.entry(id).or_default();
            for (pos, data) in matches {
                target.entry(pos).or_insert(data);
            }
        }

        self.stats += other.stats;
        self
    }
}

impl<T, A> RegionScanner<T, A> {
    pub fn origin(&self) -> BlockPos {
        self.origin
    }

    /// Lowest matched cell, or the origin if nothing matched
    pub fn lowest_point(&self) -> BlockPos {
        self.extent.lowest
    }

    /// Highest matched cell, or the origin if nothing matched
    pub fn highest_point(&self) -> BlockPos {
        self.extent.highest
    }

    pub fn extent(&self) -> &VerticalExtent {
        &self.extent
    }

    pub fn results(&self) -> &HashMap<ClassifierId, Matches<T>> {
        &self.results
    }

    /// Matches of one classifier
    pub fn matches(&self, id: ClassifierId) -> Option<&Matches<T>> {
        self.results.get(&id)
    }

    pub fn into_results(self) -> HashMap<ClassifierId, Matches<T>> {
        self.results
    }

    pub fn visited(&self) -> &HashSet<BlockPos> {
        &self.visited
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_visited(&self, pos: BlockPos) -> bool {
        self.visited.contains(&pos)
    }

    /// Number of cells still queued
    pub fn pending(&self) -> usize {
        self.to_visit.len()
    }

    /// True once the queue has been drained
    pub fn is_complete(&self) -> bool {
        self.to_visit.is_empty()
    }

    pub fn classifiers(&self) -> impl Iterator<Item = &Arc<Classifier<T>>> {
        self.classifiers.iter()
    }

    /// Running totals over every search (and merged scanner)
    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}
