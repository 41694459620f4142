//! Scanning from several origins at once.
//!
//! Each origin gets its own single-threaded [`RegionScanner`]; the scanners
//! run on the rayon pool and are folded together with
//! [`RegionScanner::merge`]. Scanners never share state mid-scan.

use rayon::prelude::*;

use super::adjacency::AdjacencyRule;
use super::cell::CellLookup;
use super::classifier::ClassifierSet;
use super::pos::BlockPos;
use super::scanner::RegionScanner;

/// Fold scanners into the first one. Returns `None` for an empty sequence.
pub fn merge_all<T, A, I>(scanners: I) -> Option<RegionScanner<T, A>>
where
    T: Clone,
    A: AdjacencyRule<T>,
    I: IntoIterator<Item = RegionScanner<T, A>>,
{
    let mut iter = scanners.into_iter();
    let mut combined = iter.next()?;
    for scanner in iter {
        combined.merge(scanner);
    }
    Some(combined)
}

/// Scan from every origin in parallel and merge the results.
///
/// Origins inside the same connected region are scanned redundantly; the
/// merged result is the same either way. Returns `None` when `origins` is
/// empty.
pub fn scan_many<T, A, L>(
    origins: &[BlockPos],
    adjacency: &A,
    classifiers: &ClassifierSet<T>,
    lookup: &L,
) -> Option<RegionScanner<T, A>>
where
    T: Clone + Send,
    A: AdjacencyRule<T> + Clone + Send + Sync,
    L: CellLookup<T> + Sync + ?Sized,
{
    let start = std::time::Instant::now();

    let scanners: Vec<_> = origins
        .par_iter()
        .map(|&origin| {
            let mut scanner = RegionScanner::new(origin, adjacency.clone(), classifiers.clone());
            scanner.search(lookup);
            scanner
        })
        .collect();

    let combined = merge_all(scanners)?;
    log::info!(
        "Scanned {} origins in {:.1}ms: {} cells visited, {} matched",
        origins.len(),
        start.elapsed().as_secs_f64() * 1000.0,
        combined.visited_count(),
        combined.stats().matched,
    );
    Some(combined)
}
