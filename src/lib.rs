//! Regionscan - flood-fill region discovery and classification over sparse
//! voxel grids.
//!
//! A [`RegionScanner`](scan::RegionScanner) walks the connected region
//! reachable from an origin, skipping cells the world cannot currently
//! resolve, and buckets every visited cell by the classifiers it matches.

pub mod core;
pub mod scan;
