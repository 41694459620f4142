//! Scan configuration, loadable from JSON

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cell::Bounded;
use super::classifier::ClassifierSet;
use super::direction::Connectivity;
use super::pos::BlockPos;
use super::scanner::RegionScanner;
use crate::core::Result;

/// Settings for a plain, data-independent scan
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Neighbourhood expanded from every resolved cell
    pub connectivity: Connectivity,
    /// Maximum Chebyshev distance from the origin; `None` scans until the
    /// lookup runs out of resolvable cells
    pub max_radius: Option<u32>,
}

impl ScanConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save to file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Wrap a lookup so nothing beyond `max_radius` of `center` resolves
    pub fn bound<L>(&self, center: BlockPos, lookup: L) -> Bounded<L> {
        Bounded::new(lookup, center, self.max_radius.unwrap_or(u32::MAX))
    }

    /// Scanner expanding with this config's connectivity
    pub fn scanner<T: Clone>(
        &self,
        origin: BlockPos,
        classifiers: ClassifierSet<T>,
    ) -> RegionScanner<T, Connectivity> {
        RegionScanner::new(origin, self.connectivity, classifiers)
    }
}
