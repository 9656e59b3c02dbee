//! Path-keyed dataset memoization.
//!
//! The sales file is loaded and cleaned once per distinct path for the
//! process lifetime; every subsequent request for the same path reuses the
//! cached [`Dataset`] without touching the filesystem. Invalidation is
//! manual — there is no TTL and no hidden global state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dash_core::error::Result;
use dash_core::models::Dataset;
use tracing::debug;

use crate::pipeline::build_dataset;
use crate::reader::read_table;

/// Explicit cache mapping file path → loaded dataset.
///
/// Paths are compared as given (no canonicalization): two spellings of the
/// same file are two cache entries.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the dataset for `path`, loading and cleaning it on first use.
    ///
    /// Read or validation failures are returned to the caller and leave no
    /// cache entry behind, so a later retry re-reads the file.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Dataset>> {
        if let Some(dataset) = self.entries.get(path) {
            debug!("dataset cache hit for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let table = read_table(path)?;
        let dataset = Arc::new(build_dataset(&table, path)?);
        debug!(
            "dataset cache miss for {}; loaded {} rows",
            path.display(),
            dataset.len()
        );

        self.entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the cache entry for `path`. Returns `true` when one existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Drop every cache entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `true` when `path` has a cached dataset.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
