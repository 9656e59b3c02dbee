//! The dashboard engine.
//!
//! One engine is constructed per session and passed explicitly into each
//! interaction — there is no script-level mutable state. Every selection
//! change re-runs the filter + aggregate pipeline against the memoized
//! dataset and returns a fresh [`DashboardSnapshot`].

use std::path::{Path, PathBuf};

use dash_core::error::{DashboardError, Result};
use dash_core::models::{AgentFilter, ALL_AGENTS};
use dash_data::cache::DatasetCache;
use dash_data::pipeline::agent_options;
use dash_data::snapshot::{build_snapshot, DashboardSnapshot};
use tracing::{debug, info};

/// Stateful owner of the dataset cache and the current agent selection.
#[derive(Debug)]
pub struct DashboardEngine {
    /// Path-keyed dataset memo; the data file is read once per process.
    cache: DatasetCache,
    /// The sales file this engine serves.
    data_file: PathBuf,
    /// Selector options: `"All Agents"` + distinct agents, first-seen order.
    agents: Vec<String>,
    /// Current selection.
    selection: AgentFilter,
}

impl DashboardEngine {
    /// Load the sales file and build the selector options.
    ///
    /// Read and validation failures (missing file, missing column, empty
    /// body) are fatal here — a dashboard without data has nothing to show.
    pub fn new(data_file: PathBuf) -> Result<Self> {
        let mut cache = DatasetCache::new();
        let dataset = cache.get_or_load(&data_file)?;
        let agents = agent_options(&dataset);

        info!(
            "engine ready: {} rows, {} agents from {}",
            dataset.len(),
            agents.len() - 1,
            data_file.display()
        );

        Ok(Self {
            cache,
            data_file,
            agents,
            selection: AgentFilter::All,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Selector options, sentinel first.
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// The current agent filter.
    pub fn selection(&self) -> &AgentFilter {
        &self.selection
    }

    /// Index of the current selection within [`agents`](Self::agents).
    pub fn selection_index(&self) -> usize {
        self.agents
            .iter()
            .position(|a| a == self.selection.label())
            .unwrap_or(0)
    }

    /// The sales file this engine serves.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    // ── Interactions ──────────────────────────────────────────────────────────

    /// Change the selection and return the recomputed render model.
    ///
    /// A selector naming an agent absent from the dataset is rejected with
    /// [`DashboardError::UnknownAgent`] and leaves the selection unchanged.
    pub fn select(&mut self, selector: &str) -> Result<DashboardSnapshot> {
        let filter = AgentFilter::from_selector(selector);
        if let AgentFilter::Agent(name) = &filter {
            if !self.agents.iter().any(|a| a == name) {
                return Err(DashboardError::UnknownAgent(name.clone()));
            }
        }
        debug!("selection changed to \"{}\"", filter.label());
        self.selection = filter;
        self.snapshot()
    }

    /// Recompute the render model for the current selection.
    pub fn snapshot(&mut self) -> Result<DashboardSnapshot> {
        let dataset = self.cache.get_or_load(&self.data_file)?;
        Ok(build_snapshot(&dataset, &self.selection))
    }

    /// Re-read the sales file, rebuild the selector options, and recompute.
    ///
    /// When the previously selected agent no longer exists in the new data,
    /// the selection falls back to All Agents.
    pub fn reload(&mut self) -> Result<DashboardSnapshot> {
        self.cache.invalidate(&self.data_file);
        let dataset = self.cache.get_or_load(&self.data_file)?;
        self.agents = agent_options(&dataset);

        if let AgentFilter::Agent(name) = &self.selection {
            if !self.agents.iter().any(|a| a == name) {
                debug!("agent \"{}\" vanished on reload; selecting {}", name, ALL_AGENTS);
                self.selection = AgentFilter::All;
            }
        }

        info!("reloaded {} rows from {}", dataset.len(), self.data_file.display());
        Ok(build_snapshot(&dataset, &self.selection))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
