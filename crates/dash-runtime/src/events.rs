//! Selection events from the UI layer.
//!
//! The UI maps key presses to [`DashboardEvent`]s and hands them to the
//! engine; each event yields a complete fresh snapshot, keeping the UI free
//! of pipeline knowledge.

use dash_core::error::Result;
use dash_core::models::ALL_AGENTS;
use dash_data::snapshot::DashboardSnapshot;

use crate::engine::DashboardEngine;

/// A single user interaction with the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Select a specific selector value (agent name or the sentinel).
    Select(String),
    /// Jump to the All-Agents sentinel.
    SelectAll,
    /// Cycle forward through the selector options.
    NextAgent,
    /// Cycle backward through the selector options.
    PrevAgent,
    /// Re-read the sales file.
    Reload,
}

impl DashboardEngine {
    /// Apply one event and return the recomputed render model.
    pub fn handle_event(&mut self, event: DashboardEvent) -> Result<DashboardSnapshot> {
        match event {
            DashboardEvent::Select(selector) => self.select(&selector),
            DashboardEvent::SelectAll => self.select(ALL_AGENTS),
            DashboardEvent::NextAgent => {
                let next = (self.selection_index() + 1) % self.agents().len();
                let selector = self.agents()[next].clone();
                self.select(&selector)
            }
            DashboardEvent::PrevAgent => {
                let count = self.agents().len();
                let prev = (self.selection_index() + count - 1) % count;
                let selector = self.agents()[prev].clone();
                self.select(&selector)
            }
            DashboardEvent::Reload => self.reload(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
