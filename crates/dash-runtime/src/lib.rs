//! Runtime layer for the sales dashboard.
//!
//! Owns the dataset cache and the current agent selection, and turns
//! selection events from the UI into fresh dashboard snapshots.

pub mod engine;
pub mod events;

pub use dash_core as core;
pub use dash_data as data;
