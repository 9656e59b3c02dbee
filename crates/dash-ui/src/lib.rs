//! Terminal UI layer for the sales dashboard.
//!
//! Provides themes, the KPI tile row, bar-chart views and the main
//! application event loop built on top of [`ratatui`] for rendering the
//! dashboard in the terminal.

pub mod app;
pub mod chart_view;
pub mod kpi_view;
pub mod themes;

pub use dash_core as core;
