//! Core domain types and helpers for the sales dashboard.
//!
//! Holds the transaction/dataset models, cell coercion rules, display
//! formatting, the error type shared by all dashboard crates, and CLI
//! settings handling.

pub mod coercion;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
