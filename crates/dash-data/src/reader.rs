//! CSV file discovery and loading for the sales dashboard.
//!
//! Reads a delimited sales export into a [`RawTable`] of untyped cells for
//! downstream cleaning. Decoding tries UTF-8 first and falls back to Latin-1;
//! this retry is the only recovery path — missing files, malformed CSV
//! structure, missing columns and empty bodies are surfaced as named errors.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use dash_core::error::{DashboardError, Result};
use tracing::{debug, warn};

/// Column names the pipeline requires in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Date",
    "Agent",
    "Company",
    "Total Revenue",
    "Total Selling",
    "Total GP",
    "Payment Mode/Status",
];

// ── RawTable ──────────────────────────────────────────────────────────────────

/// An untyped view of one delimited file: header names plus string cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column names from the header row, in file order.
    pub headers: Vec<String>,
    /// Data rows, one `Vec<String>` per record.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Position of `name` in the header row, or `None` when absent.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `data_path`, sorted by path.
pub fn find_csv_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Read and parse one sales CSV into a [`RawTable`].
///
/// * Decoding: UTF-8, then a Latin-1 retry on decode failure.
/// * The header row must contain every [`REQUIRED_COLUMNS`] entry.
/// * Fully blank records are skipped; a file with no remaining data rows is
///   an [`DashboardError::EmptyDataset`].
pub fn read_table(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_bytes(bytes, path);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashboardError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(DashboardError::EmptyDataset(path.to_path_buf()));
    }

    debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(RawTable { headers, rows })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Decode file bytes as UTF-8, retrying as Latin-1 on failure.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail.
fn decode_bytes(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(
                "UTF-8 decode failed for {}; retrying as Latin-1",
                path.display()
            );
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
