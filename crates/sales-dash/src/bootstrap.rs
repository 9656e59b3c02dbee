use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.sales-dash/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.sales-dash/`
/// - `~/.sales-dash/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let dash_dir = home.join(".sales-dash");
    std::fs::create_dir_all(&dash_dir)?;
    std::fs::create_dir_all(dash_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    // Map conventional log-level names to tracing level names (lowercase).
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-file discovery ────────────────────────────────────────────────────────

/// Attempt to locate a sales CSV on the local system.
///
/// Checks, in order:
/// 1. `./oct_sales.csv`
/// 2. `./sales.csv`
/// 3. The first CSV (sorted) under `./data/`
/// 4. The first CSV (sorted) under `~/.sales-dash/data/`
///
/// Returns `None` when nothing is found.
pub fn discover_data_file() -> Option<PathBuf> {
    let cwd_candidates = [PathBuf::from("oct_sales.csv"), PathBuf::from("sales.csv")];
    for candidate in cwd_candidates {
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let mut scan_dirs = vec![PathBuf::from("data")];
    if let Some(home) = dirs::home_dir() {
        scan_dirs.push(home.join(".sales-dash").join("data"));
    }

    for dir in scan_dirs {
        if !dir.is_dir() {
            continue;
        }
        if let Some(first) = dash_data::reader::find_csv_files(&dir).into_iter().next() {
            return Some(first);
        }
    }

    None
}

// ── Tests ──────────────────────────────────────────────────────────────────────
