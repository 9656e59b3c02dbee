use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the sales dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The sales file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited structure of the file could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the pipeline requires.
    #[error("Missing required column \"{column}\" in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// The file parsed but contained no data rows.
    #[error("No transaction rows found in {0}")]
    EmptyDataset(PathBuf),

    /// An agent selector named an agent absent from the dataset.
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    /// No sales file was given and none could be discovered.
    #[error("No sales data file found; pass --data-file")]
    NoDataFile,

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DashboardError::FileRead {
            path: PathBuf::from("/some/oct_sales.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/oct_sales.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = DashboardError::MissingColumn {
            column: "Total GP".to_string(),
            path: PathBuf::from("sales.csv"),
        };
        let msg = err.to_string();
        assert_eq!(msg, "Missing required column \"Total GP\" in sales.csv");
    }

    #[test]
    fn test_error_display_empty_dataset() {
        let err = DashboardError::EmptyDataset(PathBuf::from("empty.csv"));
        assert_eq!(err.to_string(), "No transaction rows found in empty.csv");
    }

    #[test]
    fn test_error_display_unknown_agent() {
        let err = DashboardError::UnknownAgent("Nadia".to_string());
        assert_eq!(err.to_string(), "Unknown agent: Nadia");
    }

    #[test]
    fn test_error_display_no_data_file() {
        let err = DashboardError::NoDataFile;
        assert!(err.to_string().contains("--data-file"));
    }

    #[test]
    fn test_error_display_terminal() {
        let err = DashboardError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashboardError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
