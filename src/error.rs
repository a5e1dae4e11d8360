use thiserror::Error;

/// Main error type for the csvbook library.
/// Aggregates errors from various sources including standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum CsvBookError {
    #[error("{0}")]
    WithContextError(String),

    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    PatternError(#[from] glob::PatternError),

    #[error("{0}")]
    GlobError(#[from] glob::GlobError),

    // Table module errors
    #[error("{0}")]
    TableError(#[from] crate::table::TableError),

    // Workbook module errors
    #[error("{0}")]
    SinkError(#[from] crate::workbook::SinkError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, CsvBookError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| CsvBookError::WithContextError(format!("{}: {}", message, e)))
    }
}
