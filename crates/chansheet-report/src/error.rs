use chansheet_core::GridError;
use thiserror::Error;

/// Result type alias using [`ReportError`]
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while preparing report input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Month keys must be zero-padded `YYYY-MM`
    #[error("Invalid month key: {0:?}")]
    InvalidMonthKey(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
