use thiserror::Error;

/// Result type alias using [`GridError`]
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building or composing grids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Malformed row or record input; nothing was built
    #[error("Invalid grid input: {0}")]
    Construction(String),

    /// Column interleave requires both grids to have the same row count
    #[error("Column merge requires same row count: {left} != {right}")]
    SizeMismatch { left: usize, right: usize },
}

impl GridError {
    /// Create a construction error with a message
    pub fn construction<S: Into<String>>(msg: S) -> Self {
        GridError::Construction(msg.into())
    }
}
