use thiserror::Error;

/// Result type alias using [`SinkError`]
pub type Result<T> = std::result::Result<T, SinkError>;

/// Failure reported by a [`SheetTransport`](crate::SheetTransport) call
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

/// Fatal sink errors
#[derive(Error, Debug)]
pub enum SinkError {
    /// The bulk value write failed; no formatting was attempted
    #[error("Value write failed: {0}")]
    ValueWrite(#[source] TransportError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A format range the destination did not apply.
///
/// Never returned as `Err`: collected in the export outcome next to the
/// data write that already succeeded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Format range #{index} ({range}) not applied: {reason}")]
pub struct FormatWriteError {
    /// Position in the grid's format list
    pub index: usize,
    /// Destination range in A1 notation
    pub range: String,
    pub reason: String,
}
