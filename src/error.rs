//! Error types for infinite stream operations
//!
//! Only two operations can fail: cycling an empty sequence and asking an
//! infinite stream for its end. Both are contract violations by the caller,
//! so there is no retry machinery here.

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A periodic stream was requested from an empty finite sequence
    #[error("cannot cycle an empty sequence")]
    EmptyInput,
    /// The operation needs a finite bound the stream does not have
    #[error("unsupported operation on an infinite stream: {0}")]
    UnsupportedOperation(&'static str),
    /// A configuration document could not be read
    #[error("invalid stream configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::Config(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
