use thiserror::Error;

/// Error types for toolbelt operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Character offset past the end of the text
    #[error("Index {index} out of range for text of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Average (or similar reduction) requested over no elements
    #[error("Cannot average an empty sequence")]
    EmptySequence,

    /// Normalization of the origin
    #[error("Cannot normalize a zero-length vector")]
    ZeroLengthVector,

    /// Lower bound greater than upper bound, or an empty range
    #[error("Invalid bounds: low {low} is not below high {high}")]
    InvalidBounds { low: String, high: String },
}

impl Error {
    pub(crate) fn invalid_bounds(low: impl std::fmt::Debug, high: impl std::fmt::Debug) -> Self {
        Self::InvalidBounds {
            low: format!("{low:?}"),
            high: format!("{high:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
