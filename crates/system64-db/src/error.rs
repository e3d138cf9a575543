//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying I/O
//! and JSON errors with the key involved where there is one.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored scalar could not be parsed into the expected type.
    #[error("Unparsable value at {key}: {value:?}")]
    Parse {
        /// Key that held the value.
        key: &'static str,
        /// The raw stored text.
        value: String,
    },
}
