//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure that ends the process. Refused player
//! actions never reach it; the session has already reported those.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: system64_core::ConfigError,
    },

    /// The state file could not be opened.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: system64_db::DbError,
    },

    /// A session operation failed internally.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: system64_core::SessionError,
    },

    /// Reading commands from stdin failed.
    #[error("input error: {source}")]
    Input {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
