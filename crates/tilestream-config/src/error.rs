//! Error type for configuration persistence and validation.

use std::path::PathBuf;

/// Failure while loading, saving, or validating the engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config file {}: {source}", path.display())]
    Io {
        /// File or directory the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid RON.
    #[error("malformed config: {0}")]
    Malformed(#[from] ron::error::SpannedError),

    /// The config could not be rendered back to RON.
    #[error("could not encode config: {0}")]
    Encode(#[from] ron::Error),

    /// The settings parsed but describe an unusable engine state, such as
    /// cache watermarks in the wrong order.
    #[error("invalid config: {0}")]
    Invalid(String),
}
