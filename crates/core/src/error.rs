use std::io;

/// Errors that can occur while wiring a plugin into a host project
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Manifest error: {0}")]
    ManifestError(#[from] serde_json::Error),

    #[error("base directory is not set and INIT_CWD is missing from the environment")]
    BaseDirUnset,
}

/// Result type alias for autoconf operations
pub type Result<T> = std::result::Result<T, Error>;
