//! Error types for the logo renderer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering and output operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// Requested canvas size is outside the supported range
    #[error("Unsupported icon size {size}px (supported: {min}..={max})")]
    UnsupportedSize { size: u32, min: u32, max: u32 },

    /// Computed geometry violates the nesting of frame, panel and lines
    #[error("Layout error: {0}")]
    LayoutError(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),

    /// Writing an output file or directory failed
    #[error("I/O error on {path:?}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest serialisation failed
    #[error("Manifest error: {0}")]
    ManifestError(#[from] serde_json::Error),

    /// Invalid batch configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::IoError {
            path: path.into(),
            source,
        }
    }
}
