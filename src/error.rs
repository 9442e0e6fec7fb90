//! Error types for greenband

use std::fmt;
use std::io;

use crate::types::Dimensions;

/// Result type for greenband operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in greenband operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Uploaded bytes could not be decoded as a single-band raster
    Decode(String),

    /// Red and NIR grids have different dimensions
    ShapeMismatch { red: Dimensions, nir: Dimensions },

    /// Every NDVI value was non-finite; nothing to classify
    NoValidPixels,

    /// Grid buffer length does not match its declared dimensions
    InvalidGrid { dims: Dimensions, len: usize },

    /// Visualization encoding failed
    Render(String),
}

impl Error {
    /// True when the failure stems from the uploaded input rather than
    /// the service itself. The API boundary maps these to HTTP 400.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Decode(_) | Error::ShapeMismatch { .. } | Error::NoValidPixels
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Decode(msg) => write!(f, "Failed to decode band: {}", msg),
            Error::ShapeMismatch { red, nir } => {
                write!(f, "Band dimension mismatch: RED {} vs NIR {}", red, nir)
            }
            Error::NoValidPixels => write!(f, "No valid NDVI pixels found after masking"),
            Error::InvalidGrid { dims, len } => {
                write!(f, "Grid buffer of {} values does not match {}", len, dims)
            }
            Error::Render(msg) => write!(f, "Failed to encode visualization: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}
