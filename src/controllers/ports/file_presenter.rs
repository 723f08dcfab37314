use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: io::Error },
    Encode { path: PathBuf, message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            Self::Encode { path, message } => {
                write!(f, "failed to encode {}: {}", path.display(), message)
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { .. } => None,
        }
    }
}

/// Writes a completed frame to persistent storage.
pub trait FilePresenterPort: Send + Sync {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError>;

    fn format_name(&self) -> &str;
}
