use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    Saved {
        generation: u64,
        path: PathBuf,
    },
    Failed {
        generation: u64,
        path: PathBuf,
        message: String,
    },
}

impl ExportEvent {
    /// One-line status suitable for the overlay.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Saved { path, .. } => format!("Saved {}", path.display()),
            Self::Failed { path, message, .. } => {
                format!("Could not save {}: {}", path.display(), message)
            }
        }
    }
}
