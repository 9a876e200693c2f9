//! Section scaffolding errors.

use std::path::PathBuf;

/// Error raised while inspecting or creating section folders.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A file exists where a section folder is expected.
    #[error("Expected a directory but found a file: {}", .0.display())]
    NotADirectory(PathBuf),
    /// A directory exists where a placeholder file is expected.
    #[error("Expected a file but found a directory: {}", .0.display())]
    NotAFile(PathBuf),
}

impl SectionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
