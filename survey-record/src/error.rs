use std::path::PathBuf;

/// Input rejected before anything touches the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name was empty after trimming.
    #[error("name required")]
    NameRequired,
}

/// Error type for [`RecordWriter::submit`](crate::RecordWriter::submit).
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Required input missing; the file was not opened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The target file could not be opened or written.
    #[error("failed to append to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SubmitError {
    /// Check if this error was raised by validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}
