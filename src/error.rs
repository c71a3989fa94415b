use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the prune task can report. None of them is recovered from
/// internally; the caller decides whether the build fails.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("the following vendor manifest doesn't exist: {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("the following vendor manifest is reporting an empty bundle: {}", .0.display())]
    ManifestEmpty(PathBuf),

    #[error("unable to parse vendor manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid vendor manifest {}: {reason}", path.display())]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("no package.json found above {}", .0.display())]
    DescriptorNotFound(PathBuf),

    #[error("malformed package descriptor {}: {reason}", path.display())]
    DescriptorParse { path: PathBuf, reason: String },

    #[error("failed to delete {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("prune worker panicked while processing {}", .0.display())]
    Worker(PathBuf),
}

pub type Result<T> = std::result::Result<T, PruneError>;

impl PruneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PruneError::Io {
            path: path.into(),
            source,
        }
    }
}
