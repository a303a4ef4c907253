use std::path::PathBuf;

use crate::Hash;

/// error type for snapvc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("repository not found at {0}")]
    NoRepo(PathBuf),

    #[error("repository already exists at {0}")]
    RepoExists(PathBuf),

    #[error("working tree file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("blob not found: {0}")]
    BlobNotFound(Hash),

    #[error("nothing staged for commit")]
    NothingStaged,

    #[error("snapshot not found: {0}")]
    SnapshotNotFound(Hash),

    #[error("corrupt snapshot {hash}: {reason}")]
    SnapshotCorrupt { hash: Hash, reason: String },

    #[error("corrupt staging index at {path}: {reason}")]
    StagingCorrupt { path: PathBuf, reason: String },

    #[error("path not found in requested version: {0}")]
    PathNotFound(String),

    #[error("invalid version descriptor: {0}")]
    InvalidVersion(String),

    #[error("invalid hash hex: {0}")]
    InvalidHashHex(String),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot encoding error: {0}")]
    SnapshotEncode(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("staging index encoding error: {0}")]
    StagingEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// helper to wrap io errors with path context
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.into(),
            source,
        })
    }
}
