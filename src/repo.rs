use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, IoResultExt, Result};
use crate::staging::StagingIndex;

/// a snapvc repository
///
/// an explicit handle on the repository root; every operation takes one
/// instead of assuming a fixed location.
pub struct Repo {
    path: PathBuf,
}

impl Repo {
    /// initialize a new repository at the given path
    ///
    /// fails with `RepoExists` if the path already exists, whether or not
    /// it looks like a repository.
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::RepoExists(path.to_path_buf()));
        }

        // create directory structure
        fs::create_dir_all(path.join("blobs")).with_path(path)?;
        fs::create_dir_all(path.join("snapshots")).with_path(path)?;
        fs::create_dir_all(path.join("tmp")).with_path(path)?;

        let repo = Self {
            path: path.to_path_buf(),
        };

        // seed an empty staging descriptor
        StagingIndex::default().save(&repo)?;

        Ok(repo)
    }

    /// open an existing repository
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::NoRepo(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// repository root path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// path to the staging descriptor
    pub fn staging_path(&self) -> PathBuf {
        self.path.join("staging.toml")
    }

    /// path to blobs directory
    pub fn blobs_path(&self) -> PathBuf {
        self.path.join("blobs")
    }

    /// path to snapshots directory
    pub fn snapshots_path(&self) -> PathBuf {
        self.path.join("snapshots")
    }

    /// path to tmp directory (for atomic writes)
    pub fn tmp_path(&self) -> PathBuf {
        self.path.join("tmp")
    }
}
