use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, IoResultExt, Result};

/// the working directory files are staged from and restored into
///
/// paths handed to the core are strings relative to this root; the core
/// never touches the filesystem outside the repository except through this
/// handle.
pub struct WorkTree {
    root: PathBuf,
}

impl WorkTree {
    /// create a handle rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// working tree root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// full filesystem path for a working-tree path
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// read a file, failing with `FileNotFound` if it does not exist
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.try_read(path)?
            .ok_or_else(|| Error::FileNotFound(self.file_path(path)))
    }

    /// read a file, returning `None` if it does not exist
    pub fn try_read(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full = self.file_path(path);
        match fs::read(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io {
                path: full,
                source: e,
            }),
        }
    }

    /// write a file, creating parent directories as needed
    pub fn write(&self, path: &str, content: &[u8]) -> Result<()> {
        let full = self.file_path(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
        fs::write(&full, content).with_path(&full)?;
        Ok(())
    }
}
