use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, IoResultExt, Result};
use crate::hash::Hash;
use crate::repo::Repo;

/// the staging index: paths queued for the next snapshot
///
/// maps working-tree paths to blob hashes. re-staging a path replaces its
/// entry, so the index always holds the most recent capture of each path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagingIndex {
    #[serde(default)]
    files: BTreeMap<String, Hash>,
}

impl StagingIndex {
    /// load the staging index from the repository
    ///
    /// a missing descriptor is re-created empty on disk; an unparsable one
    /// is an error, since silently discarding staged work would lose data.
    pub fn load(repo: &Repo) -> Result<Self> {
        let path = repo.staging_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let index = Self::default();
                index.save(repo)?;
                return Ok(index);
            }
            Err(e) => return Err(Error::Io { path, source: e }),
        };
        toml::from_str(&content).map_err(|e| Error::StagingCorrupt {
            path,
            reason: e.to_string(),
        })
    }

    /// persist the staging index atomically
    pub fn save(&self, repo: &Repo) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        let tmp_dir = repo.tmp_path();
        fs::create_dir_all(&tmp_dir).with_path(&tmp_dir)?;
        let tmp = tmp_dir.join(Uuid::new_v4().to_string());
        {
            let mut file = File::create(&tmp).with_path(&tmp)?;
            file.write_all(content.as_bytes()).with_path(&tmp)?;
            file.sync_all().with_path(&tmp)?;
        }

        let path = repo.staging_path();
        fs::rename(&tmp, &path).with_path(&path)?;

        // fsync parent directory
        if let Some(parent) = path.parent() {
            let dir = File::open(parent).with_path(parent)?;
            dir.sync_all().with_path(parent)?;
        }
        Ok(())
    }

    /// reset the repository's staging index to empty
    pub fn clear(repo: &Repo) -> Result<()> {
        Self::default().save(repo)
    }

    /// record a path as staged with the given blob hash
    pub fn set(&mut self, path: impl Into<String>, hash: Hash) {
        self.files.insert(path.into(), hash);
    }

    /// blob hash staged for a path, if any
    pub fn get(&self, path: &str) -> Option<&Hash> {
        self.files.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// staged entries, ordered by path
    pub fn files(&self) -> &BTreeMap<String, Hash> {
        &self.files
    }

    /// consume the index, yielding its entries
    pub fn into_files(self) -> BTreeMap<String, Hash> {
        self.files
    }
}
