use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::{read_blob, read_snapshot};
use crate::ops::history::latest;
use crate::repo::Repo;
use crate::staging::StagingIndex;
use crate::types::Version;
use crate::worktree::WorkTree;

/// resolve a path to its content at a given version
///
/// `None` means the path has no content at that version. a staged or
/// snapshotted path whose blob is missing from the store is a hard
/// `BlobNotFound`, never `None`.
pub fn resolve(
    repo: &Repo,
    worktree: &WorkTree,
    path: &str,
    version: &Version,
) -> Result<Option<Vec<u8>>> {
    match version {
        Version::WorkingTree => worktree.try_read(path),
        Version::Staged => {
            let index = StagingIndex::load(repo)?;
            match index.get(path) {
                Some(hash) => read_blob(repo, hash).map(Some),
                None => Ok(None),
            }
        }
        Version::Snapshot(id) => {
            let snapshot = read_snapshot(repo, id)?;
            match snapshot.file(path) {
                Some(hash) => read_blob(repo, hash).map(Some),
                None => Ok(None),
            }
        }
    }
}

/// parse a version descriptor string
///
/// accepts `worktree`/`current`, `staged`, `latest`/`last` (the most
/// recent snapshot), or a full hex snapshot id.
pub fn resolve_version(repo: &Repo, s: &str) -> Result<Version> {
    match s {
        "worktree" | "current" => Ok(Version::WorkingTree),
        "staged" => Ok(Version::Staged),
        "latest" | "last" => match latest(repo)? {
            Some(id) => Ok(Version::Snapshot(id)),
            None => Err(Error::InvalidVersion(format!("{} (no snapshots yet)", s))),
        },
        other => Hash::from_hex(other)
            .map(Version::Snapshot)
            .map_err(|_| Error::InvalidVersion(other.to_string())),
    }
}
