use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::write_snapshot;
use crate::repo::Repo;
use crate::staging::StagingIndex;
use crate::types::Snapshot;

/// freeze the staging index into a new snapshot
///
/// the snapshot is persisted before the staging index is cleared, so an
/// interruption in between leaves a committed snapshot plus a still-staged
/// index, never a lost snapshot.
pub fn commit(repo: &Repo, message: &str) -> Result<Hash> {
    let index = StagingIndex::load(repo)?;
    if index.is_empty() {
        return Err(Error::NothingStaged);
    }

    let snapshot = Snapshot::new(message, index.into_files());
    let hash = write_snapshot(repo, &snapshot)?;

    StagingIndex::clear(repo)?;

    Ok(hash)
}
