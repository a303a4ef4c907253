use std::collections::BTreeMap;

use crate::error::Result;
use crate::hash::Hash;
use crate::repo::Repo;
use crate::staging::StagingIndex;

/// staged paths with their blob hashes, ordered by path
pub fn status(repo: &Repo) -> Result<BTreeMap<String, Hash>> {
    Ok(StagingIndex::load(repo)?.into_files())
}
