use crate::error::{Error, Result};
use crate::ops::resolve::resolve;
use crate::repo::Repo;
use crate::types::Version;
use crate::worktree::WorkTree;

/// write a path's content at a version back into the working tree
///
/// fails with `PathNotFound` when the path has no content at that version.
pub fn restore(repo: &Repo, worktree: &WorkTree, path: &str, version: &Version) -> Result<()> {
    let content = resolve(repo, worktree, path, version)?
        .ok_or_else(|| Error::PathNotFound(path.to_string()))?;
    worktree.write(path, &content)
}
