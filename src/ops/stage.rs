use walkdir::WalkDir;

use crate::error::{Error, IoResultExt, Result};
use crate::hash::Hash;
use crate::object::write_blob;
use crate::repo::Repo;
use crate::staging::StagingIndex;
use crate::worktree::WorkTree;

/// stage a working-tree file for the next snapshot
///
/// reads the file, writes its content into the blob store, and records the
/// path in the staging index. re-staging a path replaces its entry.
pub fn stage(repo: &Repo, worktree: &WorkTree, path: &str) -> Result<Hash> {
    let content = worktree.read(path)?;
    let hash = write_blob(repo, &content)?;

    let mut index = StagingIndex::load(repo)?;
    index.set(path, hash);
    index.save(repo)?;

    Ok(hash)
}

/// stage every regular file under a working-tree path
///
/// walks the path in sorted order and stages each file under its path
/// relative to the working tree root. the repository directory is skipped
/// when it lives inside the walked tree. a path naming a regular file
/// stages just that file.
pub fn stage_dir(repo: &Repo, worktree: &WorkTree, dir: &str) -> Result<Vec<(String, Hash)>> {
    let walk_root = worktree.file_path(dir);
    if !walk_root.exists() {
        return Err(Error::FileNotFound(walk_root));
    }
    let repo_canonical = repo.path().canonicalize().with_path(repo.path())?;

    let walker = WalkDir::new(&walk_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| {
            !(e.file_type().is_dir()
                && e.path()
                    .canonicalize()
                    .map(|p| p == repo_canonical)
                    .unwrap_or(false))
        });

    let mut staged = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| walk_root.clone());
            Error::Io {
                path,
                source: e.into(),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(worktree.root()).unwrap_or(entry.path());
        let logical = rel.to_string_lossy().to_string();
        let hash = stage(repo, worktree, &logical)?;
        staged.push((logical, hash));
    }

    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::compute_content_hash;
    use std::fs;
    use tempfile::tempdir;

    fn test_setup() -> (tempfile::TempDir, Repo, WorkTree) {
        let dir = tempdir().unwrap();
        let repo = Repo::init(dir.path().join("repo")).unwrap();
        let work = dir.path().join("work");
        fs::create_dir(&work).unwrap();
        (dir, repo, WorkTree::new(work))
    }

    #[test]
    fn test_stage_file() {
        let (_dir, repo, worktree) = test_setup();
        worktree.write("a.txt", b"hello").unwrap();

        let hash = stage(&repo, &worktree, "a.txt").unwrap();

        assert_eq!(hash, compute_content_hash(b"hello"));
        assert!(crate::object::blob_exists(&repo, &hash));

        let index = StagingIndex::load(&repo).unwrap();
        assert_eq!(index.get("a.txt"), Some(&hash));
    }

    #[test]
    fn test_stage_missing_file() {
        let (_dir, repo, worktree) = test_setup();

        let result = stage(&repo, &worktree, "missing.txt");
        assert!(matches!(result, Err(Error::FileNotFound(_))));

        // nothing recorded
        let index = StagingIndex::load(&repo).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_restage_replaces_entry() {
        let (_dir, repo, worktree) = test_setup();

        worktree.write("x", b"A").unwrap();
        let first = stage(&repo, &worktree, "x").unwrap();

        worktree.write("x", b"B").unwrap();
        let second = stage(&repo, &worktree, "x").unwrap();

        let index = StagingIndex::load(&repo).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("x"), Some(&second));

        // both blobs remain in the store
        assert!(crate::object::blob_exists(&repo, &first));
        assert!(crate::object::blob_exists(&repo, &second));
    }

    #[test]
    fn test_stage_persists_across_loads() {
        let (_dir, repo, worktree) = test_setup();
        worktree.write("a.txt", b"hello").unwrap();
        let hash = stage(&repo, &worktree, "a.txt").unwrap();

        // fresh load sees the entry
        let reopened = Repo::open(repo.path()).unwrap();
        let index = StagingIndex::load(&reopened).unwrap();
        assert_eq!(index.get("a.txt"), Some(&hash));
    }

    #[test]
    fn test_stage_dir() {
        let (_dir, repo, worktree) = test_setup();
        worktree.write("a.txt", b"aaa").unwrap();
        worktree.write("sub/b.txt", b"bbb").unwrap();

        let staged = stage_dir(&repo, &worktree, ".").unwrap();

        let paths: Vec<&str> = staged.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, ["a.txt", "sub/b.txt"]);

        let index = StagingIndex::load(&repo).unwrap();
        assert_eq!(index.get("a.txt"), Some(&compute_content_hash(b"aaa")));
        assert_eq!(index.get("sub/b.txt"), Some(&compute_content_hash(b"bbb")));
    }

    #[test]
    fn test_stage_dir_subdirectory() {
        let (_dir, repo, worktree) = test_setup();
        worktree.write("top.txt", b"top").unwrap();
        worktree.write("sub/b.txt", b"bbb").unwrap();

        let staged = stage_dir(&repo, &worktree, "sub").unwrap();

        let paths: Vec<&str> = staged.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, ["sub/b.txt"]);
    }

    #[test]
    fn test_stage_dir_on_regular_file() {
        let (_dir, repo, worktree) = test_setup();
        worktree.write("a.txt", b"aaa").unwrap();

        let staged = stage_dir(&repo, &worktree, "a.txt").unwrap();

        let paths: Vec<&str> = staged.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, ["a.txt"]);
    }

    #[test]
    fn test_stage_dir_missing_path() {
        let (_dir, repo, worktree) = test_setup();

        let result = stage_dir(&repo, &worktree, "nope");
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_stage_dir_skips_repo_directory() {
        let dir = tempdir().unwrap();
        let worktree = WorkTree::new(dir.path());
        let repo = Repo::init(dir.path().join(".snapvc")).unwrap();

        worktree.write("a.txt", b"aaa").unwrap();

        let staged = stage_dir(&repo, &worktree, ".").unwrap();

        let paths: Vec<&str> = staged.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, ["a.txt"]);
    }
}
