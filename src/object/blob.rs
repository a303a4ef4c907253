use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, IoResultExt, Result};
use crate::hash::{compute_content_hash, Hash};
use crate::repo::Repo;

/// write a blob to the content store
///
/// the hash is computed over the raw content bytes, so identical content
/// maps to the identical id and rewriting it is a no-op.
///
/// returns the blob hash, which can be used to reference this blob.
pub fn write_blob(repo: &Repo, content: &[u8]) -> Result<Hash> {
    let hash = compute_content_hash(content);
    let path = blob_path(repo, &hash);

    // deduplication: if blob already exists, we're done
    if path.exists() {
        return Ok(hash);
    }

    // atomic write: temp file -> fsync -> rename
    let tmp_path = repo.tmp_path().join(uuid::Uuid::new_v4().to_string());
    {
        let mut tmp_file = File::create(&tmp_path).with_path(&tmp_path)?;
        tmp_file.write_all(content).with_path(&tmp_path)?;
        tmp_file.sync_all().with_path(&tmp_path)?;
    }

    // rename to final location
    fs::rename(&tmp_path, &path).with_path(&path)?;

    // fsync parent directory
    fsync_dir(&repo.blobs_path())?;

    Ok(hash)
}

/// read blob content
pub fn read_blob(repo: &Repo, hash: &Hash) -> Result<Vec<u8>> {
    let path = blob_path(repo, hash);
    fs::read(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::BlobNotFound(*hash)
        } else {
            Error::Io { path, source: e }
        }
    })
}

/// get the filesystem path to a blob
pub fn blob_path(repo: &Repo, hash: &Hash) -> PathBuf {
    repo.blobs_path().join(hash.to_hex())
}

/// check if a blob exists in the content store
pub fn blob_exists(repo: &Repo, hash: &Hash) -> bool {
    blob_path(repo, hash).exists()
}

/// fsync a directory
fn fsync_dir(path: &Path) -> Result<()> {
    let dir = File::open(path).with_path(path)?;
    dir.sync_all().with_path(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_repo() -> (tempfile::TempDir, Repo) {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("repo");
        let repo = Repo::init(&repo_path).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_write_and_read_blob() {
        let (_dir, repo) = test_repo();

        let content = b"hello, world!";
        let hash = write_blob(&repo, content).unwrap();

        // verify it exists
        assert!(blob_exists(&repo, &hash));

        // read it back
        let read_content = read_blob(&repo, &hash).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_blob_deduplication() {
        let (_dir, repo) = test_repo();

        let content = b"duplicate content";
        let h1 = write_blob(&repo, content).unwrap();
        let h2 = write_blob(&repo, content).unwrap();

        assert_eq!(h1, h2);

        // exactly one object stored
        let count = fs::read_dir(repo.blobs_path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_different_content_different_blob() {
        let (_dir, repo) = test_repo();

        let h1 = write_blob(&repo, b"content one").unwrap();
        let h2 = write_blob(&repo, b"content two").unwrap();

        assert_ne!(h1, h2);
        assert!(blob_exists(&repo, &h1));
        assert!(blob_exists(&repo, &h2));
    }

    #[test]
    fn test_blob_path_structure() {
        let (_dir, repo) = test_repo();

        let hash = write_blob(&repo, b"test").unwrap();
        let path = blob_path(&repo, &hash);

        // path should be blobs/<full hex id>
        assert!(path.ends_with(hash.to_hex()));
        assert_eq!(path.parent(), Some(repo.blobs_path().as_path()));
    }

    #[test]
    fn test_read_nonexistent_blob() {
        let (_dir, repo) = test_repo();

        let fake_hash =
            Hash::from_hex("0000000000000000000000000000000000000000000000000000000000000000")
                .unwrap();
        let result = read_blob(&repo, &fake_hash);

        assert!(matches!(result, Err(Error::BlobNotFound(_))));
    }

    #[test]
    fn test_empty_blob() {
        let (_dir, repo) = test_repo();

        let hash = write_blob(&repo, b"").unwrap();
        assert_eq!(read_blob(&repo, &hash).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_stored_bytes_are_raw_content() {
        let (_dir, repo) = test_repo();

        let content = b"raw on disk";
        let hash = write_blob(&repo, content).unwrap();

        let on_disk = fs::read(blob_path(&repo, &hash)).unwrap();
        assert_eq!(on_disk, content);
    }
}
