use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::error::{Error, IoResultExt, Result};
use crate::hash::Hash;
use crate::repo::Repo;
use crate::types::Snapshot;

/// write a snapshot to the snapshot store
///
/// snapshots are serialized as CBOR, then zstd compressed.
/// the hash is computed over the compressed bytes, so every read can
/// verify the stored record against its id.
pub fn write_snapshot(repo: &Repo, snapshot: &Snapshot) -> Result<Hash> {
    // serialize to cbor
    let mut cbor_bytes = Vec::new();
    ciborium::into_writer(snapshot, &mut cbor_bytes)?;

    // compress with zstd (level 3)
    let compressed = zstd::encode_all(&cbor_bytes[..], 3).map_err(|e| Error::Io {
        path: PathBuf::from("<zstd>"),
        source: e,
    })?;

    // hash the compressed bytes
    let hash = Hash::from_bytes(Sha256::digest(&compressed).into());
    let path = snapshot_path(repo, &hash);

    // dedup: if snapshot already exists, we're done
    if path.exists() {
        return Ok(hash);
    }

    // atomic write: temp -> fsync -> rename
    let tmp_path = repo.tmp_path().join(uuid::Uuid::new_v4().to_string());
    {
        let mut tmp_file = File::create(&tmp_path).with_path(&tmp_path)?;
        tmp_file.write_all(&compressed).with_path(&tmp_path)?;
        tmp_file.sync_all().with_path(&tmp_path)?;
    }

    // rename to final location
    fs::rename(&tmp_path, &path).with_path(&path)?;

    // fsync parent directory
    let snapshots_dir = repo.snapshots_path();
    let dir_file = File::open(&snapshots_dir).with_path(&snapshots_dir)?;
    dir_file.sync_all().with_path(&snapshots_dir)?;

    Ok(hash)
}

/// read a snapshot from the snapshot store
pub fn read_snapshot(repo: &Repo, hash: &Hash) -> Result<Snapshot> {
    let path = snapshot_path(repo, hash);

    let compressed = fs::read(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::SnapshotNotFound(*hash)
        } else {
            Error::Io {
                path: path.clone(),
                source: e,
            }
        }
    })?;

    // verify hash
    let actual_hash = Hash::from_bytes(Sha256::digest(&compressed).into());
    if actual_hash != *hash {
        return Err(Error::SnapshotCorrupt {
            hash: *hash,
            reason: format!("stored bytes hash to {}", actual_hash),
        });
    }

    // decompress
    let cbor_bytes = zstd::decode_all(&compressed[..]).map_err(|e| Error::SnapshotCorrupt {
        hash: *hash,
        reason: format!("decompression failed: {}", e),
    })?;

    // deserialize
    let snapshot: Snapshot =
        ciborium::from_reader(&cbor_bytes[..]).map_err(|e| Error::SnapshotCorrupt {
            hash: *hash,
            reason: format!("decode failed: {}", e),
        })?;

    Ok(snapshot)
}

/// enumerate every snapshot in the store, unordered
///
/// any unreadable or tampered entry fails the whole enumeration; corrupt
/// history is surfaced, never silently skipped.
pub fn list_snapshots(repo: &Repo) -> Result<Vec<(Hash, Snapshot)>> {
    let dir = repo.snapshots_path();
    let mut snapshots = Vec::new();

    for entry in fs::read_dir(&dir).with_path(&dir)? {
        let entry = entry.with_path(&dir)?;
        let name = entry.file_name();
        let hash = Hash::from_hex(&name.to_string_lossy())?;
        let snapshot = read_snapshot(repo, &hash)?;
        snapshots.push((hash, snapshot));
    }

    Ok(snapshots)
}

/// get the filesystem path to a snapshot record
pub fn snapshot_path(repo: &Repo, hash: &Hash) -> PathBuf {
    repo.snapshots_path().join(hash.to_hex())
}

/// check if a snapshot exists in the store
pub fn snapshot_exists(repo: &Repo, hash: &Hash) -> bool {
    snapshot_path(repo, hash).exists()
}
