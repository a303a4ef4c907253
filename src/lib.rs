//! snapvc - minimal local version control
//!
//! a content-addressed snapshot store for single-directory projects.
//! similar in spirit to git but much smaller: flat file manifests, no
//! branching, one machine, one writer.
//!
//! # Core concepts
//!
//! - **Blob**: content-addressed file data, stored raw
//! - **Staging index**: the mutable set of paths queued for the next
//!   snapshot (persisted as TOML)
//! - **Snapshot**: an immutable, timestamped capture of the staged files
//!   (CBOR + zstd, identified by the hash of the stored bytes)
//! - **Version**: a side to compare or restore from - the working tree,
//!   the staging index, or a snapshot
//!
//! # Hash format
//!
//! blob hash = SHA256(content); snapshot hash = SHA256(zstd(cbor(record)))
//!
//! # Example usage
//!
//! ```no_run
//! use snapvc::{ops, Repo, Version, WorkTree};
//!
//! // initialize a repository next to the files it tracks
//! let repo = Repo::init(".snapvc").unwrap();
//! let worktree = WorkTree::new(".");
//!
//! // stage a file and freeze a snapshot
//! ops::stage(&repo, &worktree, "notes.txt").unwrap();
//! let id = ops::commit(&repo, "first snapshot").unwrap();
//!
//! // compare the worktree against what was committed
//! let report = ops::diff(&repo, &worktree, "notes.txt",
//!     &Version::Snapshot(id), &Version::WorkingTree).unwrap();
//! ```

mod error;
mod hash;
mod object;
mod repo;
mod staging;
mod worktree;

pub mod ops;
pub mod types;

pub use error::{Error, Result};
pub use hash::{compute_content_hash, Hash};
pub use object::{
    blob_exists, blob_path, list_snapshots, read_blob, read_snapshot, snapshot_exists,
    snapshot_path, write_blob, write_snapshot,
};
pub use repo::Repo;
pub use staging::StagingIndex;
pub use types::{DiffReport, LineDiff, Snapshot, Version};
pub use worktree::WorkTree;
