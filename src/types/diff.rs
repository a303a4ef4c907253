use std::fmt;

use crate::hash::Hash;

/// a version of a file's content to resolve against
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Version {
    /// the file as it exists in the working tree
    WorkingTree,
    /// the blob recorded in the staging index
    Staged,
    /// the blob recorded in a snapshot's manifest
    Snapshot(Hash),
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::WorkingTree => write!(f, "worktree"),
            Version::Staged => write!(f, "staged"),
            Version::Snapshot(hash) => write!(f, "snapshot {}", &hash.to_hex()[..12]),
        }
    }
}

/// one line position compared across two versions of a file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineDiff {
    /// same line on both sides
    Unchanged(String),
    /// line present only on the new side
    Added(String),
    /// line present only on the old side
    Deleted(String),
    /// line differs between the sides
    Changed { old: String, new: String },
}

impl fmt::Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDiff::Unchanged(line) => write!(f, "  {}", line),
            LineDiff::Added(line) => write!(f, "+ {}", line),
            LineDiff::Deleted(line) => write!(f, "- {}", line),
            LineDiff::Changed { old, new } => write!(f, "- {}\n+ {}", old, new),
        }
    }
}

/// outcome of comparing one path across two versions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffReport {
    /// the path resolves in neither version
    NotFound,
    /// the path resolves only on the new side
    Added { content: Vec<u8> },
    /// the path resolves only on the old side
    Deleted { content: Vec<u8> },
    /// both sides resolve to byte-identical content
    Unchanged,
    /// both sides resolve with differing content
    Modified { lines: Vec<LineDiff> },
}
