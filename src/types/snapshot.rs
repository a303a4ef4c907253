use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// an immutable snapshot of a set of files with metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// human-readable description
    pub message: String,
    /// creation time (milliseconds since epoch)
    pub timestamp_ms: i64,
    /// path to blob hash for every captured file (uses BTreeMap for
    /// deterministic serialization)
    pub files: BTreeMap<String, Hash>,
}

impl Snapshot {
    /// create a new snapshot stamped with the current time
    pub fn new(message: impl Into<String>, files: BTreeMap<String, Hash>) -> Self {
        Self {
            message: message.into(),
            timestamp_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0),
            files,
        }
    }

    /// create a new snapshot with explicit timestamp
    pub fn with_timestamp(
        message: impl Into<String>,
        timestamp_ms: i64,
        files: BTreeMap<String, Hash>,
    ) -> Self {
        Self {
            message: message.into(),
            timestamp_ms,
            files,
        }
    }

    /// blob hash captured for a path, if the snapshot tracks it
    pub fn file(&self, path: &str) -> Option<&Hash> {
        self.files.get(path)
    }

    /// number of captured files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
