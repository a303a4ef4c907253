pub mod blob;
pub mod snapshot;

pub use blob::{blob_exists, blob_path, read_blob, write_blob};
pub use snapshot::{
    list_snapshots, read_snapshot, snapshot_exists, snapshot_path, write_snapshot,
};
