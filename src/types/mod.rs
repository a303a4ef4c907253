mod diff;
mod snapshot;

pub use diff::{DiffReport, LineDiff, Version};
pub use snapshot::Snapshot;
