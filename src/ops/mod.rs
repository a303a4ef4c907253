//! high-level operations on snapshot repositories

mod commit;
mod diff;
mod history;
mod resolve;
mod restore;
mod stage;
mod status;

pub use commit::commit;
pub use diff::{diff, diff_lines};
pub use history::{history, latest, HistoryEntry};
pub use resolve::{resolve, resolve_version};
pub use restore::restore;
pub use stage::{stage, stage_dir};
pub use status::status;
