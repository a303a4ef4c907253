use crate::error::Result;
use crate::hash::Hash;
use crate::object::list_snapshots;
use crate::repo::Repo;
use crate::types::Snapshot;

/// snapshot with its id for history output
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: Hash,
    pub snapshot: Snapshot,
}

/// all snapshots, newest first
///
/// ordered by timestamp descending; equal timestamps fall back to id
/// ascending so the listing never depends on enumeration order.
pub fn history(repo: &Repo) -> Result<Vec<HistoryEntry>> {
    let mut entries: Vec<HistoryEntry> = list_snapshots(repo)?
        .into_iter()
        .map(|(id, snapshot)| HistoryEntry { id, snapshot })
        .collect();

    entries.sort_by(|a, b| {
        b.snapshot
            .timestamp_ms
            .cmp(&a.snapshot.timestamp_ms)
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(entries)
}

/// id of the most recent snapshot, if any
pub fn latest(repo: &Repo) -> Result<Option<Hash>> {
    Ok(history(repo)?.first().map(|e| e.id))
}

/// format a history entry for display
impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snapshot {}", self.id)?;

        // format timestamp
        let datetime = format_timestamp(self.snapshot.timestamp_ms);
        writeln!(f, "Date:   {}", datetime)?;

        let paths: Vec<&str> = self.snapshot.files.keys().map(|p| p.as_str()).collect();
        writeln!(f, "Files:  {}", paths.join(", "))?;

        writeln!(f)?;
        for line in self.snapshot.message.lines() {
            writeln!(f, "    {}", line)?;
        }

        Ok(())
    }
}

/// simple timestamp formatting (without chrono dependency)
fn format_timestamp(timestamp_ms: i64) -> String {
    // basic ISO-8601 format
    let secs = (timestamp_ms.max(0) as u64) / 1000;

    // approximate calendar math; a real implementation would use the
    // chrono or time crate
    let days = secs / 86400;
    let years_approx = 1970 + (days / 365);
    let remaining_days = days % 365;
    let months_approx = remaining_days / 30;
    let day_of_month = remaining_days % 30 + 1;

    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        years_approx,
        months_approx + 1,
        day_of_month,
        hours,
        minutes,
        seconds
    )
}
