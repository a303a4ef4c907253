use crate::error::Result;
use crate::ops::resolve::resolve;
use crate::repo::Repo;
use crate::types::{DiffReport, LineDiff, Version};
use crate::worktree::WorkTree;

/// compare one path across two versions
pub fn diff(
    repo: &Repo,
    worktree: &WorkTree,
    path: &str,
    from: &Version,
    to: &Version,
) -> Result<DiffReport> {
    let old = resolve(repo, worktree, path, from)?;
    let new = resolve(repo, worktree, path, to)?;

    Ok(match (old, new) {
        (None, None) => DiffReport::NotFound,
        (None, Some(content)) => DiffReport::Added { content },
        (Some(content), None) => DiffReport::Deleted { content },
        (Some(old), Some(new)) => {
            if old == new {
                DiffReport::Unchanged
            } else {
                DiffReport::Modified {
                    lines: diff_lines(
                        &String::from_utf8_lossy(&old),
                        &String::from_utf8_lossy(&new),
                    ),
                }
            }
        }
    })
}

/// position-by-position line comparison
///
/// contents are split on '\n' and compared index by index; a missing line
/// is treated as empty. insertions are not re-aligned: a prepended line
/// marks every following index as changed.
pub fn diff_lines(old: &str, new: &str) -> Vec<LineDiff> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let max_lines = old_lines.len().max(new_lines.len());
    let mut lines = Vec::with_capacity(max_lines);

    for i in 0..max_lines {
        let old_line = old_lines.get(i).copied().unwrap_or("");
        let new_line = new_lines.get(i).copied().unwrap_or("");

        if old_line == new_line {
            lines.push(LineDiff::Unchanged(old_line.to_string()));
        } else if new_line.is_empty() {
            lines.push(LineDiff::Deleted(old_line.to_string()));
        } else if old_line.is_empty() {
            lines.push(LineDiff::Added(new_line.to_string()));
        } else {
            lines.push(LineDiff::Changed {
                old: old_line.to_string(),
                new: new_line.to_string(),
            });
        }
    }

    lines
}
