use git2::{Repository, Status, StatusOptions};

use super::GitError;

pub const STAGED_FLAGS: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

/// Paths whose index entry differs from HEAD, sorted.
pub fn staged_files(repo: &Repository) -> Result<Vec<String>, GitError> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(false);

    let statuses = repo.statuses(Some(&mut opts))?;

    let mut staged: Vec<String> = statuses
        .iter()
        .filter(|e| e.status().intersects(STAGED_FLAGS))
        .filter_map(|e| e.path().map(String::from))
        .collect();

    staged.sort();
    Ok(staged)
}
