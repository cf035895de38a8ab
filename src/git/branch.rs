use git2::{BranchType, ErrorCode, Repository};

use super::GitError;

/// Name of the checked out branch. On an unborn branch (no commits yet) this
/// is the branch HEAD points at.
pub fn current_branch(repo: &Repository) -> Result<String, GitError> {
    match repo.head() {
        Ok(head) => {
            if !head.is_branch() {
                return Err(GitError::NotOnBranch);
            }
            head.shorthand()
                .map(String::from)
                .ok_or(GitError::NotOnBranch)
        }
        Err(e) if e.code() == ErrorCode::UnbornBranch => {
            let head = repo.find_reference("HEAD")?;
            head.symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .map(String::from)
                .ok_or(GitError::NotOnBranch)
        }
        Err(e) => Err(GitError::from(e)),
    }
}

/// False while HEAD is unborn.
pub fn has_commits(repo: &Repository) -> Result<bool, GitError> {
    match repo.head() {
        Ok(_) => Ok(true),
        Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(false),
        Err(e) => Err(GitError::from(e)),
    }
}

/// Renames the checked out branch. Refuses to replace an existing branch,
/// like `git branch -m`.
pub fn rename_current(repo: &Repository, new_name: &str) -> Result<(), GitError> {
    let current = current_branch(repo)?;
    if current == new_name {
        return Ok(());
    }

    if repo.find_branch(new_name, BranchType::Local).is_ok() {
        return Err(GitError::BranchExists(new_name.to_string()));
    }

    match repo.find_branch(&current, BranchType::Local) {
        Ok(mut branch) => {
            branch.rename(new_name, false).map_err(|e| match e.code() {
                ErrorCode::Exists => GitError::BranchExists(new_name.to_string()),
                _ => GitError::from(e),
            })?;
        }
        // Nothing committed yet, so only HEAD needs to move.
        Err(e) if e.code() == ErrorCode::NotFound => {
            repo.set_head(&format!("refs/heads/{new_name}"))?;
        }
        Err(e) => return Err(GitError::from(e)),
    }

    Ok(())
}
