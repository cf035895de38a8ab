use super::GitError;
use git2::Repository;

/// `git add .` from the top of the work tree: new, modified and deleted files.
pub fn stage_all(repo: &Repository) -> Result<(), GitError> {
    let mut index = repo.index()?;

    index.add_all(["*"], git2::IndexAddOption::DEFAULT, None)?;
    index.update_all(["*"], None)?;
    index.write()?;

    Ok(())
}
