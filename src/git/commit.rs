use std::path::Path;

use super::GitError;
use super::git_exec::{ExecOptions, exec};

/// Commits the current index through the `git` executable so hooks, signing
/// and identity settings behave exactly as they do for a plain `git commit`.
pub fn create_commit(dir: &Path, message: &str) -> Result<(), GitError> {
    exec(
        &["commit", "-m", message],
        ExecOptions {
            dir: Some(dir.to_path_buf()),
        },
    )?;

    Ok(())
}
