use git2::{ErrorCode, Repository};

use super::GitError;

/// Registers `url` as `name`, replacing the URL if the remote already exists.
pub fn add_remote(repo: &Repository, name: &str, url: &str) -> Result<(), GitError> {
    match repo.remote(name, url) {
        Ok(_) => Ok(()),
        Err(e) if e.code() == ErrorCode::Exists => {
            log::debug!("remote {name} exists, updating its url");
            repo.remote_set_url(name, url)?;
            Ok(())
        }
        Err(e) => Err(GitError::from(e)),
    }
}
