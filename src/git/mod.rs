pub mod branch;
pub mod commit;
pub mod git_exec;
pub mod push;
pub mod remote;
pub mod staging;
pub mod status;

use git2::{ErrorClass, ErrorCode, Repository};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum GitError {
    #[error("Git executable not found.")]
    #[diagnostic(
        code(quick_commit::git::not_found),
        help("Ensure that 'git' is installed and available in your PATH.")
    )]
    NotFound(#[source] std::io::Error),

    #[error("Failed to execute git command.")]
    #[diagnostic(code(quick_commit::git::execution_failed))]
    IoError(#[from] std::io::Error),

    #[error("Not in a git repository")]
    #[diagnostic(
        code(quick_commit::git::not_in_repo),
        help(
            "Run 'git init' first, or use 'commit first \"<remote-url>\"' to create the repository and push it."
        )
    )]
    NotInRepo,

    #[error("Not on a branch (HEAD is detached)")]
    #[diagnostic(
        code(quick_commit::git::not_on_branch),
        help("Check out a branch before committing.")
    )]
    NotOnBranch,

    #[error("Branch '{0}' already exists")]
    #[diagnostic(
        code(quick_commit::git::branch_exists),
        help("Pick another name with --branch, or delete or rename the existing branch first.")
    )]
    BranchExists(String),

    #[error("Push rejected by the remote: {0}")]
    #[diagnostic(
        code(quick_commit::git::push_rejected),
        help("The remote has commits you don't have. Run 'git pull --rebase' and try again.")
    )]
    PushRejected(String),

    #[error("Authentication failed: {0}")]
    #[diagnostic(
        code(quick_commit::git::auth_failed),
        help("Check your credentials, SSH key or access token for this remote.")
    )]
    AuthenticationFailed(String),

    #[error("Could not reach the remote: {0}")]
    #[diagnostic(
        code(quick_commit::git::network),
        help("Check your network connection and the remote URL.")
    )]
    NetworkUnreachable(String),

    #[error("Git command failed: {0}")]
    #[diagnostic(code(quick_commit::git::command_failed))]
    CommandFailed(String),

    #[error("{0}")]
    #[diagnostic(code(quick_commit::git::git2_error))]
    Git2Error(git2::Error),
}

/// libgit2 reports structured codes, so those win over message matching.
impl From<git2::Error> for GitError {
    fn from(e: git2::Error) -> Self {
        match (e.code(), e.class()) {
            (ErrorCode::NotFound, ErrorClass::Repository) => GitError::NotInRepo,
            (ErrorCode::Auth | ErrorCode::Certificate, _) => {
                GitError::AuthenticationFailed(e.message().to_string())
            }
            (ErrorCode::NotFastForward, _) => GitError::PushRejected(e.message().to_string()),
            (_, ErrorClass::Net | ErrorClass::Http | ErrorClass::Ssh) => {
                GitError::NetworkUnreachable(e.message().to_string())
            }
            _ => GitError::Git2Error(e),
        }
    }
}

/// The version-control operations the commit flows are built from.
pub trait Vcs {
    fn is_repository(&self) -> bool;
    fn current_branch(&self) -> Result<String, GitError>;
    fn has_commits(&self) -> Result<bool, GitError>;
    fn stage_all(&self) -> Result<(), GitError>;
    fn staged_files(&self) -> Result<Vec<String>, GitError>;
    fn commit(&self, message: &str) -> Result<(), GitError>;
    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError>;
    fn push_upstream(&self, remote: &str, branch: &str) -> Result<(), GitError>;
    fn init(&self) -> Result<(), GitError>;
    fn add_remote(&self, name: &str, url: &str) -> Result<(), GitError>;
    fn rename_branch(&self, new_name: &str) -> Result<(), GitError>;
}

/// [`Vcs`] backed by libgit2 for local work and the `git` executable for
/// commit and push, so user hooks and credential helpers still apply.
pub struct Git {
    root: PathBuf,
}

impl Git {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Git { root: root.into() }
    }

    fn repo(&self) -> Result<Repository, GitError> {
        get_repo(&self.root)
    }
}

fn get_repo(path: &Path) -> Result<Repository, GitError> {
    Repository::discover(path).map_err(|e| {
        if e.code() == ErrorCode::NotFound {
            GitError::NotInRepo
        } else {
            GitError::from(e)
        }
    })
}

impl Vcs for Git {
    fn is_repository(&self) -> bool {
        self.repo().is_ok()
    }

    fn current_branch(&self) -> Result<String, GitError> {
        branch::current_branch(&self.repo()?)
    }

    fn has_commits(&self) -> Result<bool, GitError> {
        branch::has_commits(&self.repo()?)
    }

    fn stage_all(&self) -> Result<(), GitError> {
        staging::stage_all(&self.repo()?)
    }

    fn staged_files(&self) -> Result<Vec<String>, GitError> {
        status::staged_files(&self.repo()?)
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        commit::create_commit(&self.root, message)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        push::push(
            &self.root,
            push::PushOptions {
                remote,
                branch,
                set_upstream: false,
            },
        )
    }

    fn push_upstream(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        push::push(
            &self.root,
            push::PushOptions {
                remote,
                branch,
                set_upstream: true,
            },
        )
    }

    fn init(&self) -> Result<(), GitError> {
        Repository::init(&self.root)?;
        Ok(())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), GitError> {
        remote::add_remote(&self.repo()?, name, url)
    }

    fn rename_branch(&self, new_name: &str) -> Result<(), GitError> {
        branch::rename_current(&self.repo()?, new_name)
    }
}
