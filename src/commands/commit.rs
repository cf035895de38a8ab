use crate::commands::{Summary, step};
use crate::git::{GitError, Vcs};
use crate::preset::Preset;
use crate::ui::Reporter;
use miette::{Diagnostic, Result};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CommitError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    GitError(#[from] GitError),

    #[error("Nothing to commit")]
    #[diagnostic(
        code(quick_commit::commit::nothing_to_commit),
        help("No staged or unstaged changes.")
    )]
    NothingToCommit,
}

/// Stage everything, commit as `"<prefix>: <message>"`, push to the current branch.
pub struct NormalCommit<'a> {
    pub preset: &'static Preset,
    pub message: &'a str,
    pub remote: &'a str,
    pub push: bool,
}

impl NormalCommit<'_> {
    pub fn commit_message(&self) -> String {
        format!("{}: {}", self.preset.prefix, self.message)
    }

    pub fn execute(&self, vcs: &dyn Vcs, reporter: &dyn Reporter) -> Result<Summary, CommitError> {
        if !vcs.is_repository() {
            return Err(GitError::NotInRepo.into());
        }

        let branch = vcs.current_branch()?;
        reporter.begin(self.preset);

        step(reporter, "Staging changes", || vcs.stage_all())?;

        if vcs.staged_files()?.is_empty() {
            return Err(CommitError::NothingToCommit);
        }

        let message = self.commit_message();
        step(reporter, "Creating commit", || vcs.commit(&message))?;

        if self.push {
            let label = format!("Pushing to {}/{branch}", self.remote);
            step(reporter, &label, || vcs.push(self.remote, &branch))?;
        }

        let summary = Summary {
            preset: self.preset,
            message,
            branch,
            remote_url: None,
            pushed: self.push,
        };
        reporter.success(&summary);

        Ok(summary)
    }
}

/// Runs the flow, turning "nothing to commit" into a notice instead of a failure.
pub fn run(command: &NormalCommit<'_>, vcs: &dyn Vcs, reporter: &dyn Reporter) -> Result<()> {
    match command.execute(vcs, reporter) {
        Ok(_) => Ok(()),
        Err(CommitError::NothingToCommit) => {
            reporter.info("Nothing to commit", "Working tree clean, no commit created.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
