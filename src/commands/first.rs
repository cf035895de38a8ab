use crate::commands::{Summary, step};
use crate::git::{GitError, Vcs};
use crate::preset::CommitType;
use crate::ui::Reporter;
use log::debug;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FirstCommitError {
    #[error("Missing remote URL: `first` needs the repository URL to push to")]
    #[diagnostic(
        code(quick_commit::first::missing_remote_url),
        help("Pass it after the type: commit first \"https://github.com/user/repo.git\"")
    )]
    MissingRemoteUrl,

    #[error(transparent)]
    #[diagnostic(transparent)]
    GitError(#[from] GitError),
}

/// Turns the working directory into a repository and publishes it:
/// init, stage, commit, rename branch, add remote, push upstream.
pub struct FirstCommit<'a> {
    pub remote_url: Option<&'a str>,
    pub branch: &'a str,
    pub remote: &'a str,
    pub push: bool,
}

impl FirstCommit<'_> {
    pub fn execute(
        &self,
        vcs: &dyn Vcs,
        reporter: &dyn Reporter,
    ) -> Result<Summary, FirstCommitError> {
        let url = self
            .remote_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(FirstCommitError::MissingRemoteUrl)?;

        let preset = CommitType::First.preset();
        reporter.begin(preset);

        step(reporter, "Initializing repository", || vcs.init())?;
        step(reporter, "Staging changes", || vcs.stage_all())?;

        // A re-run after a failed push has nothing new to commit.
        if !vcs.staged_files()?.is_empty() || !vcs.has_commits()? {
            step(reporter, "Creating first commit", || vcs.commit(preset.prefix))?;
        } else {
            debug!("nothing staged on top of existing history, skipping commit");
        }

        let label = format!("Renaming branch to {}", self.branch);
        step(reporter, &label, || vcs.rename_branch(self.branch))?;

        let label = format!("Adding remote {}", self.remote);
        step(reporter, &label, || vcs.add_remote(self.remote, url))?;

        if self.push {
            let label = format!("Pushing to {}/{}", self.remote, self.branch);
            step(reporter, &label, || vcs.push_upstream(self.remote, self.branch))?;
        }

        let summary = Summary {
            preset,
            message: preset.prefix.to_string(),
            branch: self.branch.to_string(),
            remote_url: Some(url.to_string()),
            pushed: self.push,
        };
        reporter.success(&summary);

        Ok(summary)
    }
}
