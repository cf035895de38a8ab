pub mod commit;
pub mod first;

use crate::args::{Cli, Invocation, ParsedArgs};
use crate::config;
use crate::git::{Git, GitError};
use crate::preset::{CommitType, Preset};
use crate::ui::Reporter;
use crate::ui::console::ConsoleReporter;
use log::debug;
use miette::Result;

/// What a finished flow hands to the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub preset: &'static Preset,
    pub message: String,
    pub branch: String,
    pub remote_url: Option<String>,
    pub pushed: bool,
}

pub fn run(invocation: Invocation) -> Result<()> {
    match invocation {
        Invocation::Help => {
            println!("{}", Cli::help_text());
            Ok(())
        }
        Invocation::Commit(args) => run_commit(args),
    }
}

fn run_commit(args: ParsedArgs) -> Result<()> {
    let config = config::load()?;
    let vcs = Git::new(".");
    let reporter = ConsoleReporter::new(config.progress);

    let commit_type = CommitType::from_keyword(args.commit_type.as_deref());
    debug!(
        "commit type {}, remote {}",
        commit_type.preset().label,
        config.remote
    );

    if commit_type == CommitType::First {
        let command = first::FirstCommit {
            remote_url: args.message_given.then_some(args.message.as_str()),
            branch: &args.branch,
            remote: &config.remote,
            push: !args.no_push,
        };
        command.execute(&vcs, &reporter)?;
    } else {
        let command = commit::NormalCommit {
            preset: commit_type.preset(),
            message: &args.message,
            remote: &config.remote,
            push: !args.no_push,
        };
        commit::run(&command, &vcs, &reporter)?;
    }

    Ok(())
}

/// Runs one named step between the reporter's start/finish notifications.
pub(crate) fn step<T>(
    reporter: &dyn Reporter,
    label: &str,
    op: impl FnOnce() -> Result<T, GitError>,
) -> Result<T, GitError> {
    reporter.step_started(label);
    match op() {
        Ok(value) => {
            reporter.step_succeeded(label);
            Ok(value)
        }
        Err(e) => {
            reporter.step_failed(label);
            Err(e)
        }
    }
}
