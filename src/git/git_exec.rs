use super::GitError;
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Default)]
pub struct ExecOptions {
    pub dir: Option<PathBuf>,
}

pub fn exec(args: &[&str], options: ExecOptions) -> Result<String, GitError> {
    debug!("git {}", args.join(" "));

    let mut cmd = Command::new("git");
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(dir) = &options.dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GitError::NotFound(e),
        _ => GitError::IoError(e),
    })?;

    if !output.status.success() {
        let mut message = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if message.is_empty() {
            // `git commit` reports some failures on stdout only.
            message = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
        debug!("git {} failed: {}", args.join(" "), message);
        return Err(map_git_error(message));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

const AUTH_MARKERS: &[&str] = &[
    "authentication failed",
    "permission denied",
    "could not read username",
    "could not read password",
    "invalid username or password",
    "the requested url returned error: 403",
    "the requested url returned error: 401",
];

const NETWORK_MARKERS: &[&str] = &[
    "could not resolve host",
    "could not resolve hostname",
    "unable to access",
    "connection refused",
    "connection timed out",
    "operation timed out",
    "network is unreachable",
    "could not read from remote repository",
];

const REJECTED_MARKERS: &[&str] = &[
    "[rejected]",
    "non-fast-forward",
    "fetch first",
    "updates were rejected",
];

/// Case-insensitive substring classification of git's stderr.
///
/// Order matters: a denied push over ssh also prints "Could not read from
/// remote repository", and a rejected push also prints "failed to push some
/// refs", so the more specific families are tested first.
pub fn map_git_error(stderr: String) -> GitError {
    let lower = stderr.to_lowercase();
    let has = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

    if lower.contains("not a git repository") {
        GitError::NotInRepo
    } else if has(AUTH_MARKERS) {
        GitError::AuthenticationFailed(stderr)
    } else if has(REJECTED_MARKERS) {
        GitError::PushRejected(stderr)
    } else if has(NETWORK_MARKERS) {
        GitError::NetworkUnreachable(stderr)
    } else {
        GitError::CommandFailed(stderr)
    }
}
