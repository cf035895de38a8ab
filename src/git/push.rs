use std::path::Path;

use super::GitError;
use super::git_exec::{ExecOptions, exec};

pub struct PushOptions<'a> {
    pub remote: &'a str,
    pub branch: &'a str,
    /// `-u`: record `<remote>/<branch>` as the branch's upstream.
    pub set_upstream: bool,
}

pub fn push(dir: &Path, options: PushOptions<'_>) -> Result<(), GitError> {
    let mut args = vec!["push"];

    if options.set_upstream {
        args.push("-u");
    }
    args.push(options.remote);
    args.push(options.branch);

    exec(
        &args,
        ExecOptions {
            dir: Some(dir.to_path_buf()),
        },
    )?;

    Ok(())
}
