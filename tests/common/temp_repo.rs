#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temporary working directory, optionally a git repository with a bare
/// remote, plus an isolated HOME so neither git nor the tool read the user's
/// global configuration. Everything is removed on drop.
pub struct TempRepo {
    pub dir: TempDir,
    pub path: PathBuf,
    home: TempDir,
    remote: Option<TempDir>,
}

impl TempRepo {
    /// An empty directory that is not a git repository.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let home = TempDir::new().expect("Failed to create temp home");
        let path = dir.path().to_path_buf();

        Self {
            dir,
            path,
            home,
            remote: None,
        }
    }

    /// A git repository on `main` with one commit.
    pub fn new() -> Self {
        let repo = Self::empty();

        repo.run_git(&["init", "-b", "main"]);
        repo.run_git(&["config", "user.email", "test@example.com"]);
        repo.run_git(&["config", "user.name", "Test User"]);

        repo.create_file("README.md", "# Test Repo\n");
        repo.run_git(&["add", "."]);
        repo.run_git(&["commit", "-m", "Initial commit"]);

        repo
    }

    /// A repository whose `main` is already pushed to a bare `origin`.
    pub fn with_remote() -> Self {
        let mut repo = Self::new();
        let remote = Self::bare_remote();

        let url = remote.path().display().to_string();
        repo.run_git(&["remote", "add", "origin", &url]);
        repo.run_git(&["push", "-u", "origin", "main"]);
        repo.remote = Some(remote);

        repo
    }

    /// An empty directory with a bare remote that is not wired up yet.
    pub fn empty_with_bare_remote() -> Self {
        let mut repo = Self::empty();
        repo.remote = Some(Self::bare_remote());
        repo
    }

    /// A repository with history and a bare remote that is not wired up yet.
    pub fn new_with_bare_remote() -> Self {
        let mut repo = Self::new();
        repo.remote = Some(Self::bare_remote());
        repo
    }

    fn bare_remote() -> TempDir {
        let remote = TempDir::new().expect("Failed to create remote temp directory");
        let output = Command::new("git")
            .args(["init", "--bare", "-b", "main"])
            .current_dir(remote.path())
            .output()
            .expect("Failed to init bare repo");
        assert!(output.status.success(), "git init --bare failed");
        remote
    }

    pub fn remote_url(&self) -> String {
        self.remote_path().display().to_string()
    }

    fn remote_path(&self) -> &Path {
        self.remote.as_ref().expect("repo has no remote").path()
    }

    fn isolate(&self, cmd: &mut Command) {
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("quick-commit.toml")
    }

    /// Run a git command in the working directory.
    pub fn run_git(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.path);
        self.isolate(&mut cmd);
        cmd.output().expect("Failed to run git command")
    }

    /// Run git and return trimmed stdout.
    pub fn git_output(&self, args: &[&str]) -> String {
        let output = self.run_git(args);
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Run git against the bare remote.
    pub fn remote_git(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        cmd.arg("--git-dir").arg(self.remote_path()).args(args);
        self.isolate(&mut cmd);
        cmd.output().expect("Failed to run git on remote")
    }

    /// Run the commit binary here, returning (exit_code, stdout, stderr).
    pub fn commit(&self, args: &[&str]) -> (i32, String, String) {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_commit"));
        cmd.args(args)
            .current_dir(&self.path)
            .env("QUICK_COMMIT_CONFIG", self.config_path());
        self.isolate(&mut cmd);

        let output = cmd.output().expect("Failed to run commit binary");
        let code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        (code, stdout, stderr)
    }

    /// Create (or overwrite) a file in the working directory.
    pub fn create_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Push a commit to the remote from a second clone, so `main` here falls behind.
    pub fn advance_remote(&self) {
        let other = TempDir::new().expect("Failed to create clone directory");
        let clone_path = other.path().join("clone");

        let mut clone = Command::new("git");
        clone
            .arg("clone")
            .arg(self.remote_url())
            .arg(&clone_path);
        self.isolate(&mut clone);
        assert!(clone.output().expect("clone").status.success());

        std::fs::write(clone_path.join("upstream.txt"), "from elsewhere").expect("write");
        for args in [
            &["add", "."][..],
            &["commit", "-m", "Upstream change"][..],
            &["push", "origin", "main"][..],
        ] {
            let mut cmd = Command::new("git");
            cmd.args(args).current_dir(&clone_path);
            self.isolate(&mut cmd);
            assert!(cmd.output().expect("git").status.success(), "git {args:?} failed");
        }
    }

    pub fn is_repository(&self) -> bool {
        self.path.join(".git").exists()
    }

    pub fn current_branch(&self) -> String {
        self.git_output(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn commit_count(&self) -> usize {
        let output = self.git_output(&["rev-list", "--count", "HEAD"]);
        output.parse().unwrap_or(0)
    }

    pub fn last_commit_message(&self) -> String {
        self.git_output(&["log", "-1", "--format=%s"])
    }

    /// Subject of the newest commit on `branch` in the bare remote.
    pub fn remote_commit_message(&self, branch: &str) -> String {
        let output = self.remote_git(&["log", "-1", "--format=%s", branch]);
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub fn remote_has_branch(&self, branch: &str) -> bool {
        let refname = format!("refs/heads/{branch}");
        self.remote_git(&["rev-parse", "--verify", "--quiet", &refname])
            .status
            .success()
    }
}

impl Default for TempRepo {
    fn default() -> Self {
        Self::new()
    }
}
