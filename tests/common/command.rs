use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

const AUTHOR_ENV: [(&str, &str); 5] = [
    ("GIT_AUTHOR_NAME", "fake_user"),
    ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
    ("GIT_COMMITTER_NAME", "fake_user"),
    ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
];

/// An upstream repository with one commit on `main`, and a clone of it.
pub struct Remote {
    pub root: TempDir,
}

impl Remote {
    pub fn origin(&self) -> PathBuf {
        self.root.path().join("origin")
    }

    pub fn clone_dir(&self) -> PathBuf {
        self.root.path().join("clone")
    }
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn remote(repository_dir: TempDir) -> Remote {
    let remote = Remote {
        root: repository_dir,
    };
    let origin = remote.origin();
    std::fs::create_dir_all(&origin).expect("Failed to create origin dir");

    run_git_command(&origin, &["init", "--quiet", "--initial-branch=main"])
        .assert()
        .success();
    git_commit_file(&origin, "1.txt", "one", "Initial commit");

    run_git_command(remote.root.path(), &["clone", "--quiet", "origin", "clone"])
        .assert()
        .success();

    remote
}

pub fn run_git_cmd_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-cmd").expect("Failed to find git-cmd binary");
    cmd.envs(AUTHOR_ENV);
    cmd.env("GIT_MERGE_AUTOEDIT", "no");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(AUTHOR_ENV);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));

    run_git_command(dir, &["add", "."]).assert().success();
    run_git_command(dir, &["commit", "--quiet", "-m", message])
        .assert()
        .success();
}

pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
