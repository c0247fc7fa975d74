use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use sha1::{Digest, Sha1};
use std::path::Path;

/// A fresh temporary directory with `gitlite init` already run in it.
#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_gitlite(dir.path(), &["init"]).assert().success();
    dir
}

/// A repository with `a.txt = "hello\n"` committed as "first".
#[fixture]
pub fn repository_with_commit(repository_dir: TempDir) -> TempDir {
    crate::common::write_file(crate::common::FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));
    run_gitlite(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    gitlite_commit(repository_dir.path(), "first")
        .assert()
        .success();
    repository_dir
}

pub fn run_gitlite(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlite").expect("Failed to find gitlite binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlite_commit(dir: &Path, message: &str) -> Command {
    run_gitlite(dir, &["commit", "-m", message])
}

pub fn sha1_hex(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Contents of a file under `.gitlite/`, trailing whitespace trimmed.
pub fn read_control_file(dir: &Path, relative: &str) -> String {
    let path = dir.join(".gitlite").join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
        .trim_end()
        .to_string()
}

pub fn branch_head(dir: &Path, branch: &str) -> String {
    read_control_file(dir, &format!("branches/{branch}"))
}

pub fn head_commit_id(dir: &Path) -> String {
    let branch = read_control_file(dir, "HEAD");
    branch_head(dir, &branch)
}
