//! Error taxonomy
//!
//! Every operation either succeeds or fails with one of the variants below.
//! The `Display` form of each variant is the exact message the front end
//! prints before exiting with a non-zero status, so new variants must keep
//! their messages stable.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitliteError>;

#[derive(Debug, Error)]
pub enum GitliteError {
    #[error("A Gitlite version-control system already exists in the current directory.")]
    RepositoryExists,

    #[error("Not in an initialized Gitlite directory.")]
    RepositoryMissing,

    /// A blob or commit referenced by id is absent from the object store.
    #[error("No object with id {0} exists in the repository.")]
    ObjectMissing(String),

    /// An object file exists but cannot be parsed as a commit.
    #[error("Corrupt object: {0}")]
    CorruptObject(String),

    #[error("No commit with that id exists.")]
    CommitMissing,

    #[error("Ambiguous commit id: {0}")]
    AmbiguousCommitId(String),

    /// Raised when switching to a branch that does not exist.
    #[error("No such branch exists.")]
    NoSuchBranch,

    /// Raised when a named branch argument (merge, rm-branch) does not resolve.
    #[error("A branch with that name does not exist.")]
    BranchMissing,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Cannot remove the current branch.")]
    CurrentBranchDelete,

    #[error("No need to checkout the current branch.")]
    CurrentBranchCheckout,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingStaged,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("File does not exist.")]
    FileMissing,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("A remote with that name does not exist.")]
    NoSuchRemote,

    #[error("A remote with that name already exists.")]
    RemoteExists,

    #[error("Remote directory not found.")]
    RemoteDirMissing,

    #[error("That remote does not have that branch.")]
    NoSuchRemoteBranch,

    #[error("Please pull down remote changes before pushing.")]
    NonFastForward,

    #[error("Found no commit with that message.")]
    NoSuchMessage,

    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl GitliteError {
    /// Builds a `map_err` adapter that wraps an `io::Error` with context.
    pub fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> GitliteError {
        let context = context.into();
        move |source| GitliteError::Io { context, source }
    }
}
