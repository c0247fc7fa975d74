//! Repository facade
//!
//! The `Repository` type owns the four subsystems (database, staging area,
//! refs, workspace) and is the entry point every command goes through. All
//! persistent state lives under the `.gitlite` control directory at the root
//! of the working tree.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitliteError, Result};
use std::cell::{Ref, RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Control directory name
pub const GITLITE_DIR: &str = ".gitlite";

/// Object database directory name (inside the control directory)
pub const OBJECTS_DIR: &str = "objects";

/// Branch pointer directory name
pub const BRANCHES_DIR: &str = "branches";

/// Staged-additions file name
pub const STAGING_FILE: &str = "staging";

/// Staged-removals file name
pub const REMOVED_FILE: &str = "removed";

/// Remotes registry file name
pub const REMOTES_FILE: &str = "remotes";

/// Gitlite repository
///
/// Coordinates all repository operations and provides access to the object
/// database, staging area, workspace, and refs subsystems.
pub struct Repository {
    /// Repository root path
    path: Box<Path>,
    /// Output writer (stdout in the binary, a buffer in tests)
    writer: RefCell<Box<dyn Write>>,
    /// Object database
    database: Database,
    /// Staging area
    staging: RefCell<StagingArea>,
    /// Working directory
    workspace: Workspace,
    /// Reference manager
    refs: Refs,
}

impl Repository {
    pub fn new(path: PathBuf, writer: Box<dyn Write>) -> Result<Self> {
        let path = path
            .canonicalize()
            .map_err(GitliteError::io(format!("invalid repository path {}", path.display())))?;

        let gitlite_path = path.join(GITLITE_DIR);
        let database = Database::new(gitlite_path.join(OBJECTS_DIR).into_boxed_path());
        let staging = StagingArea::load(
            gitlite_path.join(STAGING_FILE).into_boxed_path(),
            gitlite_path.join(REMOVED_FILE).into_boxed_path(),
        )?;
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(gitlite_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            staging: RefCell::new(staging),
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlite_path(&self) -> PathBuf {
        self.path.join(GITLITE_DIR)
    }

    pub fn is_initialised(&self) -> bool {
        self.gitlite_path().is_dir()
    }

    pub fn require_initialised(&self) -> Result<()> {
        if self.is_initialised() {
            Ok(())
        } else {
            Err(GitliteError::RepositoryMissing)
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Print a line of console output.
    pub fn emit(&self, message: &str) -> Result<()> {
        writeln!(self.writer(), "{message}")
            .map_err(GitliteError::io("unable to write console output"))
    }

    /// Print pre-formatted console output without a trailing newline.
    pub fn emit_raw(&self, text: &str) -> Result<()> {
        write!(self.writer(), "{text}").map_err(GitliteError::io("unable to write console output"))
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn staging(&self) -> Ref<'_, StagingArea> {
        self.staging.borrow()
    }

    pub fn staging_mut(&self) -> RefMut<'_, StagingArea> {
        self.staging.borrow_mut()
    }

    /// Commit id of the branch HEAD points at.
    pub fn head_commit_id(&self) -> Result<ObjectId> {
        let branch = self.refs.read_head()?;
        self.refs
            .read_branch(&branch)?
            .ok_or(GitliteError::BranchMissing)
    }

    pub fn head_commit(&self) -> Result<Commit> {
        let oid = self.head_commit_id()?;
        self.database.get_commit(&oid)
    }

    /// Resolve a short id (any non-empty digest prefix) against the object
    /// store. The prefix must match exactly one stored id; a full digest that
    /// exists always matches itself.
    pub fn resolve(&self, short_id: &str) -> Result<ObjectId> {
        if short_id.is_empty() {
            return Err(GitliteError::CommitMissing);
        }

        let mut matched: Option<ObjectId> = None;
        for oid in self.database.list_object_ids()? {
            if !oid.as_ref().starts_with(short_id) {
                continue;
            }
            if oid.as_ref() == short_id {
                return Ok(oid);
            }
            if matched.is_some() {
                return Err(GitliteError::AmbiguousCommitId(short_id.to_string()));
            }
            matched = Some(oid);
        }

        matched.ok_or(GitliteError::CommitMissing)
    }
}
