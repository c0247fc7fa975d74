//! History listing
//!
//! `FirstParentLog` walks the first-parent chain from a starting commit down
//! to the root, which is exactly the history `log` prints. Entry rendering
//! lives here too so `log` and `global-log` stay in lockstep.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

/// Iterator over the first-parent chain of a commit.
pub struct FirstParentLog<'d> {
    database: &'d Database,
    next: Option<ObjectId>,
}

impl<'d> FirstParentLog<'d> {
    pub fn new(database: &'d Database, start: ObjectId) -> Self {
        Self {
            database,
            next: Some(start),
        }
    }
}

impl Iterator for FirstParentLog<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;
        match self.database.get_commit(&oid) {
            Ok(commit) => {
                self.next = commit.first_parent().cloned();
                Some(Ok(commit))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// Render one log entry, trailing blank line included.
pub fn render_log_entry(commit: &Commit) -> String {
    let mut lines = vec!["===".to_string(), format!("commit {}", commit.id())];

    if commit.is_merge() {
        lines.push(format!(
            "Merge: {} {}",
            commit.parents()[0].to_short_oid(),
            commit.parents()[1].to_short_oid()
        ));
    }

    lines.push(format!("Date: {}", commit.formatted_timestamp()));
    lines.push(commit.message().to_string());
    lines.push(String::new());

    format!("{}\n", lines.join("\n"))
}
