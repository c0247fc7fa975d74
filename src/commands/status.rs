use crate::areas::repository::Repository;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::Result;

impl Repository {
    /// Print the working tree status: branches, staged and removed files,
    /// unstaged modifications, and untracked files, each section sorted.
    pub fn status(&self) -> Result<()> {
        let current_branch = self.refs().read_head()?;
        let head = self.head_commit()?;
        let inspector = Inspector::new(self);
        let modified = inspector.modified_files(&head)?;
        let untracked = inspector.untracked_files(&head)?;

        let mut report = String::new();

        report.push_str("=== Branches ===\n");
        for branch in self.refs().list_branches()? {
            if branch == current_branch {
                report.push('*');
            }
            report.push_str(&branch);
            report.push('\n');
        }
        report.push('\n');

        {
            let staging = self.staging();

            report.push_str("=== Staged Files ===\n");
            for filename in staging.added().keys() {
                report.push_str(filename);
                report.push('\n');
            }
            report.push('\n');

            report.push_str("=== Removed Files ===\n");
            for filename in staging.removed() {
                report.push_str(filename);
                report.push('\n');
            }
            report.push('\n');
        }

        report.push_str("=== Modifications Not Staged For Commit ===\n");
        for (filename, change) in &modified {
            report.push_str(&format!("{} ({})\n", filename, change));
        }
        report.push('\n');

        report.push_str("=== Untracked Files ===\n");
        for filename in &untracked {
            report.push_str(filename);
            report.push('\n');
        }

        self.emit_raw(&report)
    }
}
