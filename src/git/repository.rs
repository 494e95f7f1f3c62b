//! Git repository operations.

use std::path::Path;

use anyhow::{Context, Result};
use git2::{Commit, ErrorCode, Oid, Repository, Status, StatusOptions};
use tracing::debug;

/// Prefix of local branch references.
const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

/// A file staged in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Index status flag (`A`, `M`, `D`, `R` or `T`).
    pub status: char,
    /// Path to the file relative to repository root.
    pub file: String,
}

impl GitRepository {
    /// Opens the repository containing the specified path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Returns the current branch name.
    ///
    /// A freshly initialised repository has no commits yet; the branch
    /// name is then read from the symbolic `HEAD` reference.
    pub fn get_current_branch(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(err) if err.code() == ErrorCode::UnbornBranch => {
                return self.unborn_branch_name();
            }
            Err(err) => return Err(err).context("Failed to get HEAD reference"),
        };

        if let Some(name) = head.shorthand() {
            if name != "HEAD" {
                return Ok(name.to_string());
            }
        }

        anyhow::bail!("Repository is in detached HEAD state")
    }

    fn unborn_branch_name(&self) -> Result<String> {
        let head = self
            .repo
            .find_reference("HEAD")
            .context("Failed to read HEAD reference")?;

        head.symbolic_target()
            .and_then(|target| target.strip_prefix(LOCAL_BRANCH_PREFIX))
            .map(str::to_string)
            .context("HEAD does not point at a local branch")
    }

    /// Lists files with changes staged in the index.
    pub fn staged_files(&self) -> Result<Vec<FileStatus>> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .context("Failed to get repository status")?;

        let staged = statuses
            .iter()
            .filter_map(|entry| {
                let status = index_status_flag(entry.status())?;
                entry.path().map(|path| FileStatus {
                    status,
                    file: path.to_string(),
                })
            })
            .collect();

        Ok(staged)
    }

    /// Checks whether anything is staged for commit.
    pub fn has_staged_changes(&self) -> Result<bool> {
        Ok(!self.staged_files()?.is_empty())
    }

    /// Creates a commit from the current index on top of `HEAD`.
    ///
    /// The message is cleaned up the same way `git commit` does: trailing
    /// whitespace is stripped and runs of blank lines are collapsed.
    pub fn commit_staged(&self, message: &str) -> Result<Oid> {
        if !self.has_staged_changes()? {
            anyhow::bail!("Nothing staged to commit");
        }

        let message =
            git2::message_prettify(message, None).context("Failed to clean up commit message")?;

        let signature = self
            .repo
            .signature()
            .context("Failed to determine commit author; set user.name and user.email")?;

        let mut index = self.repo.index().context("Failed to read index")?;
        let tree_id = index.write_tree().context("Failed to write tree from index")?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .context("Failed to find written tree")?;

        let parent = self.head_commit()?;
        let parents: Vec<&Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                &message,
                &tree,
                &parents,
            )
            .context("Failed to create commit")?;

        debug!(commit = %oid, parents = parents.len(), "Created commit");

        Ok(oid)
    }

    /// Returns the commit `HEAD` points at, or `None` on an unborn branch.
    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .context("Failed to peel HEAD to commit")?;
                Ok(Some(commit))
            }
            Err(err) if err.code() == ErrorCode::UnbornBranch => Ok(None),
            Err(err) => Err(err).context("Failed to get HEAD reference"),
        }
    }
}

/// Maps index status flags to a single-letter code, `None` when unstaged.
fn index_status_flag(flags: Status) -> Option<char> {
    if flags.contains(Status::INDEX_NEW) {
        Some('A')
    } else if flags.contains(Status::INDEX_MODIFIED) {
        Some('M')
    } else if flags.contains(Status::INDEX_DELETED) {
        Some('D')
    } else if flags.contains(Status::INDEX_RENAMED) {
        Some('R')
    } else if flags.contains(Status::INDEX_TYPECHANGE) {
        Some('T')
    } else {
        None
    }
}
