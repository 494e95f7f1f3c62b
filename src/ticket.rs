//! Story ID derivation from the current branch name.
//!
//! Branches are expected to end in the tracker story number, e.g.
//! `feature-login-18726492` yields `#18726492`.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use anyhow::{Context, Result};
use tracing::debug;

use crate::git::GitRepository;
use crate::prompt::questions::STORY_PREFIX;

/// Separator between branch name segments.
const BRANCH_SEGMENT_SEPARATOR: char = '-';

/// Source of the currently checked-out branch name.
pub trait BranchSource: Send + Sync {
    /// Returns the name of the current branch.
    fn current_branch(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}

/// Reads the current branch from a git repository on disk.
#[derive(Debug, Clone)]
pub struct GitBranchSource {
    repo_path: PathBuf,
}

impl GitBranchSource {
    /// Creates a source for the repository containing `repo_path`.
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }
}

impl BranchSource for GitBranchSource {
    fn current_branch(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        let repo_path = self.repo_path.clone();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || {
                GitRepository::open_at(&repo_path)?.get_current_branch()
            })
            .await
            .context("Branch lookup task failed")?
        })
    }
}

/// Extracts a story reference from a branch name.
///
/// The branch is split on `-` and the last segment becomes the story ID.
/// Branches without a `-`, or ending in one, yield `None`.
pub fn story_id_from_branch(branch: &str) -> Option<String> {
    let (_, last) = branch.trim().rsplit_once(BRANCH_SEGMENT_SEPARATOR)?;
    if last.is_empty() {
        return None;
    }
    Some(format!("{STORY_PREFIX}{last}"))
}

/// Derives the default story reference from the current branch.
///
/// Branch lookup failures are returned to the caller. A branch name that
/// carries no story segment yields an empty string.
pub async fn derive_story_id(source: &dyn BranchSource) -> Result<String> {
    let branch = source
        .current_branch()
        .await
        .context("Failed to determine current branch")?;

    let story_id = story_id_from_branch(&branch).unwrap_or_default();
    debug!(branch = %branch, story_id = %story_id, "Derived story ID");

    Ok(story_id)
}
