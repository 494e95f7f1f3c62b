//! Git operations and repository management.

pub mod repository;

pub use repository::{FileStatus, GitRepository};

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;
