//! # pt-commit
//!
//! Interactive conventional commit prompter that links commits to Pivotal
//! Tracker stories.
//!
//! The crate asks for the parts of a commit (type, scope, subject, body,
//! footer, story ID and workflow command), then renders them into a single
//! commit message whose first line never exceeds 100 characters.
//!
//! ## Quick Start
//!
//! ```rust
//! use pt_commit::message::render;
//! use pt_commit::prompt::{Answers, Workflow};
//!
//! let answers = Answers {
//!     commit_type: "fix".to_string(),
//!     scope: Some("api".to_string()),
//!     subject: "reject empty tokens".to_string(),
//!     body: String::new(),
//!     footer: String::new(),
//!     story: "#4242".to_string(),
//!     workflow: Some(Workflow::Fixes),
//! };
//!
//! assert!(render(&answers).starts_with("fix(api): reject empty tokens [Fixes #4242]"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod git;
pub mod message;
pub mod prompt;
pub mod sink;
pub mod ticket;

pub use crate::cli::Cli;

/// The current version of pt-commit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
