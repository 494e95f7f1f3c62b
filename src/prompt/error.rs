//! Prompt session errors.

use thiserror::Error;

/// Errors raised while collecting commit answers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    /// Input reached end-of-file before every question was answered.
    #[error("Input closed before all questions were answered")]
    InputClosed,

    /// Standard input is not a terminal.
    #[error("stdin is not interactive; cannot prompt for commit details")]
    NotInteractive,

    /// A required question was never answered.
    #[error("No answer given for '{0}'")]
    MissingAnswer(&'static str),

    /// An answer failed the question's validation.
    #[error("Answer for '{question}' rejected: {reason}")]
    Rejected {
        /// Answer field the question fills.
        question: &'static str,
        /// Validation message.
        reason: &'static str,
    },

    /// A selection that is not among the question's choices.
    #[error("'{value}' is not a choice for '{question}'")]
    InvalidChoice {
        /// Answer field the question fills.
        question: &'static str,
        /// The offending value.
        value: String,
    },

    /// A workflow command outside Finishes, Fixes and Delivers.
    #[error("Unknown workflow command '{0}'; expected Finishes, Fixes or Delivers")]
    UnknownWorkflow(String),
}
