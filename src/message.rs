//! Commit message rendering.
//!
//! Turns a complete [`Answers`] set into the final commit message:
//!
//! ```text
//! type(scope): subject [Workflow #story]
//!
//! body wrapped at 100 columns
//!
//! footer wrapped at 100 columns
//! ```
//!
//! The head line is hard-limited to [`MAX_LINE_WIDTH`] characters by
//! cutting the `type(scope): subject` part; the story suffix is never cut.

pub mod wrap;

use std::fmt;

use crate::prompt::{Answers, Workflow};

pub use wrap::wrap;

/// Maximum width of the head line and of wrapped body and footer lines.
pub const MAX_LINE_WIDTH: usize = 100;

/// A commit message split into its three sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// `type(scope): subject` plus the optional story suffix.
    pub head: String,
    /// Wrapped body text.
    pub body: String,
    /// Wrapped footer text.
    pub footer: String,
}

impl RenderedMessage {
    /// Renders the answers into a message.
    ///
    /// A story suffix that alone exceeds [`MAX_LINE_WIDTH`] is kept whole and
    /// replaces the subject line entirely, so only then is the head longer
    /// than the limit.
    pub fn from_answers(answers: &Answers) -> Self {
        let subject_line = format!(
            "{}{}: {}",
            answers.commit_type,
            scope_segment(answers.scope.as_deref()),
            answers.subject.trim()
        );

        let suffix = story_suffix(&answers.story, answers.workflow);
        let head_trim_length = MAX_LINE_WIDTH.saturating_sub(suffix.chars().count());

        let mut head = truncate_chars(&subject_line, head_trim_length).to_string();
        head.push_str(&suffix);

        Self {
            head,
            body: wrap(&answers.body, MAX_LINE_WIDTH),
            footer: wrap(&answers.footer, MAX_LINE_WIDTH),
        }
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}\n\n{}", self.head, self.body, self.footer)
    }
}

/// Renders the answers into the final commit message text.
pub fn render(answers: &Answers) -> String {
    RenderedMessage::from_answers(answers).to_string()
}

/// Returns `(scope)` for a non-blank scope, otherwise an empty string.
fn scope_segment(scope: Option<&str>) -> String {
    match scope.map(str::trim) {
        Some(scope) if !scope.is_empty() => format!("({scope})"),
        _ => String::new(),
    }
}

/// Returns ` [Workflow #story]`, or an empty string when there is no story.
fn story_suffix(story: &str, workflow: Option<Workflow>) -> String {
    if story.is_empty() {
        return String::new();
    }

    match workflow {
        Some(workflow) => format!(" [{workflow} {story}]"),
        None => format!(" [{story}]"),
    }
}

/// Cuts `text` to at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
