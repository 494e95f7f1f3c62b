//! Answer types filled in by a prompt session.

use std::fmt;
use std::str::FromStr;

use super::error::PromptError;
use super::questions::QuestionId;

/// Tracker workflow command placed in front of the story ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workflow {
    /// Marks the story finished.
    Finishes,
    /// Marks the story (a bug) fixed.
    Fixes,
    /// Marks the story delivered.
    Delivers,
}

impl Workflow {
    /// All workflow commands, in menu order.
    pub const ALL: [Self; 3] = [Self::Finishes, Self::Fixes, Self::Delivers];

    /// Returns the command as written in the commit head.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finishes => "Finishes",
            Self::Fixes => "Fixes",
            Self::Delivers => "Delivers",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workflow {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|workflow| workflow.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PromptError::UnknownWorkflow(s.to_string()))
    }
}

/// The complete answer set for one commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answers {
    /// Commit type keyword from the catalog.
    pub commit_type: String,
    /// Scope, `None` when the user chose no scope.
    pub scope: Option<String>,
    /// Short imperative description.
    pub subject: String,
    /// Longer description.
    pub body: String,
    /// Breaking changes and other footer text.
    pub footer: String,
    /// Story reference such as `#123`, empty when none.
    pub story: String,
    /// Workflow command, only meaningful with a story.
    pub workflow: Option<Workflow>,
}

/// Answers accumulated so far during a session.
///
/// `None` in a field means "not asked yet" or "answered with a no-value
/// sentinel"; both behave the same for visibility and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAnswers {
    /// Selected commit type.
    pub commit_type: Option<String>,
    /// Selected or typed scope.
    pub scope: Option<String>,
    /// Subject text.
    pub subject: Option<String>,
    /// Body text.
    pub body: Option<String>,
    /// Footer text.
    pub footer: Option<String>,
    /// Story reference.
    pub story: Option<String>,
    /// Raw workflow selection.
    pub workflow: Option<String>,
}

impl PartialAnswers {
    /// Stores the answer to a question.
    ///
    /// Both scope questions write the same field, so a free-text scope
    /// replaces the `custom` sentinel picked from the list.
    pub fn record(&mut self, id: QuestionId, value: Option<String>) {
        let slot = match id {
            QuestionId::Type => &mut self.commit_type,
            QuestionId::ScopeChoice | QuestionId::ScopeInput => &mut self.scope,
            QuestionId::Subject => &mut self.subject,
            QuestionId::Body => &mut self.body,
            QuestionId::Footer => &mut self.footer,
            QuestionId::Story => &mut self.story,
            QuestionId::Workflow => &mut self.workflow,
        };
        *slot = value;
    }

    /// Returns whether a non-empty story has been given.
    pub fn has_story(&self) -> bool {
        self.story.as_deref().is_some_and(|story| !story.is_empty())
    }

    /// Converts the accumulated answers into a complete answer set.
    pub fn finish(self) -> Result<Answers, PromptError> {
        let commit_type = self
            .commit_type
            .ok_or(PromptError::MissingAnswer(QuestionId::Type.field()))?;

        let story = self.story.unwrap_or_default();
        let workflow = if story.is_empty() {
            None
        } else {
            self.workflow.as_deref().map(str::parse::<Workflow>).transpose()?
        };

        Ok(Answers {
            commit_type,
            scope: self.scope,
            subject: self.subject.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            footer: self.footer.unwrap_or_default(),
            story,
            workflow,
        })
    }
}
