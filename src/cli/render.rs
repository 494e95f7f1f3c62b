//! Render command: builds a commit message from flags.

use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;

use crate::catalog;
use crate::message::render;
use crate::prompt::{validate_story, Answers, PromptError, QuestionId, Workflow};
use crate::sink::{CommitSink, WriterSink};

/// Render command options.
#[derive(Parser)]
pub struct RenderCommand {
    /// Commit type keyword.
    #[arg(long = "type", value_name = "TYPE", value_parser = PossibleValuesParser::new(catalog::keywords()))]
    pub commit_type: String,

    /// Scope of the change.
    #[arg(long)]
    pub scope: Option<String>,

    /// Short, imperative description of the change.
    #[arg(long)]
    pub subject: String,

    /// Longer description of the change.
    #[arg(long, default_value = "")]
    pub body: String,

    /// Breaking changes.
    #[arg(long, default_value = "")]
    pub footer: String,

    /// Pivotal Tracker story ID, starting with '#'.
    #[arg(long, default_value = "")]
    pub story: String,

    /// Workflow command (Finishes, Fixes or Delivers); ignored without a story.
    #[arg(long)]
    pub workflow: Option<Workflow>,
}

impl RenderCommand {
    /// Executes the render command.
    pub fn execute(self) -> Result<()> {
        let message = render(&self.into_answers()?);
        WriterSink::new(io::stdout()).commit(&message)
    }

    /// Validates the flags and converts them into answers.
    pub fn into_answers(self) -> Result<Answers, PromptError> {
        let commit_type = catalog::find(&self.commit_type).ok_or_else(|| {
            PromptError::InvalidChoice {
                question: QuestionId::Type.field(),
                value: self.commit_type.clone(),
            }
        })?;

        validate_story(&self.story).map_err(|reason| PromptError::Rejected {
            question: QuestionId::Story.field(),
            reason,
        })?;

        let workflow = if self.story.is_empty() {
            None
        } else {
            self.workflow
        };

        Ok(Answers {
            commit_type: commit_type.keyword.to_string(),
            scope: self.scope,
            subject: self.subject,
            body: self.body,
            footer: self.footer,
            story: self.story,
            workflow,
        })
    }
}
