//! Interactive question flow for building a commit.

pub mod answers;
pub mod error;
pub mod questions;
pub mod terminal;

use anyhow::Result;
use tracing::debug;

use crate::config::AdapterConfig;

pub use answers::{Answers, PartialAnswers, Workflow};
pub use error::PromptError;
pub use questions::{
    build_questions, is_visible, validate, validate_story, Choice, Question, QuestionId,
    QuestionKind, SelectItem,
};
pub use terminal::TerminalPrompter;

/// Something that can put a question to the user and return the answer.
///
/// Select questions yield the chosen entry's value (`None` for the
/// no-value sentinels); input questions always yield `Some(text)`.
pub trait Prompter {
    /// Asks a single question.
    fn ask(&mut self, question: &Question) -> Result<Option<String>>;
}

/// Asks every visible question in order and returns the complete answers.
///
/// Visibility is re-evaluated before each question against the answers
/// collected so far. Answers are checked again here, so a prompter that
/// skips validation cannot smuggle an invalid value through.
pub fn collect_answers(
    questions: &[Question],
    config: &AdapterConfig,
    prompter: &mut dyn Prompter,
) -> Result<Answers> {
    let mut answers = PartialAnswers::default();

    for question in questions {
        if !is_visible(question.id, &answers, config) {
            debug!(question = ?question.id, "Skipping hidden question");
            continue;
        }

        let value = prompter.ask(question)?;
        check_answer(question, value.as_deref())?;
        answers.record(question.id, value);
    }

    Ok(answers.finish()?)
}

fn check_answer(question: &Question, value: Option<&str>) -> Result<(), PromptError> {
    match &question.kind {
        QuestionKind::Select(_) => {
            if question.choices().any(|choice| choice.value.as_deref() == value) {
                Ok(())
            } else {
                Err(PromptError::InvalidChoice {
                    question: question.id.field(),
                    value: value.unwrap_or_default().to_string(),
                })
            }
        }
        QuestionKind::Input { .. } => {
            question
                .validate(value.unwrap_or_default())
                .map_err(|reason| PromptError::Rejected {
                    question: question.id.field(),
                    reason,
                })
        }
    }
}
