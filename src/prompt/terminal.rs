//! Line-based terminal prompter.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::error::PromptError;
use super::questions::{Choice, Question, QuestionKind, SelectItem};
use super::Prompter;

/// Divider printed for [`SelectItem::Separator`].
const SEPARATOR_LINE: &str = "──────────────";

/// Asks questions on a line-oriented terminal.
///
/// The reader and writer are injected so sessions can be driven from tests
/// without a real terminal.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Creates a prompter reading answers from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Reads one answer line without its line ending.
    fn read_answer(&mut self) -> Result<String> {
        self.writer.flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        let bytes = self
            .reader
            .read_line(&mut input)
            .context("Failed to read user input")?;
        if bytes == 0 {
            return Err(PromptError::InputClosed.into());
        }

        let trimmed_len = input.trim_end_matches(['\r', '\n']).len();
        input.truncate(trimmed_len);
        Ok(input)
    }

    fn select(&mut self, message: &str, items: &[SelectItem]) -> Result<Option<String>> {
        writeln!(self.writer, "? {message}")?;

        let mut choices: Vec<&Choice> = Vec::new();
        for item in items {
            match item {
                SelectItem::Choice(choice) => {
                    choices.push(choice);
                    writeln!(self.writer, "  {}) {}", choices.len(), choice.label)?;
                }
                SelectItem::Separator => writeln!(self.writer, "  {SEPARATOR_LINE}")?,
            }
        }

        if choices.is_empty() {
            return Ok(None);
        }

        loop {
            write!(self.writer, "Choice [1]: ")?;
            let input = self.read_answer()?;

            match pick_choice(&choices, input.trim()) {
                Some(choice) => return Ok(choice.value.clone()),
                None => writeln!(
                    self.writer,
                    ">> Please enter a number between 1 and {}",
                    choices.len()
                )?,
            }
        }
    }

    fn input(&mut self, question: &Question, default: Option<&str>) -> Result<String> {
        loop {
            match default {
                Some(default) => write!(self.writer, "? {} ({default}) ", question.message)?,
                None => write!(self.writer, "? {} ", question.message)?,
            }

            let mut answer = self.read_answer()?;
            if answer.is_empty() {
                answer = default.unwrap_or_default().to_string();
            }

            match question.validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => writeln!(self.writer, ">> {reason}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &Question) -> Result<Option<String>> {
        match &question.kind {
            QuestionKind::Select(items) => self.select(question.message, items),
            QuestionKind::Input { default } => {
                self.input(question, default.as_deref()).map(Some)
            }
        }
    }
}

/// Resolves a menu answer: empty picks the first entry, otherwise a 1-based
/// number or a case-insensitive label or value.
fn pick_choice<'a>(choices: &[&'a Choice], input: &str) -> Option<&'a Choice> {
    if input.is_empty() {
        return choices.first().copied();
    }

    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| choices.get(index))
            .copied();
    }

    choices.iter().copied().find(|choice| {
        choice.label.eq_ignore_ascii_case(input)
            || choice
                .value
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdapterConfig;
    use crate::prompt::questions::{build_questions, QuestionId, STORY_REJECTION};
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    fn question(id: QuestionId, story_default: &str) -> Question {
        let config = AdapterConfig {
            scopes: vec!["app".to_string(), "server".to_string()],
        };
        build_questions(&config, story_default)
            .into_iter()
            .find(|q| q.id == id)
            .unwrap()
    }

    #[test]
    fn select_defaults_to_first_choice() {
        let mut prompter = prompter("\n");
        let answer = prompter.ask(&question(QuestionId::Type, "")).unwrap();
        assert_eq!(answer.as_deref(), Some("feat"));

        let shown = output(prompter);
        assert!(shown.contains("? Select the type of change that you're committing:"));
        assert!(shown.contains("  1) feat:      A new feature"));
        assert!(shown.contains("  11) revert:    Reverts a previous commit"));
    }

    #[test]
    fn select_by_number() {
        let mut prompter = prompter("2\n");
        let answer = prompter.ask(&question(QuestionId::Type, "")).unwrap();
        assert_eq!(answer.as_deref(), Some("fix"));
    }

    #[test]
    fn select_by_value() {
        let mut prompter = prompter("Docs\n");
        let answer = prompter.ask(&question(QuestionId::Type, "")).unwrap();
        assert_eq!(answer.as_deref(), Some("docs"));
    }

    #[test]
    fn select_reprompts_on_invalid_choice() {
        let mut prompter = prompter("0\n42\nserver\n");
        let answer = prompter.ask(&question(QuestionId::ScopeChoice, "")).unwrap();
        assert_eq!(answer.as_deref(), Some("server"));

        let shown = output(prompter);
        assert_eq!(
            shown.matches(">> Please enter a number between 1 and 4").count(),
            2
        );
        assert!(shown.contains(SEPARATOR_LINE));
    }

    #[test]
    fn select_sentinel_records_no_value() {
        let mut scope_prompter = prompter("3\n");
        let answer = scope_prompter
            .ask(&question(QuestionId::ScopeChoice, ""))
            .unwrap();
        assert_eq!(answer, None);

        let mut workflow_prompter = prompter("none\n");
        let answer = workflow_prompter
            .ask(&question(QuestionId::Workflow, ""))
            .unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn input_keeps_typed_text() {
        let mut prompter = prompter("add login form\r\n");
        let answer = prompter.ask(&question(QuestionId::Subject, "")).unwrap();
        assert_eq!(answer.as_deref(), Some("add login form"));
    }

    #[test]
    fn input_uses_default_on_empty_answer() {
        let mut prompter = prompter("\n");
        let answer = prompter.ask(&question(QuestionId::Story, "#4242")).unwrap();
        assert_eq!(answer.as_deref(), Some("#4242"));
        assert!(output(prompter).contains("? Pivotal Tracker Story ID: (#4242) "));
    }

    #[test]
    fn story_reprompts_until_valid() {
        let mut prompter = prompter("123\n#123\n");
        let answer = prompter.ask(&question(QuestionId::Story, "")).unwrap();
        assert_eq!(answer.as_deref(), Some("#123"));
        assert!(output(prompter).contains(&format!(">> {STORY_REJECTION}")));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompter = prompter("");
        let err = prompter.ask(&question(QuestionId::Subject, "")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PromptError>(),
            Some(&PromptError::InputClosed)
        );
    }
}
