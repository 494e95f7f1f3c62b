//! Question descriptors and their visibility and validation rules.
//!
//! Questions are plain data. Whether a question is asked and whether an
//! answer is accepted are decided by [`is_visible`] and [`validate`], which
//! only look at their explicit arguments.

use crate::catalog;
use crate::config::AdapterConfig;

use super::answers::{PartialAnswers, Workflow};

/// Scope sentinel that asks for a free-text scope.
pub const CUSTOM_SCOPE: &str = "custom";

/// Label of the scope choice that leaves the scope out.
pub const EMPTY_SCOPE_LABEL: &str = "empty";

/// Label of the workflow choice that leaves the command out.
pub const NO_WORKFLOW_LABEL: &str = "none";

/// Marker every story reference starts with.
pub const STORY_PREFIX: char = '#';

/// Message returned when a story reference lacks [`STORY_PREFIX`].
pub const STORY_REJECTION: &str = "Pivotal Tracker Story ID must start with '#'";

/// Identifies a question and the answer field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionId {
    /// Commit type, chosen from the catalog.
    Type,
    /// Scope, chosen from the configured scopes.
    ScopeChoice,
    /// Scope, typed in.
    ScopeInput,
    /// Short description.
    Subject,
    /// Long description.
    Body,
    /// Breaking changes.
    Footer,
    /// Tracker story reference.
    Story,
    /// Tracker workflow command.
    Workflow,
}

impl QuestionId {
    /// Returns the name of the answer field this question fills.
    pub fn field(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::ScopeChoice | Self::ScopeInput => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::Footer => "footer",
            Self::Story => "story",
            Self::Workflow => "workflow",
        }
    }
}

/// One selectable entry of a list question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,
    /// Recorded value; `None` for the "no value" sentinels.
    pub value: Option<String>,
}

impl Choice {
    /// Creates a choice whose value equals its label.
    pub fn named(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: Some(name.to_string()),
        }
    }

    /// Creates a choice that records no value.
    pub fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: None,
        }
    }
}

/// An entry in a list question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// A selectable choice.
    Choice(Choice),
    /// A visual divider.
    Separator,
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one entry from a list.
    Select(Vec<SelectItem>),
    /// Type free text, falling back to `default` on an empty answer.
    Input {
        /// Value used when the answer is left empty.
        default: Option<String>,
    },
}

/// A question descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Which question this is.
    pub id: QuestionId,
    /// Prompt text.
    pub message: &'static str,
    /// Answer mechanics.
    pub kind: QuestionKind,
}

impl Question {
    /// Returns the selectable choices of a list question, skipping separators.
    pub fn choices(&self) -> impl Iterator<Item = &Choice> {
        let items: &[SelectItem] = match &self.kind {
            QuestionKind::Select(items) => items,
            QuestionKind::Input { .. } => &[],
        };
        items.iter().filter_map(|item| match item {
            SelectItem::Choice(choice) => Some(choice),
            SelectItem::Separator => None,
        })
    }

    /// Checks a typed answer against this question's rule.
    pub fn validate(&self, input: &str) -> Result<(), &'static str> {
        validate(self.id, input)
    }
}

/// Builds the ordered question list for a session.
///
/// `story_default` is offered as the story answer when non-empty.
pub fn build_questions(config: &AdapterConfig, story_default: &str) -> Vec<Question> {
    let type_choices = catalog::list_types()
        .into_iter()
        .map(|choice| {
            SelectItem::Choice(Choice {
                label: choice.label,
                value: Some(choice.value.to_string()),
            })
        })
        .collect();

    let mut scope_choices: Vec<SelectItem> = config
        .scopes
        .iter()
        .map(|scope| SelectItem::Choice(Choice::named(scope)))
        .collect();
    scope_choices.extend([
        SelectItem::Separator,
        SelectItem::Choice(Choice::empty(EMPTY_SCOPE_LABEL)),
        SelectItem::Choice(Choice::named(CUSTOM_SCOPE)),
    ]);

    let mut workflow_choices: Vec<SelectItem> = Workflow::ALL
        .iter()
        .map(|workflow| SelectItem::Choice(Choice::named(workflow.as_str())))
        .collect();
    workflow_choices.extend([
        SelectItem::Separator,
        SelectItem::Choice(Choice::empty(NO_WORKFLOW_LABEL)),
    ]);

    let story_default = (!story_default.is_empty()).then(|| story_default.to_string());

    vec![
        Question {
            id: QuestionId::Type,
            message: "Select the type of change that you're committing:",
            kind: QuestionKind::Select(type_choices),
        },
        Question {
            id: QuestionId::ScopeChoice,
            message: "Denote the scope of this change (devops, app, server, etc.):",
            kind: QuestionKind::Select(scope_choices),
        },
        Question {
            id: QuestionId::ScopeInput,
            message: "Denote the SCOPE of this change:",
            kind: QuestionKind::Input { default: None },
        },
        Question {
            id: QuestionId::Subject,
            message: "Write a short, imperative tense description of the change:",
            kind: QuestionKind::Input { default: None },
        },
        Question {
            id: QuestionId::Body,
            message: "Provide a longer description of the change:",
            kind: QuestionKind::Input { default: None },
        },
        Question {
            id: QuestionId::Footer,
            message: "List any breaking changes:",
            kind: QuestionKind::Input { default: None },
        },
        Question {
            id: QuestionId::Story,
            message: "Pivotal Tracker Story ID:",
            kind: QuestionKind::Input {
                default: story_default,
            },
        },
        Question {
            id: QuestionId::Workflow,
            message: "Workflow command (testing, closed, etc.) (optional):",
            kind: QuestionKind::Select(workflow_choices),
        },
    ]
}

/// Decides whether a question is asked, given the answers so far.
pub fn is_visible(id: QuestionId, answers: &PartialAnswers, config: &AdapterConfig) -> bool {
    match id {
        QuestionId::ScopeChoice => !config.scopes.is_empty(),
        QuestionId::ScopeInput => {
            config.scopes.is_empty() || answers.scope.as_deref() == Some(CUSTOM_SCOPE)
        }
        QuestionId::Workflow => answers.has_story(),
        QuestionId::Type
        | QuestionId::Subject
        | QuestionId::Body
        | QuestionId::Footer
        | QuestionId::Story => true,
    }
}

/// Checks a typed answer; `Err` carries the message to show before re-asking.
pub fn validate(id: QuestionId, input: &str) -> Result<(), &'static str> {
    match id {
        QuestionId::Story => validate_story(input),
        _ => Ok(()),
    }
}

/// Accepts an empty story or one starting with `#`.
pub fn validate_story(input: &str) -> Result<(), &'static str> {
    if input.is_empty() || input.starts_with(STORY_PREFIX) {
        Ok(())
    } else {
        Err(STORY_REJECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(scopes: &[&str]) -> AdapterConfig {
        AdapterConfig {
            scopes: scopes.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn question(questions: &[Question], id: QuestionId) -> &Question {
        questions.iter().find(|q| q.id == id).unwrap()
    }

    #[test]
    fn questions_in_fixed_order() {
        let ids: Vec<QuestionId> = build_questions(&AdapterConfig::default(), "")
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::Type,
                QuestionId::ScopeChoice,
                QuestionId::ScopeInput,
                QuestionId::Subject,
                QuestionId::Body,
                QuestionId::Footer,
                QuestionId::Story,
                QuestionId::Workflow,
            ]
        );
    }

    #[test]
    fn type_choices_come_from_catalog() {
        let questions = build_questions(&AdapterConfig::default(), "");
        let values: Vec<Option<String>> = question(&questions, QuestionId::Type)
            .choices()
            .map(|c| c.value.clone())
            .collect();
        assert_eq!(values.len(), catalog::COMMIT_TYPES.len());
        assert_eq!(values[0].as_deref(), Some("feat"));
    }

    #[test]
    fn scope_choices_end_with_sentinels() {
        let questions = build_questions(&config_with(&["app", "server"]), "");
        let scope = question(&questions, QuestionId::ScopeChoice);

        let QuestionKind::Select(items) = &scope.kind else {
            panic!("scope choice should be a select question");
        };
        assert_eq!(
            items,
            &vec![
                SelectItem::Choice(Choice::named("app")),
                SelectItem::Choice(Choice::named("server")),
                SelectItem::Separator,
                SelectItem::Choice(Choice::empty("empty")),
                SelectItem::Choice(Choice::named("custom")),
            ]
        );
    }

    #[test]
    fn workflow_choices_include_none() {
        let questions = build_questions(&AdapterConfig::default(), "");
        let labels: Vec<&str> = question(&questions, QuestionId::Workflow)
            .choices()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Finishes", "Fixes", "Delivers", "none"]);
    }

    #[test]
    fn story_default_only_when_derived() {
        let questions = build_questions(&AdapterConfig::default(), "#1234");
        assert_eq!(
            question(&questions, QuestionId::Story).kind,
            QuestionKind::Input {
                default: Some("#1234".to_string())
            }
        );

        let questions = build_questions(&AdapterConfig::default(), "");
        assert_eq!(
            question(&questions, QuestionId::Story).kind,
            QuestionKind::Input { default: None }
        );
    }

    #[test]
    fn free_text_scope_without_configured_scopes() {
        let config = AdapterConfig::default();
        let answers = PartialAnswers::default();
        assert!(!is_visible(QuestionId::ScopeChoice, &answers, &config));
        assert!(is_visible(QuestionId::ScopeInput, &answers, &config));
    }

    #[test]
    fn scope_list_with_configured_scopes() {
        let config = config_with(&["app"]);
        let mut answers = PartialAnswers::default();
        assert!(is_visible(QuestionId::ScopeChoice, &answers, &config));

        answers.record(QuestionId::ScopeChoice, Some("app".to_string()));
        assert!(!is_visible(QuestionId::ScopeInput, &answers, &config));

        answers.record(QuestionId::ScopeChoice, None);
        assert!(!is_visible(QuestionId::ScopeInput, &answers, &config));
    }

    #[test]
    fn custom_scope_shows_free_text() {
        let config = config_with(&["app"]);
        let mut answers = PartialAnswers::default();
        answers.record(QuestionId::ScopeChoice, Some(CUSTOM_SCOPE.to_string()));
        assert!(is_visible(QuestionId::ScopeInput, &answers, &config));
    }

    #[test]
    fn workflow_only_with_story() {
        let config = AdapterConfig::default();
        let mut answers = PartialAnswers::default();
        assert!(!is_visible(QuestionId::Workflow, &answers, &config));

        answers.record(QuestionId::Story, Some(String::new()));
        assert!(!is_visible(QuestionId::Workflow, &answers, &config));

        answers.record(QuestionId::Story, Some("#77".to_string()));
        assert!(is_visible(QuestionId::Workflow, &answers, &config));
    }

    #[test]
    fn story_validation() {
        assert_eq!(validate_story("123"), Err(STORY_REJECTION));
        assert_eq!(validate_story("#123"), Ok(()));
        assert_eq!(validate_story(""), Ok(()));
        assert_eq!(validate(QuestionId::Story, "abc"), Err(STORY_REJECTION));
    }

    #[test]
    fn other_questions_accept_anything() {
        assert_eq!(validate(QuestionId::Subject, "123"), Ok(()));
        assert_eq!(validate(QuestionId::ScopeInput, ""), Ok(()));
    }
}
