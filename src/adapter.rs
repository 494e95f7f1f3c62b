//! End-to-end commit session: story default, questions, rendering, hand-off.

use anyhow::Result;
use tracing::warn;

use crate::config::AdapterConfig;
use crate::message::{render, MAX_LINE_WIDTH};
use crate::prompt::{build_questions, collect_answers, Prompter};
use crate::sink::CommitSink;
use crate::ticket::{derive_story_id, BranchSource};

/// Returns the notice shown before the first question.
pub fn line_limit_notice() -> String {
    format!(
        "Line 1 will be cropped at {MAX_LINE_WIDTH} characters. \
         All other lines will be wrapped after {MAX_LINE_WIDTH} characters."
    )
}

/// Asks the commit questions and returns the rendered message.
///
/// The story question defaults to the ID derived from the current branch.
/// If the branch cannot be read the default is left empty.
pub async fn prompt_message(
    config: &AdapterConfig,
    branch: &dyn BranchSource,
    prompter: &mut dyn Prompter,
) -> Result<String> {
    let story_default = match derive_story_id(branch).await {
        Ok(story_id) => story_id,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "Could not derive story ID from branch");
            String::new()
        }
    };

    let questions = build_questions(config, &story_default);
    let answers = collect_answers(&questions, config, prompter)?;

    Ok(render(&answers))
}

/// Runs a full session and hands the message to `sink` exactly once.
pub async fn run(
    config: &AdapterConfig,
    branch: &dyn BranchSource,
    prompter: &mut dyn Prompter,
    sink: &mut dyn CommitSink,
) -> Result<String> {
    let message = prompt_message(config, branch, prompter).await?;
    sink.commit(&message)?;
    Ok(message)
}
