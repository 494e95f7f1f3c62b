//! Commit command: interactive session ending in a commit.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::adapter;
use crate::config::{resolve_config, AdapterConfig};
use crate::git::GitRepository;
use crate::prompt::{PromptError, TerminalPrompter};
use crate::sink::{CommitSink, FileSink, GitCommitSink, WriterSink};
use crate::ticket::GitBranchSource;

/// Commit command options.
#[derive(Parser)]
pub struct CommitCommand {
    /// Directory to look up package.json and the git repository from.
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Prints the message to stdout instead of committing.
    #[arg(long, conflicts_with = "message_file")]
    pub dry_run: bool,

    /// Writes the message to a file instead of committing (for prepare-commit-msg hooks).
    #[arg(long, value_name = "PATH")]
    pub message_file: Option<PathBuf>,
}

impl CommitCommand {
    /// Executes the commit command.
    pub async fn execute(self) -> Result<()> {
        if !io::stdin().is_terminal() {
            return Err(PromptError::NotInteractive.into());
        }

        let mut sink = self.open_sink()?;

        let mut ui = io::stderr();
        let config = match resolve_config(&self.directory) {
            Some(resolved) => {
                writeln!(ui, "{}", resolved.notice())?;
                resolved.config
            }
            None => AdapterConfig::default(),
        };
        writeln!(ui, "\n{}\n", adapter::line_limit_notice())?;

        let branch = GitBranchSource::new(&self.directory);
        let mut prompter = TerminalPrompter::new(io::stdin().lock(), ui);

        adapter::run(&config, &branch, &mut prompter, sink.as_mut()).await?;

        Ok(())
    }

    /// Chooses where the message goes, failing before any question is asked
    /// when a commit is impossible.
    fn open_sink(&self) -> Result<Box<dyn CommitSink>> {
        if self.dry_run {
            return Ok(Box::new(WriterSink::new(io::stdout())));
        }

        if let Some(path) = &self.message_file {
            return Ok(Box::new(FileSink::new(path)));
        }

        let repo = GitRepository::open_at(&self.directory).context(
            "Not in a git repository. Please run this command from within a git repository.",
        )?;

        let staged = repo.staged_files()?;
        if staged.is_empty() {
            anyhow::bail!("Nothing staged to commit. Stage changes with `git add` first.");
        }

        println!("📦 Committing {} staged file(s):", staged.len());
        for file in &staged {
            println!("   {} {}", file.status, file.file);
        }

        Ok(Box::new(GitCommitSink::new(repo)))
    }
}
