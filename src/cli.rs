//! CLI interface for pt-commit.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commit;
pub mod config;
pub mod render;
pub mod types;

/// pt-commit: conventional commits linked to Pivotal Tracker stories.
#[derive(Parser)]
#[command(name = "pt-commit")]
#[command(
    about = "Conventional commits linked to Pivotal Tracker stories",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Interactively builds a commit message and commits it.
    Commit(commit::CommitCommand),
    /// Renders a commit message from flags without prompting.
    Render(render::RenderCommand),
    /// Lists the available commit types.
    Types(types::TypesCommand),
    /// Adapter configuration.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Commit(commit_cmd) => commit_cmd.execute().await,
            Commands::Render(render_cmd) => render_cmd.execute(),
            Commands::Types(types_cmd) => types_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_commit_flags() {
        let cli = Cli::try_parse_from(["pt-commit", "commit", "--dry-run", "-C", "web"]).unwrap();
        let Commands::Commit(cmd) = cli.command else {
            panic!("expected commit command");
        };
        assert!(cmd.dry_run);
        assert_eq!(cmd.directory, std::path::PathBuf::from("web"));
    }

    #[test]
    fn dry_run_conflicts_with_message_file() {
        let result = Cli::try_parse_from([
            "pt-commit",
            "commit",
            "--dry-run",
            "--message-file",
            "msg.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn render_rejects_unknown_type() {
        let result =
            Cli::try_parse_from(["pt-commit", "render", "--type", "feature", "--subject", "x"]);
        assert!(result.is_err());
    }
}
