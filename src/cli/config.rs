//! Configuration-related CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{resolve_config, ResolvedConfig, ADAPTER_NAME};

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the adapter config resolved from the nearest package.json.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Directory to start the package.json lookup from.
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        println!("{}", describe(&self.directory)?);
        Ok(())
    }
}

/// Describes the config resolved from `directory`.
fn describe(directory: &Path) -> Result<String> {
    match resolve_config(directory) {
        Some(resolved) => format_resolved(&resolved),
        None => Ok(format!("No {ADAPTER_NAME} config found")),
    }
}

fn format_resolved(resolved: &ResolvedConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(&resolved.config)
        .context("Failed to serialize adapter config")?;
    Ok(format!("Manifest: {}\n{json}", resolved.manifest.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdapterConfig;

    #[test]
    fn formats_manifest_and_scopes() -> Result<()> {
        let resolved = ResolvedConfig {
            config: AdapterConfig {
                scopes: vec!["app".to_string()],
            },
            manifest: PathBuf::from("/work/package.json"),
        };

        assert_eq!(
            format_resolved(&resolved)?,
            "Manifest: /work/package.json\n{\n  \"scopes\": [\n    \"app\"\n  ]\n}"
        );
        Ok(())
    }
}
