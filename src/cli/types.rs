//! Types command: lists the commit type catalog.

use anyhow::Result;
use clap::Parser;

use crate::catalog::list_types;

/// Types command options.
#[derive(Parser)]
pub struct TypesCommand {}

impl TypesCommand {
    /// Executes the types command.
    pub fn execute(self) -> Result<()> {
        for choice in list_types() {
            println!("{}", choice.label);
        }
        Ok(())
    }
}
