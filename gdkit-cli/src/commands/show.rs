//! `gdkit show [--json]`

use anyhow::Result;
use clap::Args;

use super::Workspace;

/// Arguments for `gdkit show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let identity = workspace.identity()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&identity)?);
            return Ok(());
        }

        println!("name:          {}", identity.name);
        println!("entry symbol:  {}", identity.entry_symbol);
        println!("properties:    {}", workspace.properties.display());
        Ok(())
    }
}
