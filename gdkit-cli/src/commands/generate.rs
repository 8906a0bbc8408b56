//! `gdkit generate`: clear `bin/` and write a fresh descriptor.

use anyhow::{Context, Result};
use clap::Args;

use gdkit_workflow::regenerate_at;

use super::Workspace;

/// Arguments for `gdkit generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {}

impl GenerateArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let identity = workspace.identity()?;
        let renderer = workspace.renderer()?;

        let path = regenerate_at(&workspace.root, &identity, &renderer)
            .with_context(|| format!("failed to regenerate descriptor for '{}'", identity.name))?;

        println!("✓ Regenerated '{}' descriptor", identity.name);
        println!("  ✎  {}", path.display());
        Ok(())
    }
}
