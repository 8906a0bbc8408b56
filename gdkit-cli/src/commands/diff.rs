//! `gdkit diff`: show what `gdkit generate` would change.

use anyhow::{Context, Result};
use clap::Args;

use gdkit_workflow::diff_descriptor_at;

use super::Workspace;

/// Arguments for `gdkit diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {}

impl DiffArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let identity = workspace.identity()?;
        let renderer = workspace.renderer()?;

        let diff = diff_descriptor_at(&workspace.root, &identity, &renderer)
            .with_context(|| format!("diff failed for '{}'", identity.name))?;

        match diff {
            None => println!("No differences for '{}'.", identity.name),
            Some(diff) => {
                print!("{}", diff.unified_diff);
                if !diff.unified_diff.ends_with('\n') {
                    println!();
                }
            }
        }
        Ok(())
    }
}
