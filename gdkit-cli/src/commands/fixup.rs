//! `gdkit fixup`: post-build descriptor fixup on its own.

use anyhow::{Context, Result};
use clap::Args;

use gdkit_workflow::fixup_at;

use super::{print_write, Workspace};

/// Arguments for `gdkit fixup`.
#[derive(Args, Debug)]
pub struct FixupArgs {}

impl FixupArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let identity = workspace.identity()?;

        let outcome = fixup_at(&workspace.root, &identity)
            .with_context(|| format!("fixup failed for '{}'", identity.name))?;

        if outcome.renamed_from.is_none() && !outcome.write.is_written() {
            println!("✓ '{}' — nothing to do", identity.name);
            return Ok(());
        }

        println!("✓ '{}' descriptor fixed up", identity.name);
        if let Some(previous) = &outcome.renamed_from {
            println!("  ↳  renamed from {}", previous.display());
        }
        print_write(&outcome.write);
        Ok(())
    }
}
