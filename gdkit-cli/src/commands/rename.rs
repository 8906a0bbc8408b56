//! `gdkit rename <NAME>`: update the properties file and move the project.

use anyhow::{Context, Result};
use clap::Args;

use gdkit_core::ProjectName;
use gdkit_workflow::{layout::PROJECT_METADATA_FILE, pipeline, RenameOutcome, SkipReason};

use super::Workspace;
use crate::ProjectNameArg;

/// Arguments for `gdkit rename`.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// New project name.
    pub name: ProjectNameArg,
}

impl RenameArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let renderer = workspace.renderer()?;
        let name: ProjectName = self.name.into();

        let (_, outcome) =
            pipeline::apply_rename(&workspace.root, &workspace.properties, &name, &renderer)
                .with_context(|| format!("rename to '{name}' failed"))?;

        match outcome {
            RenameOutcome::Skipped(SkipReason::SameName) => {
                println!("✓ '{name}' — nothing to do");
            }
            RenameOutcome::Skipped(SkipReason::MissingSource) => {
                println!("✓ Recorded '{name}' (no project directory to move)");
            }
            RenameOutcome::Renamed {
                from,
                to,
                metadata_updated,
                descriptor,
            } => {
                println!("✓ Renamed to '{name}'");
                println!("  Moved: {} -> {}", from.display(), to.display());
                if metadata_updated {
                    println!("  ✎  {}", to.join(PROJECT_METADATA_FILE).display());
                }
                println!("  ✎  {}", descriptor.display());
            }
        }
        Ok(())
    }
}
