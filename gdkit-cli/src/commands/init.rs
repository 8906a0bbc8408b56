//! `gdkit init <NAME> [--entry-symbol SYM]`

use anyhow::{Context, Result};
use clap::Args;

use gdkit_core::ProjectIdentity;
use gdkit_workflow::scaffold;

use super::{print_write, Workspace};
use crate::{EntrySymbolArg, ProjectNameArg};

/// Scaffold a project directory and record its identity.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name; becomes the directory and descriptor name.
    pub name: ProjectNameArg,

    /// Exported initialization function of the extension
    /// [default: default_entry_symbol].
    #[arg(long, value_name = "SYM")]
    pub entry_symbol: Option<EntrySymbolArg>,
}

impl InitArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let renderer = workspace.renderer()?;
        let identity = ProjectIdentity::new(
            self.name.into(),
            self.entry_symbol.map(Into::into).unwrap_or_default(),
        );

        let outcome = scaffold::init_at(
            &workspace.root,
            &workspace.properties,
            &identity,
            &renderer,
        )
        .with_context(|| format!("failed to init project '{}'", identity.name))?;

        println!(
            "✓ Initialized '{}' in {}",
            identity.name,
            outcome.project_dir.display()
        );
        print_write(&outcome.metadata);
        print_write(&outcome.descriptor);
        println!("  Saved to: {}", workspace.properties.display());
        Ok(())
    }
}
