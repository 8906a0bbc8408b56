//! `gdkit build`: optional rename, build tool, descriptor fixup.

use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gdkit_workflow::{
    build::DEFAULT_BUILD_PROGRAM,
    pipeline::{self, BuildFailurePolicy, BuildOptions},
    BuildStatus, RenameOutcome, SconsTool,
};

use super::{print_write, Workspace};
use crate::ProjectNameArg;

/// Arguments for `gdkit build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Parallel jobs, forwarded to the build tool as `-j N`.
    #[arg(short = 'j', long = "threads", value_name = "N")]
    pub threads: Option<NonZeroUsize>,

    /// Rename the project to NAME before building.
    #[arg(short = 'p', long = "project-name", value_name = "NAME")]
    pub project_name: Option<ProjectNameArg>,

    /// Program to run instead of scons. It receives the same `-j` flag.
    #[arg(long, value_name = "PROG", default_value = DEFAULT_BUILD_PROGRAM)]
    pub build_command: String,

    /// Stop with an error when the build tool fails instead of running the
    /// fixup pass anyway.
    #[arg(long)]
    pub fail_on_build_error: bool,
}

impl BuildArgs {
    pub fn run(self, workspace: &Workspace) -> Result<()> {
        let renderer = workspace.renderer()?;

        let mut options = BuildOptions::new(workspace.root.clone());
        options.properties = workspace.properties.clone();
        options.new_name = self.project_name.map(Into::into);
        options.jobs = self.threads;
        options.on_build_failure = if self.fail_on_build_error {
            BuildFailurePolicy::Abort
        } else {
            BuildFailurePolicy::Continue
        };

        let tool = SconsTool::with_program(&self.build_command);
        let summary = pipeline::run(&options, &renderer, &tool).context("build failed")?;

        if let Some(RenameOutcome::Renamed { from, to, .. }) = &summary.rename {
            println!("✓ Moved {} -> {}", from.display(), to.display());
        }

        match summary.build {
            BuildStatus::Success => {
                println!("{} {} succeeded", "✓".green().bold(), self.build_command);
            }
            BuildStatus::Failed { code } => {
                let exit = match code {
                    Some(code) => format!("exit code {code}"),
                    None => "terminated by signal".to_string(),
                };
                println!("{} {} failed ({exit})", "✗".red().bold(), self.build_command);
            }
        }

        println!(
            "✓ '{}' descriptor fixed up (entry symbol '{}')",
            summary.identity.name, summary.identity.entry_symbol
        );
        if let Some(previous) = &summary.fixup.renamed_from {
            println!("  ↳  renamed from {}", previous.display());
        }
        print_write(&summary.fixup.write);
        Ok(())
    }
}
