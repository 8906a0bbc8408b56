//! Subcommand implementations.

pub mod build;
pub mod diff;
pub mod fixup;
pub mod generate;
pub mod init;
pub mod rename;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};

use gdkit_core::{properties, ProjectIdentity};
use gdkit_renderer::Renderer;
use gdkit_workflow::WriteResult;

/// Paths resolved from the global flags.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub properties: PathBuf,
    templates: Option<PathBuf>,
}

impl Workspace {
    pub fn new(root: PathBuf, properties: Option<PathBuf>, templates: Option<PathBuf>) -> Self {
        let properties = properties.unwrap_or_else(|| properties::properties_path(&root));
        Self {
            root,
            properties,
            templates,
        }
    }

    pub fn renderer(&self) -> Result<Renderer> {
        match &self.templates {
            Some(dir) => Renderer::with_overrides(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display())),
            None => Renderer::new().context("failed to load built-in templates"),
        }
    }

    pub fn identity(&self) -> Result<ProjectIdentity> {
        properties::load_at(&self.properties)
            .with_context(|| format!("failed to read {}", self.properties.display()))
    }
}

/// One line per write, marked by whether the file changed.
pub(crate) fn print_write(result: &WriteResult) {
    match result {
        WriteResult::Written { path } => println!("  ✎  {}", path.display()),
        WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
    }
}
