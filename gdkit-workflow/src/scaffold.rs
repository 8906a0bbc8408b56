//! First-time project scaffold.
//!
//! Creates `<root>/<name>/project.godot` (kept if it already exists), writes
//! `<name>/bin/<name>.gdextension` and records the identity in the properties
//! file. Unlike the rename path, the `bin/` directory is not cleared.

use std::path::{Path, PathBuf};

use gdkit_core::{properties, ProjectIdentity};
use gdkit_renderer::Renderer;

use crate::error::{io_err, WorkflowError};
use crate::layout;
use crate::writer::{atomic_write, WriteResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub project_dir: PathBuf,
    /// `Unchanged` when an existing `project.godot` was kept.
    pub metadata: WriteResult,
    pub descriptor: WriteResult,
}

pub fn init_at(
    root: &Path,
    properties_file: &Path,
    identity: &ProjectIdentity,
    renderer: &Renderer,
) -> Result<ScaffoldOutcome, WorkflowError> {
    let project_dir = layout::project_dir(root, &identity.name);
    std::fs::create_dir_all(&project_dir).map_err(|e| io_err(&project_dir, e))?;

    let metadata_path = layout::metadata_path(root, &identity.name);
    let metadata = if metadata_path.exists() {
        tracing::info!("keeping existing {}", metadata_path.display());
        WriteResult::Unchanged {
            path: metadata_path,
        }
    } else {
        atomic_write(&metadata_path, &renderer.project_metadata(&identity.name)?)?
    };

    let descriptor = atomic_write(
        &layout::descriptor_path(root, &identity.name),
        &renderer.descriptor(identity)?,
    )?;

    properties::save_at(properties_file, identity)?;

    Ok(ScaffoldOutcome {
        project_dir,
        metadata,
        descriptor,
    })
}
