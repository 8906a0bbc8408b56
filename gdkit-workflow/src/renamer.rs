//! Project directory rename.
//!
//! `<root>/<old>/` moves to `<root>/<new>/`, the `name="<old>"` field of
//! `project.godot` is rewritten, and the descriptor is regenerated in the new
//! location. The descriptor is rendered before anything moves. If the
//! metadata edit or the descriptor write fails afterwards, the metadata is
//! restored and the directory is moved back.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gdkit_core::{ProjectIdentity, ProjectName};
use gdkit_renderer::Renderer;

use crate::descriptor;
use crate::error::{io_err, WorkflowError};
use crate::layout::{self, PROJECT_METADATA_FILE};
use crate::writer::atomic_write;

/// Why a rename did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Old and new names are equal.
    SameName,
    /// `<root>/<old>` is not a directory.
    MissingSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Skipped(SkipReason),
    Renamed {
        from: PathBuf,
        to: PathBuf,
        /// Whether `project.godot` contained the old name and was rewritten.
        metadata_updated: bool,
        descriptor: PathBuf,
    },
}

/// Rename the project directory from `old` to `identity.name`.
pub fn rename_at(
    root: &Path,
    old: &ProjectName,
    identity: &ProjectIdentity,
    renderer: &Renderer,
) -> Result<RenameOutcome, WorkflowError> {
    let new = &identity.name;
    if old == new {
        return Ok(RenameOutcome::Skipped(SkipReason::SameName));
    }

    let from = layout::project_dir(root, old);
    if !from.is_dir() {
        tracing::info!("no project directory at {}; skipping rename", from.display());
        return Ok(RenameOutcome::Skipped(SkipReason::MissingSource));
    }

    let to = layout::project_dir(root, new);
    // std::fs::rename silently replaces an empty destination directory on
    // POSIX, so occupancy is checked up front.
    if to.symlink_metadata().is_ok() {
        return Err(WorkflowError::MoveConflict { from, to });
    }

    // Rendering can fail on a broken override template; do it before any move.
    let content = renderer.descriptor(identity)?;

    std::fs::rename(&from, &to).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => WorkflowError::MoveConflict {
            from: from.clone(),
            to: to.clone(),
        },
        _ => io_err(&from, e),
    })?;
    tracing::info!("moved {} -> {}", from.display(), to.display());

    let metadata_path = to.join(PROJECT_METADATA_FILE);
    let original_metadata = match read_optional(&metadata_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            roll_back(&from, &to, &metadata_path, None);
            return Err(err);
        }
    };

    let finished = rewrite_metadata_name(&metadata_path, original_metadata.as_deref(), old, new)
        .and_then(|updated| {
            let descriptor = descriptor::install(root, &identity.name, &content)?;
            Ok((updated, descriptor))
        });

    match finished {
        Ok((metadata_updated, descriptor)) => Ok(RenameOutcome::Renamed {
            from,
            to,
            metadata_updated,
            descriptor,
        }),
        Err(err) => {
            roll_back(&from, &to, &metadata_path, original_metadata);
            Err(err)
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, WorkflowError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_err(path, e)),
    }
}

/// Undo a move: put the metadata bytes back, then move `to` back to `from`.
///
/// Artifacts already removed from `bin/` are not recovered.
fn roll_back(from: &Path, to: &Path, metadata_path: &Path, metadata: Option<Vec<u8>>) {
    if let Some(bytes) = metadata {
        if let Err(e) = std::fs::write(metadata_path, bytes) {
            tracing::error!("failed to restore {}: {e}", metadata_path.display());
        }
    }
    if let Err(e) = std::fs::rename(to, from) {
        tracing::error!(
            "failed to move {} back to {}: {e}",
            to.display(),
            from.display()
        );
    }
}

/// Replace `name="<old>"` with `name="<new>"` in the metadata file.
///
/// `content` is the file's current bytes; `None` means there is no file,
/// which is not an error. Returns whether the file changed.
fn rewrite_metadata_name(
    path: &Path,
    content: Option<&[u8]>,
    old: &ProjectName,
    new: &ProjectName,
) -> Result<bool, WorkflowError> {
    let Some(bytes) = content else {
        return Ok(false);
    };
    let content = std::str::from_utf8(bytes).map_err(|e| {
        io_err(path, std::io::Error::new(ErrorKind::InvalidData, e))
    })?;

    let updated = content.replace(&format!("name=\"{old}\""), &format!("name=\"{new}\""));
    Ok(atomic_write(path, &updated)?.is_written())
}
