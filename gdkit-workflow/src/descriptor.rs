//! Clear-and-regenerate path for `.gdextension` descriptors.
//!
//! Used whenever the identity changes explicitly (rename, `gdkit generate`).
//! The whole `bin/` directory is emptied first so artifacts named after a
//! previous identity cannot linger. Clearing is not crash-safe: a failure
//! midway leaves a partially emptied directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gdkit_core::{ProjectIdentity, ProjectName};
use gdkit_renderer::Renderer;

use crate::error::{io_err, WorkflowError};
use crate::layout;
use crate::writer::atomic_write;

/// Remove every file, symlink and subdirectory inside `dir`, keeping `dir`.
///
/// Returns the number of entries removed. A missing `dir` removes nothing.
pub fn clear_dir(dir: &Path) -> Result<usize, WorkflowError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(io_err(dir, e)),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        // file_type() does not follow symlinks, so a link to a directory is
        // unlinked rather than recursed into.
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            std::fs::remove_dir_all(&path).map_err(|e| io_err(&path, e))?;
        } else {
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
        }
        tracing::debug!("removed: {}", path.display());
        removed += 1;
    }
    Ok(removed)
}

/// Clear `<root>/<name>/bin/` and write a freshly generated
/// `<name>.gdextension` into it. Returns the descriptor path.
pub fn regenerate_at(
    root: &Path,
    identity: &ProjectIdentity,
    renderer: &Renderer,
) -> Result<PathBuf, WorkflowError> {
    let content = renderer.descriptor(identity)?;
    install(root, &identity.name, &content)
}

/// Clear `bin/` and write already rendered descriptor `content`.
pub(crate) fn install(
    root: &Path,
    name: &ProjectName,
    content: &str,
) -> Result<PathBuf, WorkflowError> {
    let bin = layout::bin_dir(root, name);
    let removed = clear_dir(&bin)?;
    if removed > 0 {
        tracing::info!("cleared {removed} entries from {}", bin.display());
    }
    std::fs::create_dir_all(&bin).map_err(|e| io_err(&bin, e))?;

    let path = layout::descriptor_path(root, name);
    atomic_write(&path, content)?;
    Ok(path)
}
