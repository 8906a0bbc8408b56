//! Unified diff support for `gdkit diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use gdkit_core::ProjectIdentity;
use gdkit_renderer::Renderer;

use crate::error::{io_err, WorkflowError};
use crate::layout;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Compare the on-disk descriptor with a freshly generated one.
///
/// Returns `None` when they are identical. A missing descriptor diffs against
/// empty content. No files are written.
pub fn diff_descriptor_at(
    root: &Path,
    identity: &ProjectIdentity,
    renderer: &Renderer,
) -> Result<Option<FileDiff>, WorkflowError> {
    let path = layout::descriptor_path(root, &identity.name);
    let rendered = renderer.descriptor(identity)?;
    let existing = read_existing_or_empty(&path)?;
    if existing == rendered {
        return Ok(None);
    }

    let relative = path.strip_prefix(root).unwrap_or(path.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path,
        unified_diff: unified,
    }))
}

fn read_existing_or_empty(path: &Path) -> Result<String, WorkflowError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
