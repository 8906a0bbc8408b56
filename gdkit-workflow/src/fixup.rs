//! Post-build descriptor fixup.
//!
//! After the build tool runs, `<name>/bin/` should hold exactly one
//! `.gdextension` file, possibly under a stale name. The fixup pass renames it
//! to `<name>.gdextension` and rewrites only its `entry_symbol` value. The
//! library table is trusted to match the artifacts the build just produced and
//! is not regenerated; every other line is kept byte for byte.
//!
//! Selection when several descriptors exist: `<name>.gdextension` if present,
//! otherwise the lexicographically smallest file name.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};

use gdkit_core::{EntrySymbol, ProjectIdentity, ProjectName};

use crate::error::{io_err, WorkflowError};
use crate::layout::{self, DESCRIPTOR_EXTENSION};
use crate::writer::{atomic_write, WriteResult};

const ENTRY_SYMBOL_PATTERN: &str = r#"entry_symbol = "[^"]+""#;

/// Outcome of a fixup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixupOutcome {
    /// Canonical descriptor path after the pass.
    pub path: PathBuf,
    /// Previous path when the descriptor had to be renamed.
    pub renamed_from: Option<PathBuf>,
    pub write: WriteResult,
}

/// Pick the descriptor to fix up inside `bin_dir`.
///
/// Returns `WorkflowError::NotFound` if the directory is missing or holds no
/// `.gdextension` file.
pub fn find_descriptor(bin_dir: &Path, name: &ProjectName) -> Result<PathBuf, WorkflowError> {
    let not_found = || WorkflowError::NotFound {
        path: bin_dir.to_path_buf(),
    };

    let entries = match std::fs::read_dir(bin_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(io_err(bin_dir, e)),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| io_err(bin_dir, e))?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(DESCRIPTOR_EXTENSION)
        {
            candidates.push(path);
        }
    }
    candidates.sort();

    let canonical = bin_dir.join(layout::descriptor_file_name(name));
    if candidates.contains(&canonical) {
        return Ok(canonical);
    }
    candidates.into_iter().next().ok_or_else(not_found)
}

/// Replace the value of every `entry_symbol = "..."` occurrence in `content`.
///
/// The symbol is inserted literally; `$` has no special meaning.
pub fn rewrite_entry_symbol(content: &str, symbol: &EntrySymbol) -> Result<String, WorkflowError> {
    let pattern = Regex::new(ENTRY_SYMBOL_PATTERN)?;
    let replacement = format!("entry_symbol = \"{symbol}\"");
    Ok(pattern
        .replace_all(content, NoExpand(&replacement))
        .into_owned())
}

/// Run the fixup pass for `identity` under `root`.
///
/// A stray descriptor is moved by writing the patched content to
/// `<name>.gdextension` and then deleting the old file.
pub fn fixup_at(root: &Path, identity: &ProjectIdentity) -> Result<FixupOutcome, WorkflowError> {
    let bin = layout::bin_dir(root, &identity.name);
    let found = find_descriptor(&bin, &identity.name)?;

    let content = std::fs::read_to_string(&found).map_err(|e| io_err(&found, e))?;
    let updated = rewrite_entry_symbol(&content, &identity.entry_symbol)?;

    // Canonical file first; the stray one is only removed once it exists.
    let canonical = layout::descriptor_path(root, &identity.name);
    let write = atomic_write(&canonical, &updated)?;
    let renamed_from = if found != canonical {
        std::fs::remove_file(&found).map_err(|e| io_err(&found, e))?;
        tracing::info!("renamed {} -> {}", found.display(), canonical.display());
        Some(found)
    } else {
        None
    };

    Ok(FixupOutcome {
        path: canonical,
        renamed_from,
        write,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn identity(name: &str, symbol: &str) -> ProjectIdentity {
        ProjectIdentity::new(ProjectName::from(name), EntrySymbol::from(symbol))
    }

    #[test]
    fn rewrite_touches_only_entry_symbol() {
        let content = "[configuration]\n\nentry_symbol = \"old_init\"\nreloadable = true\n";
        let out = rewrite_entry_symbol(content, &EntrySymbol::from("new_init")).unwrap();
        assert_eq!(
            out,
            "[configuration]\n\nentry_symbol = \"new_init\"\nreloadable = true\n"
        );
    }

    #[test]
    fn rewrite_inserts_dollar_literally() {
        let out = rewrite_entry_symbol("entry_symbol = \"x\"", &EntrySymbol::from("a$1b")).unwrap();
        assert_eq!(out, "entry_symbol = \"a$1b\"");
    }

    #[test]
    fn rewrite_without_entry_symbol_line_is_identity() {
        let content = "[libraries]\nlinux.debug.x86_64 = \"res://bin/a.so\"\n";
        let out = rewrite_entry_symbol(content, &EntrySymbol::from("s")).unwrap();
        assert_eq!(out, content);
    }

    #[test]
    fn missing_bin_dir_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = fixup_at(tmp.path(), &identity("demo", "e")).unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound { .. }));
    }

    #[test]
    fn canonical_name_wins_over_lexicographic_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("aaa.gdextension"), "").unwrap();
        fs::write(tmp.path().join("demo.gdextension"), "").unwrap();
        let found = find_descriptor(tmp.path(), &ProjectName::from("demo")).unwrap();
        assert_eq!(found, tmp.path().join("demo.gdextension"));
    }

    #[test]
    fn lexicographic_tie_break_without_canonical() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zeta.gdextension"), "").unwrap();
        fs::write(tmp.path().join("beta.gdextension"), "").unwrap();
        fs::write(tmp.path().join("alpha.txt"), "").unwrap();
        let found = find_descriptor(tmp.path(), &ProjectName::from("demo")).unwrap();
        assert_eq!(found, tmp.path().join("beta.gdextension"));
    }

    #[test]
    fn directories_named_like_descriptors_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("fake.gdextension")).unwrap();
        let err = find_descriptor(tmp.path(), &ProjectName::from("demo")).unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound { .. }));
    }

    #[test]
    fn failed_write_keeps_stray_descriptor() {
        let tmp = TempDir::new().unwrap();
        let bin = tmp.path().join("demo").join("bin");
        // A directory at the canonical path makes the write fail.
        fs::create_dir_all(bin.join("demo.gdextension")).unwrap();
        fs::write(bin.join("other.gdextension"), "entry_symbol = \"x\"\n").unwrap();

        let err = fixup_at(tmp.path(), &identity("demo", "y")).unwrap_err();

        assert!(matches!(err, WorkflowError::Io { .. }));
        assert_eq!(
            fs::read_to_string(bin.join("other.gdextension")).unwrap(),
            "entry_symbol = \"x\"\n"
        );
    }
}
