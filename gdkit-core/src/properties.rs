//! INI-style properties store holding the project identity.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   properties.cfg
//! ```
//!
//! ```ini
//! [DEFAULT]
//! projectName = demo
//! entrysymbol = demo_entry
//! ```
//!
//! # API pattern
//!
//! Every function takes the properties file path explicitly; there is no
//! process-wide configuration. Use [`properties_path`] to derive it from a
//! project root.
//!
//! Saving is read-modify-write: unrelated sections and keys survive, comments
//! do not. Single writer, last write wins.
//!
//! Indented lines continue the previous value, joined with `\n`, as in
//! Python's `configparser`. Unlike `configparser`, a blank line always ends
//! the value. Multi-line values are written back with a four-space indent.

use std::path::{Path, PathBuf};

use crate::error::{io_err, PropertiesError};
use crate::types::{EntrySymbol, ProjectIdentity, ProjectName};

/// File name of the properties store inside a project root.
pub const PROPERTIES_FILE: &str = "properties.cfg";
/// The only section gdkit reads from or writes to.
pub const DEFAULT_SECTION: &str = "DEFAULT";
pub const PROJECT_NAME_KEY: &str = "projectName";
pub const ENTRY_SYMBOL_KEY: &str = "entrysymbol";

/// `<root>/properties.cfg`. Pure, no I/O.
pub fn properties_path(root: &Path) -> PathBuf {
    root.join(PROPERTIES_FILE)
}

// ---------------------------------------------------------------------------
// 1. Document model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

/// Parsed properties file, order-preserving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesDocument {
    sections: Vec<Section>,
}

impl PropertiesDocument {
    /// Parse `content`. `path` is only used for error context.
    pub fn parse(path: &Path, content: &str) -> Result<Self, PropertiesError> {
        let mut doc = PropertiesDocument::default();
        let mut current: Option<usize> = None;
        // (section index, key) of the entry a continuation line extends.
        let mut last: Option<(usize, String)> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                last = None;
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if raw.starts_with(char::is_whitespace) {
                if let Some((section, key)) = &last {
                    doc.sections[*section].append(key, line);
                    continue;
                }
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(parse_err(path, idx, "unterminated section header"));
                };
                current = Some(doc.section_index_or_insert(name.trim()));
                last = None;
                continue;
            }

            let Some(section) = current else {
                return Err(parse_err(path, idx, "entry before any section header"));
            };
            let Some(split) = line.find(&['=', ':'][..]) else {
                return Err(parse_err(path, idx, "expected 'key = value'"));
            };
            let key = line[..split].trim();
            if key.is_empty() {
                return Err(parse_err(path, idx, "empty key"));
            }
            let value = line[split + 1..].trim();
            doc.sections[section].set(key, value);
            last = Some((section, key.to_string()));
        }

        Ok(doc)
    }

    /// Look up `key` (case-insensitive) in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.get(key))
    }

    /// Insert or replace `key` in `section`, creating the section if absent.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let idx = self.section_index_or_insert(section);
        self.sections[idx].set(key, value);
    }

    /// Render in `[SECTION]` / `key = value` form, one blank line after each
    /// section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(&value.replace('\n', "\n    "));
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            return idx;
        }
        let section = Section {
            name: name.to_string(),
            entries: Vec::new(),
        };
        // DEFAULT always renders first.
        if name == DEFAULT_SECTION {
            self.sections.insert(0, section);
            0
        } else {
            self.sections.push(section);
            self.sections.len() - 1
        }
    }
}

impl Section {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    fn append(&mut self, key: &str, line: &str) {
        if let Some((_, value)) = self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            value.push('\n');
            value.push_str(line);
        }
    }
}

fn parse_err(path: &Path, idx: usize, message: &str) -> PropertiesError {
    PropertiesError::Parse {
        path: path.to_path_buf(),
        line: idx + 1,
        message: message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Read and parse the document at `path`. A missing file is an empty document.
pub fn read_document_at(path: &Path) -> Result<PropertiesDocument, PropertiesError> {
    match std::fs::read_to_string(path) {
        Ok(content) => PropertiesDocument::parse(path, &content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PropertiesDocument::default()),
        Err(e) => Err(io_err(path, e)),
    }
}

/// Load the project identity from `path`.
///
/// Returns `PropertiesError::MissingKey` if `projectName` is absent. The entry
/// symbol falls back to [`DEFAULT_ENTRY_SYMBOL`](crate::DEFAULT_ENTRY_SYMBOL).
pub fn load_at(path: &Path) -> Result<ProjectIdentity, PropertiesError> {
    load_inner(path, None)
}

/// Like [`load_at`], but uses `default_name` when `projectName` is absent.
pub fn load_or_at(
    path: &Path,
    default_name: &ProjectName,
) -> Result<ProjectIdentity, PropertiesError> {
    load_inner(path, Some(default_name))
}

fn load_inner(
    path: &Path,
    default_name: Option<&ProjectName>,
) -> Result<ProjectIdentity, PropertiesError> {
    let doc = read_document_at(path)?;

    let name = match (doc.get(DEFAULT_SECTION, PROJECT_NAME_KEY), default_name) {
        (Some(raw), _) => ProjectName::parse(raw).map_err(|source| PropertiesError::Identity {
            path: path.to_path_buf(),
            source,
        })?,
        (None, Some(default)) => default.clone(),
        (None, None) => {
            return Err(PropertiesError::MissingKey {
                key: PROJECT_NAME_KEY,
                path: path.to_path_buf(),
            })
        }
    };

    let entry_symbol = match doc.get(DEFAULT_SECTION, ENTRY_SYMBOL_KEY) {
        Some(raw) => EntrySymbol::parse(raw).map_err(|source| PropertiesError::Identity {
            path: path.to_path_buf(),
            source,
        })?,
        None => EntrySymbol::default(),
    };

    Ok(ProjectIdentity { name, entry_symbol })
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Write both identity keys to `path`, keeping any other content.
///
/// Write flow: read → set keys → `<file>.tmp` sibling → `rename`.
pub fn save_at(path: &Path, identity: &ProjectIdentity) -> Result<(), PropertiesError> {
    let mut doc = read_document_at(path)?;
    doc.set(DEFAULT_SECTION, PROJECT_NAME_KEY, identity.name.as_str());
    doc.set(DEFAULT_SECTION, ENTRY_SYMBOL_KEY, identity.entry_symbol.as_str());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, doc.render()).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
