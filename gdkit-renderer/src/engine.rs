//! Tera rendering engine: [`TemplateKind`] and [`Renderer`].
//!
//! | Template     | Output path (relative to the project root)   |
//! |--------------|----------------------------------------------|
//! | Descriptor   | `<name>/bin/<name>.gdextension`              |
//! | Project      | `<name>/project.godot`                       |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use gdkit_core::{ProjectIdentity, ProjectName};

use crate::context::{DescriptorContext, ProjectContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "descriptor.gdextension.tera",
        include_str!("templates/descriptor.gdextension.tera"),
    ),
    ("project.godot.tera", include_str!("templates/project.godot.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("tera") {
            files.push(path);
        }
    }
    files.sort();

    let mut templates = Vec::new();
    for path in files {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        // Godot expects LF; overrides edited on Windows would otherwise leak CR.
        templates.push((name, contents.replace("\r\n", "\n")));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// Files gdkit knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Descriptor,
    Project,
}

impl TemplateKind {
    pub fn all() -> &'static [TemplateKind] {
        &[TemplateKind::Descriptor, TemplateKind::Project]
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Descriptor => "descriptor.gdextension.tera",
            TemplateKind::Project => "project.godot.tera",
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for descriptors and project metadata.
///
/// Create once with [`Renderer::new`] and reuse; rendering never touches the
/// filesystem.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a [`Renderer`] with embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera(None)? })
    }

    /// Construct a [`Renderer`] whose embedded templates are overridden by any
    /// `.tera` files of the same name found in `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera(Some(dir))? })
    }

    /// Render the `.gdextension` descriptor for `identity`.
    ///
    /// Pure function of the identity and the static library matrix: identical
    /// inputs give byte-identical output.
    pub fn descriptor(&self, identity: &ProjectIdentity) -> Result<String, RenderError> {
        let ctx = DescriptorContext::from_identity(identity).to_tera_context()?;
        Ok(self.tera.render(TemplateKind::Descriptor.template_name(), &ctx)?)
    }

    /// Render a fresh `project.godot` for a scaffolded project.
    pub fn project_metadata(&self, name: &ProjectName) -> Result<String, RenderError> {
        let ctx = ProjectContext::from_name(name).to_tera_context()?;
        Ok(self.tera.render(TemplateKind::Project.template_name(), &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
