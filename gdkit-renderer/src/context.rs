//! Template contexts: serializable rendering payloads built from a
//! [`ProjectIdentity`].

use serde::{Deserialize, Serialize};

use gdkit_core::{ProjectIdentity, ProjectName};

use crate::error::RenderError;
use crate::platform::LIBRARY_MATRIX;

/// Minimum Godot version the generated descriptor declares.
pub const COMPATIBILITY_MINIMUM: &str = "4.2";

/// Scene the scaffolded `project.godot` opens on launch.
pub const MAIN_SCENE: &str = "res://main.tscn";

/// Payload for `descriptor.gdextension.tera`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorContext {
    pub entry_symbol: String,
    pub compatibility_minimum: String,
    pub reloadable: bool,
    pub libraries: Vec<LibraryEntry>,
}

/// One `key = "path"` line of the `[libraries]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryEntry {
    pub key: String,
    pub path: String,
}

impl DescriptorContext {
    /// Build the descriptor payload from the full library matrix.
    pub fn from_identity(identity: &ProjectIdentity) -> Self {
        let libraries = LIBRARY_MATRIX
            .iter()
            .map(|target| LibraryEntry {
                key: target.key(),
                path: target.resource_path(&identity.name),
            })
            .collect();

        DescriptorContext {
            entry_symbol: identity.entry_symbol.as_str().to_string(),
            compatibility_minimum: COMPATIBILITY_MINIMUM.to_string(),
            reloadable: true,
            libraries,
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Payload for `project.godot.tera`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectContext {
    pub name: String,
    pub main_scene: String,
}

impl ProjectContext {
    pub fn from_name(name: &ProjectName) -> Self {
        ProjectContext {
            name: name.as_str().to_string(),
            main_scene: MAIN_SCENE.to_string(),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
