use std::path::{Path, PathBuf};

use gdkit_core::ProjectName;

pub const PROJECT_METADATA_FILE: &str = "project.godot";
pub const BIN_DIR: &str = "bin";
pub const DESCRIPTOR_EXTENSION: &str = "gdextension";

pub fn project_dir(root: &Path, name: &ProjectName) -> PathBuf {
    root.join(name.as_str())
}

pub fn bin_dir(root: &Path, name: &ProjectName) -> PathBuf {
    project_dir(root, name).join(BIN_DIR)
}

pub fn metadata_path(root: &Path, name: &ProjectName) -> PathBuf {
    project_dir(root, name).join(PROJECT_METADATA_FILE)
}

/// `<name>.gdextension`
pub fn descriptor_file_name(name: &ProjectName) -> String {
    format!("{name}.{DESCRIPTOR_EXTENSION}")
}

pub fn descriptor_path(root: &Path, name: &ProjectName) -> PathBuf {
    bin_dir(root, name).join(descriptor_file_name(name))
}
