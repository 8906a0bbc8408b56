//! Build orchestrator: identity → rename → build tool → fixup.
//!
//! Sequential and terminal on the first error, with one configurable
//! exception: a failing build tool only aborts the run under
//! [`BuildFailurePolicy::Abort`]. The default keeps going to the fixup pass.

use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use gdkit_core::{properties, ProjectIdentity, ProjectName};
use gdkit_renderer::Renderer;

use crate::build::{BuildStatus, BuildTool};
use crate::error::{io_err, WorkflowError};
use crate::fixup::{fixup_at, FixupOutcome};
use crate::renamer::{rename_at, RenameOutcome};

/// What to do when the build tool exits unsuccessfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildFailurePolicy {
    /// Log a warning and run the fixup pass anyway.
    #[default]
    Continue,
    /// Stop with [`WorkflowError::SubprocessFailure`].
    Abort,
}

/// Inputs for a [`run`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding the properties file and the project directory.
    pub root: PathBuf,
    /// Properties file; `<root>/properties.cfg` unless overridden.
    pub properties: PathBuf,
    /// Rename the project before building.
    pub new_name: Option<ProjectName>,
    /// Parallelism hint for the build tool.
    pub jobs: Option<NonZeroUsize>,
    pub on_build_failure: BuildFailurePolicy,
}

impl BuildOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let properties = properties::properties_path(&root);
        BuildOptions {
            root,
            properties,
            new_name: None,
            jobs: None,
            on_build_failure: BuildFailurePolicy::default(),
        }
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub identity: ProjectIdentity,
    /// `None` when no rename was requested.
    pub rename: Option<RenameOutcome>,
    pub build: BuildStatus,
    pub fixup: FixupOutcome,
}

/// Persist `new_name` and rename the project directory to match.
///
/// If the rename fails, the properties file is restored byte for byte so it
/// keeps pointing at the directory that still exists.
pub fn apply_rename(
    root: &Path,
    properties_file: &Path,
    new_name: &ProjectName,
    renderer: &Renderer,
) -> Result<(ProjectIdentity, RenameOutcome), WorkflowError> {
    let current = properties::load_or_at(properties_file, new_name)?;
    let renamed = current.renamed(new_name.clone());
    let snapshot = read_snapshot(properties_file)?;

    tracing::info!(
        "updating project name to '{}' (entry symbol '{}')",
        renamed.name,
        renamed.entry_symbol
    );
    properties::save_at(properties_file, &renamed)?;

    match rename_at(root, &current.name, &renamed, renderer) {
        Ok(outcome) => Ok((renamed, outcome)),
        Err(err) => {
            if let Err(restore) = restore_snapshot(properties_file, snapshot) {
                tracing::error!(
                    "failed to restore {}: {restore}",
                    properties_file.display()
                );
            }
            Err(err)
        }
    }
}

/// Raw bytes of `path`, `None` if it does not exist.
fn read_snapshot(path: &Path) -> Result<Option<Vec<u8>>, WorkflowError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_err(path, e)),
    }
}

fn restore_snapshot(path: &Path, snapshot: Option<Vec<u8>>) -> std::io::Result<()> {
    match snapshot {
        Some(bytes) => std::fs::write(path, bytes),
        None => std::fs::remove_file(path),
    }
}

/// Run the full build pipeline.
pub fn run(
    options: &BuildOptions,
    renderer: &Renderer,
    tool: &dyn BuildTool,
) -> Result<BuildSummary, WorkflowError> {
    let (identity, rename) = match &options.new_name {
        Some(new_name) => {
            let (identity, outcome) =
                apply_rename(&options.root, &options.properties, new_name, renderer)?;
            (identity, Some(outcome))
        }
        None => (properties::load_at(&options.properties)?, None),
    };

    let build = tool.run(&options.root, options.jobs)?;
    if let BuildStatus::Failed { code } = build {
        let failure = WorkflowError::SubprocessFailure {
            program: tool.program().to_string(),
            code,
        };
        match options.on_build_failure {
            BuildFailurePolicy::Abort => return Err(failure),
            BuildFailurePolicy::Continue => {
                tracing::warn!("{failure}; continuing with descriptor fixup");
            }
        }
    }

    let fixup = fixup_at(&options.root, &identity)?;

    Ok(BuildSummary {
        identity,
        rename,
        build,
        fixup,
    })
}
