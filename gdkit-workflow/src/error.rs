//! Error types for gdkit-workflow.

use std::path::PathBuf;

use thiserror::Error;

use gdkit_core::PropertiesError;
use gdkit_renderer::RenderError;

/// All errors that can arise from workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// An error from the properties store.
    #[error("properties error: {0}")]
    Properties(#[from] PropertiesError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `.gdextension` descriptor where one was expected.
    #[error("no .gdextension file found in {path}")]
    NotFound { path: PathBuf },

    /// Rename destination already exists.
    #[error("cannot move {from} to {to}: destination already exists")]
    MoveConflict { from: PathBuf, to: PathBuf },

    /// The build tool ran and exited unsuccessfully.
    #[error("{program} exited with {}", exit_label(.code))]
    SubprocessFailure { program: String, code: Option<i32> },

    /// The build tool could not be started at all.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Convenience constructor for [`WorkflowError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WorkflowError {
    WorkflowError::Io {
        path: path.into(),
        source,
    }
}
