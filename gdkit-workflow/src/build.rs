//! External build tool boundary.
//!
//! [`BuildTool`] is the seam between the orchestrator and the child process;
//! [`SconsTool`] is the production implementation. The child runs blocking,
//! with no timeout, and inherits the parent's stdio.

use std::num::NonZeroUsize;
use std::path::Path;
use std::process::Command;

use crate::error::WorkflowError;

pub const DEFAULT_BUILD_PROGRAM: &str = "scons";

/// How the build tool exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    /// Non-zero exit; `code` is `None` when the process was killed by a signal.
    Failed { code: Option<i32> },
}

impl BuildStatus {
    pub fn success(&self) -> bool {
        matches!(self, BuildStatus::Success)
    }
}

/// Something that can build the extension in a project root.
pub trait BuildTool {
    /// Program name, used in logs and errors.
    fn program(&self) -> &str;

    /// Run the build in `root` with an optional parallelism hint.
    ///
    /// An error means the tool could not be started; a failed build is
    /// reported through [`BuildStatus::Failed`].
    fn run(&self, root: &Path, jobs: Option<NonZeroUsize>) -> Result<BuildStatus, WorkflowError>;
}

/// Runs `scons [-j N]` (or a substitute program with the same flags).
#[derive(Debug, Clone)]
pub struct SconsTool {
    program: String,
}

impl SconsTool {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_BUILD_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command-line arguments for a given parallelism hint.
    pub fn args(jobs: Option<NonZeroUsize>) -> Vec<String> {
        match jobs {
            Some(n) => vec!["-j".to_string(), n.to_string()],
            None => Vec::new(),
        }
    }
}

impl Default for SconsTool {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTool for SconsTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, root: &Path, jobs: Option<NonZeroUsize>) -> Result<BuildStatus, WorkflowError> {
        let args = Self::args(jobs);
        tracing::info!("running {} {}", self.program, args.join(" "));

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .status()
            .map_err(|source| WorkflowError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(BuildStatus::Success)
        } else {
            Ok(BuildStatus::Failed {
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_jobs_means_no_flags() {
        assert!(SconsTool::args(None).is_empty());
    }

    #[test]
    fn jobs_become_separate_flag_and_value() {
        let jobs = NonZeroUsize::new(8);
        assert_eq!(SconsTool::args(jobs), vec!["-j", "8"]);
    }

    #[test]
    fn default_program_is_scons() {
        assert_eq!(SconsTool::default().program(), "scons");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let tmp = TempDir::new().unwrap();
        let tool = SconsTool::with_program("gdkit-definitely-not-a-real-program");
        let err = tool.run(tmp.path(), None).unwrap_err();
        assert!(matches!(err, WorkflowError::Spawn { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn exit_status_is_reported() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            SconsTool::with_program("true").run(tmp.path(), None).unwrap(),
            BuildStatus::Success
        );
        assert_eq!(
            SconsTool::with_program("false").run(tmp.path(), None).unwrap(),
            BuildStatus::Failed { code: Some(1) }
        );
    }
}
