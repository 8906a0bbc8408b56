//! # gdkit-workflow
//!
//! Filesystem and subprocess workflow for a GDExtension project: descriptor
//! regeneration, project rename, post-build fixup and the build pipeline.
//!
//! Call [`pipeline::run`] for the full `build` flow, or the individual steps
//! ([`rename_at`], [`regenerate_at`], [`fixup_at`]) on their own.

pub mod build;
pub mod descriptor;
pub mod diff;
pub mod error;
pub mod fixup;
pub mod layout;
pub mod pipeline;
pub mod renamer;
pub mod scaffold;
pub mod writer;

pub use build::{BuildStatus, BuildTool, SconsTool};
pub use descriptor::{clear_dir, regenerate_at};
pub use diff::{diff_descriptor_at, FileDiff};
pub use error::WorkflowError;
pub use fixup::{fixup_at, FixupOutcome};
pub use pipeline::{BuildFailurePolicy, BuildOptions, BuildSummary};
pub use renamer::{rename_at, RenameOutcome, SkipReason};
pub use scaffold::{init_at, ScaffoldOutcome};
pub use writer::WriteResult;
