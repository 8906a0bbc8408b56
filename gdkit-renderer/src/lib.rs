//! # gdkit-renderer
//!
//! Tera-based generator for `.gdextension` descriptors and `project.godot`
//! files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gdkit_core::{EntrySymbol, ProjectIdentity, ProjectName};
//! use gdkit_renderer::Renderer;
//!
//! fn print_descriptor() {
//!     let identity = ProjectIdentity::new(
//!         ProjectName::from("demo"),
//!         EntrySymbol::from("demo_library_init"),
//!     );
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(text) = renderer.descriptor(&identity) {
//!             print!("{text}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod platform;

pub use context::{DescriptorContext, LibraryEntry, COMPATIBILITY_MINIMUM};
pub use engine::{Renderer, TemplateKind};
pub use error::RenderError;
pub use platform::{Arch, BuildMode, LibraryTarget, Platform, LIBRARY_MATRIX};
