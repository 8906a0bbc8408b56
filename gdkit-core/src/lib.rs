//! gdkit core library: identity types, the properties store and their errors.
//!
//! - [`types`]: `ProjectName`, `EntrySymbol`, `ProjectIdentity`
//! - [`error`]: [`IdentityError`], [`PropertiesError`]
//! - [`properties`]: load / save of `properties.cfg`

pub mod error;
pub mod properties;
pub mod types;

pub use error::{IdentityError, PropertiesError};
pub use types::{EntrySymbol, ProjectIdentity, ProjectName, DEFAULT_ENTRY_SYMBOL};
