//! sfdelta core library: metadata data model, type catalog, project config.
//!
//! Public API surface:
//! - [`types`]: newtypes and domain structs ([`ChangeSet`], [`FileChange`], ...)
//! - [`catalog`]: the directory-name → [`MetadataTypeDescriptor`] lookup table
//! - [`project`]: package directories from `sfdx-project.json`
//! - [`error`]: [`CatalogError`], [`ProjectError`]

pub mod catalog;
pub mod error;
pub mod project;
pub mod types;

pub use catalog::TypeCatalog;
pub use error::{CatalogError, ProjectError};
pub use types::{
    ChangeSet, ChangeStatus, FileChange, MetadataTypeDescriptor, Resolution, TypeName,
};
