//! # sfdelta-resolver
//!
//! Maps a changed file path to its `(metadata type, member name)` pair using
//! only directory-name conventions and the [`TypeCatalog`], then folds a whole
//! diff into a [`ChangeSet`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sfdelta_core::{MetadataTypeDescriptor, TypeCatalog};
//! use sfdelta_resolver::{aggregate, resolve};
//!
//! let catalog = TypeCatalog::from_descriptors([MetadataTypeDescriptor::new("classes", "ApexClass")]);
//! let hit = resolve("force-app/main/default/classes/Foo.cls", "force-app/main/default", &catalog);
//! assert_eq!(hit.map(|r| r.member).ok().as_deref(), Some("Foo"));
//!
//! let result = aggregate(["force-app/main/default/classes/Foo.cls"], &["force-app/main/default"], &catalog);
//! assert!(result.unmapped.is_empty());
//! ```
//!
//! [`TypeCatalog`]: sfdelta_core::TypeCatalog
//! [`ChangeSet`]: sfdelta_core::ChangeSet

pub mod aggregator;
pub mod error;
pub mod resolver;
pub mod rules;

pub use aggregator::{aggregate, resolve_with_roots, Aggregation, Unmapped};
pub use error::ResolveError;
pub use resolver::resolve;
pub use rules::{FolderRule, MemberRule, PathParts};
