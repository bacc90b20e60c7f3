//! # sfdelta-manifest
//!
//! Tera-based builder that serializes a [`ChangeSet`] into the deployment
//! manifest wire format.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sfdelta_core::ChangeSet;
//! use sfdelta_manifest::ManifestBuilder;
//!
//! fn render(changes: &ChangeSet) {
//!     if let Ok(builder) = ManifestBuilder::new() {
//!         let manifest = builder.build(changes);
//!         if let Ok(xml) = builder.render(&manifest) {
//!             print!("{xml}");
//!         }
//!     }
//! }
//! ```
//!
//! [`ChangeSet`]: sfdelta_core::ChangeSet

pub mod context;
pub mod engine;
pub mod error;

pub use context::{Manifest, TypeBlock};
pub use engine::{ManifestBuilder, NAMESPACE};
pub use error::ManifestError;
