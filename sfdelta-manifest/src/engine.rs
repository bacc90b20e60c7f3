//! Tera rendering engine: [`ManifestBuilder`].
//!
//! # Wire format
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Package xmlns="http://soap.sforce.com/2006/04/metadata">
//! \t<types>
//! \t\t<members>{name}</members>
//! \t\t<name>{typeLabel}</name>
//! \t</types>
//! </Package>
//! ```
//!
//! Tab-indented; members precede the trailing `<name>` in each block. Names
//! are written verbatim, without XML escaping.

use tera::Tera;

use sfdelta_core::ChangeSet;

use crate::context::Manifest;
use crate::error::ManifestError;

/// Metadata API namespace carried on the `<Package>` root.
pub const NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

// ---------------------------------------------------------------------------
// Embedded template, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const PACKAGE_TEMPLATE: &str = "manifest/package";
const PACKAGE_TPL: &str = include_str!("templates/package.xml.tera");

fn build_tera() -> Result<Tera, ManifestError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(PACKAGE_TEMPLATE, PACKAGE_TPL)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ManifestBuilder
// ---------------------------------------------------------------------------

/// Builds ordered [`Manifest`]s and renders them to XML.
///
/// Create once with [`ManifestBuilder::new`] and reuse.
pub struct ManifestBuilder {
    tera: Tera,
}

impl ManifestBuilder {
    pub fn new() -> Result<Self, ManifestError> {
        Ok(ManifestBuilder { tera: build_tera()? })
    }

    /// Order a change set for output.
    pub fn build(&self, changes: &ChangeSet) -> Manifest {
        Manifest::from_change_set(changes)
    }

    /// Render a manifest to the wire format.
    pub fn render(&self, manifest: &Manifest) -> Result<String, ManifestError> {
        let mut ctx = manifest.to_tera_context()?;
        ctx.insert("namespace", NAMESPACE);
        Ok(self.tera.render(PACKAGE_TEMPLATE, &ctx)?)
    }

    /// [`build`](Self::build) then [`render`](Self::render).
    pub fn render_change_set(&self, changes: &ChangeSet) -> Result<String, ManifestError> {
        self.render(&self.build(changes))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
