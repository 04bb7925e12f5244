//! SCORM manifest (`imsmanifest.xml`) model, construction, version detection
//! and validation.
//!
//! ```no_run
//! use scorm_core::manifest;
//! use scorm_core::xml::XmlTree;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = std::fs::read_to_string("imsmanifest.xml")?;
//! let tree = XmlTree::parse(&xml)?;
//! let manifest = manifest::build(&tree)?;
//!
//! println!("SCORM {}", manifest::detect(&manifest));
//! let report = manifest::validate(&manifest);
//! for error in &report.errors {
//!     println!("error: {}", error);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod model;
mod validate;
mod version;

pub use builder::{
    DEFAULT_MAX_ITEM_DEPTH, MANIFEST_ROOT_NAMES, ManifestBuilder, build, extract_title,
};
pub use model::{
    DEFAULT_RESOURCE_TYPE, DEFAULT_TITLE, Item, Manifest, Metadata, Organization, Resource,
    ResourceFile,
};
pub use validate::{ValidationResult, validate};
pub use version::{ScormVersion, detect};
